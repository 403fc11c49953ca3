//! View command handlers for Lookback CLI

use crate::browser::ComposedView;
use crate::cli::args::*;
use crate::cli::render;
use crate::cli::CliApp;
use crate::error::Result;
use crate::types::ViewMode;
use std::collections::BTreeMap;

fn show_view(app: &mut CliApp, args: &ViewArgs, mode: ViewMode) -> Result<()> {
    let criteria = args.filter.to_criteria(app.browser.calendar())?;
    app.browser.set_criteria(criteria);
    app.browser.set_view_mode(mode);

    let opts = app.render_options(args);
    let view = app.browser.compose();
    let total = view.record_count();

    if total == 0 {
        if !app.quiet {
            println!("No matching history records");
        }
        return Ok(());
    }

    let lines = match &view {
        ComposedView::List(records) => render::render_list(records, &opts),
        ComposedView::Timeline(groups) => render::render_timeline(groups, &opts),
        ComposedView::Grouped(summaries) => render::render_grouped(summaries, &opts),
    };
    for line in lines {
        println!("{}", line);
    }

    if !app.quiet {
        println!("\nFound {} records", total);
    }

    Ok(())
}

pub fn handle_list(app: &mut CliApp, args: &ViewArgs) -> Result<()> {
    show_view(app, args, ViewMode::List)
}

pub fn handle_timeline(app: &mut CliApp, args: &ViewArgs) -> Result<()> {
    show_view(app, args, ViewMode::Timeline)
}

pub fn handle_grouped(app: &mut CliApp, args: &ViewArgs) -> Result<()> {
    show_view(app, args, ViewMode::Grouped)
}

pub fn handle_domains(app: &mut CliApp, args: &ChoicesArgs) -> Result<()> {
    let domains = app.browser.available_domains();
    if args.counts {
        let groups = app.browser.grouped();
        for domain in domains {
            let count = groups.get(&domain).map_or(0, Vec::len);
            println!("{}: {}", domain, count);
        }
    } else {
        for domain in domains {
            println!("{}", domain);
        }
    }
    Ok(())
}

pub fn handle_tags(app: &mut CliApp, args: &ChoicesArgs) -> Result<()> {
    let tags = app.browser.available_tags();
    if args.counts {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in app.browser.store().records() {
            for tag in record.tags() {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        for tag in &tags {
            println!("{}: {}", tag, counts.get(tag.as_str()).copied().unwrap_or(0));
        }
    } else {
        for tag in tags {
            println!("{}", tag);
        }
    }
    Ok(())
}

//! Export handler for Lookback CLI

use crate::cli::args::*;
use crate::cli::CliApp;
use crate::error::Result;
use std::fs;

pub fn handle_export(app: &mut CliApp, args: &ExportArgs) -> Result<()> {
    let criteria = args.filter.to_criteria(app.browser.calendar())?;
    app.browser.set_criteria(criteria);

    let (content, count) = if args.by_date {
        let groups = app.browser.timeline();
        let count = groups.iter().map(|g| g.len()).sum::<usize>();
        (serde_json::to_string_pretty(&groups)?, count)
    } else {
        let records = app.browser.filtered();
        (serde_json::to_string_pretty(&records)?, records.len())
    };

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, content)?;
            if !app.quiet {
                println!("Exported {} records to {}", count, path.display());
            }
        }
        None => println!("{}", content),
    }

    Ok(())
}

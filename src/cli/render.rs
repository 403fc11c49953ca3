//! Plain-text rendering of composed views

use crate::calendar::Calendar;
use crate::grouping::{DomainSummary, HistoryGroup};
use crate::record::VisitRecord;

/// Rendering options shared by every view
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub calendar: Calendar,
    pub time_format: String,
    pub show_ids: bool,
    pub limit: usize,
}

fn format_time(record: &VisitRecord, opts: &RenderOptions, format: &str) -> String {
    opts.calendar
        .localize(record.visit_time())
        .format(format)
        .to_string()
}

fn tag_suffix(record: &VisitRecord) -> String {
    if record.tags().is_empty() {
        return String::new();
    }
    let tags: Vec<String> = record.tags().iter().map(|t| format!("#{}", t)).collect();
    format!("  {}", tags.join(" "))
}

fn visits_suffix(record: &VisitRecord) -> String {
    if record.visit_count() > 1 {
        format!(", {} visits", record.visit_count())
    } else {
        String::new()
    }
}

fn id_prefix(record: &VisitRecord, opts: &RenderOptions) -> String {
    if opts.show_ids {
        format!("[{}] ", record.id())
    } else {
        String::new()
    }
}

/// One or two lines per record, newest first as given
pub fn render_list(records: &[VisitRecord], opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();
    for record in records.iter().take(opts.limit) {
        lines.push(format!(
            "{}{}  {}",
            id_prefix(record, opts),
            format_time(record, opts, &opts.time_format),
            record.title()
        ));
        lines.push(format!(
            "    {} ({}{}){}",
            record.url(),
            record.domain(),
            visits_suffix(record),
            tag_suffix(record)
        ));
    }
    lines
}

/// Day headers followed by that day's visits
pub fn render_timeline(groups: &[HistoryGroup], opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();
    let mut remaining = opts.limit;

    for group in groups {
        if remaining == 0 {
            break;
        }
        lines.push(format!(
            "{} ({} items)",
            group.date.format("%Y-%m-%d %A"),
            group.len()
        ));
        for record in group.records.iter().take(remaining) {
            lines.push(format!(
                "  {}{}  {} - {}{}{}",
                id_prefix(record, opts),
                format_time(record, opts, "%H:%M"),
                record.title(),
                record.domain(),
                visits_suffix(record),
                tag_suffix(record)
            ));
            remaining -= 1;
        }
    }
    lines
}

/// Domain headers with totals followed by the domain's pages
pub fn render_grouped(summaries: &[DomainSummary], opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();
    let mut remaining = opts.limit;

    for summary in summaries {
        if remaining == 0 {
            break;
        }
        lines.push(format!(
            "{}  {} pages, {} visits, latest {}",
            summary.domain,
            summary.page_count(),
            summary.total_visits,
            opts.calendar
                .localize(summary.latest_visit)
                .format(&opts.time_format)
        ));
        for record in summary.records.iter().take(remaining) {
            lines.push(format!(
                "  {}{}  {}  {}{}",
                id_prefix(record, opts),
                format_time(record, opts, &opts.time_format),
                record.title(),
                record.path_display(),
                tag_suffix(record)
            ));
            remaining -= 1;
        }
    }
    lines
}

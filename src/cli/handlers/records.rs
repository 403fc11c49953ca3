//! Record action handlers for Lookback CLI
//!
//! These hand requests to the logging collaborator; records are not
//! modified.

use crate::cli::args::*;
use crate::cli::CliApp;
use crate::error::Result;
use crate::types::RecordId;

/// Resolve ids against the store, failing on the first unknown one
fn resolve_ids(app: &CliApp, raw: &[String]) -> Result<Vec<RecordId>> {
    raw.iter()
        .map(|id| app.browser.store().require(id).map(|r| r.id().clone()))
        .collect()
}

pub fn handle_tag(app: &mut CliApp, args: &TagArgs) -> Result<()> {
    match &args.action {
        TagAction::Add { tag, ids } => {
            let ids = resolve_ids(app, ids)?;
            app.browser.add_tag(&ids, tag)?;
            if !app.quiet {
                println!("Requested tag '{}' on {} records", tag.trim(), ids.len());
            }
        }
        TagAction::Remove { tag, ids } => {
            let ids = resolve_ids(app, ids)?;
            app.browser.remove_tag(&ids, tag)?;
            if !app.quiet {
                println!(
                    "Requested removal of tag '{}' from {} records",
                    tag.trim(),
                    ids.len()
                );
            }
        }
    }
    Ok(())
}

pub fn handle_delete(app: &mut CliApp, args: &DeleteArgs) -> Result<()> {
    let ids = resolve_ids(app, &args.ids)?;
    app.browser.delete(&ids);
    if !app.quiet {
        println!("Requested deletion of {} records", ids.len());
    }
    Ok(())
}

pub fn handle_open(app: &mut CliApp, args: &OpenArgs) -> Result<()> {
    app.browser.open(&args.id)?;
    if !app.quiet {
        let record = app.browser.store().require(&args.id)?;
        println!("{}", record.url());
    }
    Ok(())
}

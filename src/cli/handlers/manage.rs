//! Interactive browser handler

use crate::cli::CliApp;
use crate::error::Result;
use crate::manage_tui;

pub fn handle_manage(app: &mut CliApp) -> Result<()> {
    if app.browser.store().is_empty() {
        println!("No history records to browse");
        return Ok(());
    }

    let summary = manage_tui::run_browser_ui(&mut app.browser, &app.config.display)?;

    if !app.quiet && summary.requests > 0 {
        println!("Sent {} requests to the history collaborator", summary.requests);
    }

    Ok(())
}

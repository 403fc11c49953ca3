//! Configuration handler for Lookback CLI

use crate::cli::args::*;
use crate::cli::CliApp;
use crate::error::Result;

pub fn handle_config(app: &mut CliApp, args: &ConfigArgs) -> Result<()> {
    if args.show {
        let config_json = serde_json::to_string_pretty(&app.config)?;
        println!("{}", config_json);
    } else if args.init {
        let config_path = crate::config::Config::default_config_path()?;
        let config = crate::config::Config::default();
        config.save_to_path(&config_path)?;
        println!("Configuration initialized at {}", config_path.display());
    } else if args.validate {
        match app.config.validate() {
            Ok(_) => println!("Configuration is valid"),
            Err(e) => println!("Configuration validation failed: {}", e),
        }
    } else {
        println!("Use --show, --init, or --validate");
    }

    Ok(())
}

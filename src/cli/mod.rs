//! Command-line interface module for Lookback
//!
//! This module is organized into submodules:
//! - `args`: Command-line argument structures
//! - `handlers`: Command handler implementations
//! - `render`: Plain-text rendering of composed views

mod args;
mod handlers;
pub mod render;

pub use args::*;
use handlers::*;

use crate::browser::HistoryBrowser;
use crate::config::Config;
use crate::error::Result;
use clap::{Parser, Subcommand};
use render::RenderOptions;
use std::path::PathBuf;

/// Lookback - browse, filter and group web browsing history
#[derive(Parser)]
#[command(name = "lookback")]
#[command(about = "Browse, filter and group web browsing history")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Read records from a JSON fixture instead of generating them
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Seed for generated records
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of generated records
    #[arg(long, global = true)]
    pub count: Option<usize>,

    /// Day boundary offset from UTC in minutes
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show matching records as a flat list
    List(ViewArgs),
    /// Show matching records grouped by day
    Timeline(ViewArgs),
    /// Show matching records grouped by domain
    Grouped(ViewArgs),
    /// List the domains available for filtering
    Domains(ChoicesArgs),
    /// List the tags available for filtering
    Tags(ChoicesArgs),
    /// Export matching records as JSON
    Export(ExportArgs),
    /// Add or remove tags on records
    Tag(TagArgs),
    /// Delete records
    Delete(DeleteArgs),
    /// Open a record's page
    Open(OpenArgs),
    /// Show configuration
    Config(ConfigArgs),
    /// Browse history interactively
    Manage,
}

/// Main CLI application
pub struct CliApp {
    pub config: Config,
    pub browser: HistoryBrowser,
    pub verbose: bool,
    pub quiet: bool,
}

impl CliApp {
    /// Create a new CLI application
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut config = load_config(cli.config.as_deref())?;

        // Command line overrides
        if let Some(path) = &cli.fixture {
            config.fixture.path = Some(path.clone());
        }
        if let Some(seed) = cli.seed {
            config.fixture.seed = Some(seed);
        }
        if let Some(count) = cli.count {
            config.fixture.record_count = count;
        }
        if let Some(offset) = cli.utc_offset {
            config.calendar.utc_offset_minutes = Some(offset);
        }

        let browser = crate::init_with_config(&config)?;

        Ok(Self {
            config,
            browser,
            verbose: cli.verbose,
            quiet: cli.quiet,
        })
    }

    /// Run the CLI application
    pub fn run(&mut self, command: &Commands) -> Result<()> {
        self.verbose_println(&format!(
            "Loaded {} records (day boundary {})",
            self.browser.store().len(),
            self.browser.calendar()
        ));

        match command {
            Commands::List(args) => handle_list(self, args),
            Commands::Timeline(args) => handle_timeline(self, args),
            Commands::Grouped(args) => handle_grouped(self, args),
            Commands::Domains(args) => handle_domains(self, args),
            Commands::Tags(args) => handle_tags(self, args),
            Commands::Export(args) => handle_export(self, args),
            Commands::Tag(args) => handle_tag(self, args),
            Commands::Delete(args) => handle_delete(self, args),
            Commands::Open(args) => handle_open(self, args),
            Commands::Config(args) => handle_config(self, args),
            Commands::Manage => handle_manage(self),
        }
    }

    pub fn verbose_println(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("[verbose] {}", message);
        }
    }

    pub(crate) fn render_options(&self, args: &ViewArgs) -> RenderOptions {
        RenderOptions {
            calendar: *self.browser.calendar(),
            time_format: self.config.display.time_format.clone(),
            show_ids: args.ids,
            limit: args.limit.unwrap_or(self.config.display.max_results),
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Ok(Config::load().unwrap_or_default()),
    }
}

/// Log level to use when RUST_LOG is not set
pub fn configured_log_level() -> String {
    let cli = Cli::try_parse().ok();
    if cli.as_ref().is_some_and(|c| c.verbose) {
        return "debug".to_string();
    }

    load_config(cli.as_ref().and_then(|c| c.config.as_deref()))
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| "warn".to_string())
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut app = CliApp::new(&cli)?;
    app.run(&cli.command)
}

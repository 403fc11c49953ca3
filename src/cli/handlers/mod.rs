//! Command handler implementations for Lookback CLI
//!
//! This module organizes command handlers into logical groups:
//! - `views`: list, timeline and grouped views plus filter choices
//! - `records`: tag, delete and open stubs
//! - `export`: JSON export
//! - `config`: configuration handler
//! - `manage`: interactive browser

mod config;
mod export;
mod manage;
mod records;
mod views;

pub use config::*;
pub use export::*;
pub use manage::*;
pub use records::*;
pub use views::*;

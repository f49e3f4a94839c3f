//! CLI module
//!
//! Command-line interface over the Clash Detection client.
//!
//! # Commands
//!
//! - `templates` - List suppression rule templates
//! - `rules` - List suppression rules
//! - `tests` - List clash tests
//! - `runs` - List runs
//! - `result` - Show the clashes found by a run
//! - `schema-info` / `models-and-categories` - Show extracted iModel metadata
//! - `run-test` - Start a run

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

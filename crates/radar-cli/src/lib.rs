//! Radar CLI library.
//!
//! Terminal front end for the campaign dashboard core: roster, pipeline
//! board, narratives and activity views over one in-memory entity store,
//! plus configuration management and an interactive REPL.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

//! CLI module
//!
//! Command-line interface for paging through a todo fixture file.
//!
//! # Commands
//!
//! - `list` - Fetch a single page as a list-endpoint response
//! - `walk` - Follow pages forward until the last one
//! - `sorts` - List accepted sort fields

mod commands;
mod runner;

pub use commands::{Cli, Commands, ScopeArgs};
pub use runner::{load_store, Runner};

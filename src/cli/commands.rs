//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// todo-pager CLI
#[derive(Parser, Debug)]
#[command(name = "todo-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Todo documents (JSON array)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Pager configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single page
    List {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Cursor to move forward from
        #[arg(long, conflicts_with = "before")]
        after: Option<String>,

        /// Cursor to move backward from
        #[arg(long)]
        before: Option<String>,
    },

    /// Follow pages forward until the last one
    Walk {
        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// List accepted sort fields
    Sorts,
}

/// Options shared by the paging commands
#[derive(Args, Debug, Clone)]
pub struct ScopeArgs {
    /// Shop whose todos are listed
    #[arg(long)]
    pub shop: String,

    /// Sort token, e.g. `title` or `-createdAt`
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Exact title to match
    #[arg(long)]
    pub search: Option<String>,

    /// Page size
    #[arg(long)]
    pub limit: Option<usize>,
}

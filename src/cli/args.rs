// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::ExecutionMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Notes API base URL, overrides the configured one
    #[arg(short, long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Execution mode used to pick the API address
    #[arg(short, long, value_enum, default_value_t = ExecutionMode::Prerender, global = true)]
    pub mode: ExecutionMode,

    /// Drop a leading YAML frontmatter block from note bodies before rendering
    #[arg(long, global = true)]
    pub strip_frontmatter: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes with ID and title
    List {
        /// Only notes carrying this exact tag
        #[arg(short, long, value_name = "TAG")]
        tag: Option<String>,

        /// Open the listing as a page in the browser
        #[arg(long)]
        open: bool,
    },

    /// List every distinct tag
    Tags,

    /// Search titles, descriptions, content and tags (case-insensitive)
    Search {
        /// Text to look for
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// View a note in the browser
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON instead of opening in browser
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Print the rendered page to stdout instead of opening in browser
        #[arg(long)]
        html: bool,
    },
}

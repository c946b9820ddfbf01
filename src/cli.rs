//! CLI command definitions for taskmirror
//!
//! This module defines the CLI structure using clap's derive macros. Each
//! subcommand corresponds to one user action on the task list; the rendered
//! list is printed to stdout after the action completes.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default port for the local dev server.
pub const DEFAULT_SERVE_PORT: u16 = 8000;

/// To-do list client with a local offline mirror
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the task API (overrides config)
    #[arg(short, long, global = true)]
    pub api_url: Option<String>,

    /// Path to the local mirror database (overrides config)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format: text (default) or json
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch and render the task list (default if no subcommand given)
    List,

    /// Add a task
    Add {
        /// Task text
        text: String,
    },

    /// Set a task's completion flag
    Toggle {
        /// Task id
        id: String,
        /// New completion state
        #[arg(action = clap::ArgAction::Set, value_parser = clap::value_parser!(bool))]
        completed: bool,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },

    /// Run the local in-memory task server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_SERVE_PORT)]
        port: u16,
    },
}

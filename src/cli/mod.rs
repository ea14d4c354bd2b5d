//! CLI 模块

pub mod oneshot;

use clap::{Parser, Subcommand};

use crate::server::DEFAULT_PORT;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(version)]
#[command(about = "Terminal client for a REST task list")]
pub struct Cli {
    /// Backend base URL (overrides TASKDECK_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the interactive task list (default)
    Tui,
    /// Print all tasks
    List,
    /// Add a task
    Add {
        /// Task title
        title: String,
    },
    /// Toggle a task between pending and completed
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Run the in-memory development backend
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

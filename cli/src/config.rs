//! Command-line and environment configuration.

use clap::Parser;
use todo_core::{Filter, JSONPLACEHOLDER_URL};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo", version, about = "Keep a todo list in sync with a REST API")]
pub struct Config {
    /// Base URL of the todo API (the part before `/todos`).
    #[arg(long, env = "TODO_API_URL", default_value = JSONPLACEHOLDER_URL)]
    pub base_url: String,

    /// Filter applied to the first listing.
    #[arg(long, default_value = "all")]
    pub filter: Filter,

    /// Log filter used when `RUST_LOG` is unset. Logs go to stderr.
    #[arg(long, env = "TODO_LOG", default_value = "warn")]
    pub log: String,
}

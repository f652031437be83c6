//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-api
#[derive(Parser, Debug)]
#[command(name = "trivia-api")]
#[command(author, version, about = "Trivia question bank HTTP API")]
#[command(long_about = r#"
Serves a paginated, searchable bank of trivia questions grouped into
categories, plus a quiz endpoint that never repeats a question.

Configuration files are loaded from (in priority order):
1. TRIVIA_* environment variables (TRIVIA_SERVER__BIND=0.0.0.0:8080)
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-api/config.toml   Global config

Command-line flags override every file and variable.

Example:
  trivia-api
  trivia-api --bind 0.0.0.0:8080 --database trivia.db
  trivia-api --memory --fixtures seed.json -vv
"#)]
pub struct Cli {
    /// Socket address to listen on
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Store questions in this SQLite database file
    #[arg(long, value_name = "PATH", conflicts_with = "memory")]
    pub database: Option<PathBuf>,

    /// Keep questions in memory only
    #[arg(long)]
    pub memory: bool,

    /// JSON fixture file to seed the store with at startup
    #[arg(long, value_name = "PATH")]
    pub fixtures: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter chosen by `-v`, if any was given
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

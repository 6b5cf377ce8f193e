//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line client for the scholar learning platform.
#[derive(Parser, Debug)]
#[command(name = "scholar")]
#[command(author, version = env!("SCHOLAR_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Backend API base URL
    #[arg(
        long,
        global = true,
        env = "SCHOLAR_API_URL",
        default_value = "http://localhost:8000"
    )]
    pub api: String,

    /// Directory holding the stored session (defaults to the platform data dir)
    #[arg(long, global = true, env = "SCHOLAR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

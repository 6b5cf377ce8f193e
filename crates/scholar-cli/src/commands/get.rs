//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// API path, e.g. /subjects
    pub path: String,
}

pub async fn run(args: GetArgs, config: &Config) -> Result<()> {
    let store = config.open_store()?;
    let client = config.authorized_client(&store);

    let body: Value = client
        .get_json(&args.path)
        .await
        .with_context(|| format!("Failed to fetch {}", args.path))?;

    output::json_pretty(&body)
}

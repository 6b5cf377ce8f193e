//! Refresh token command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(_args: RefreshTokenArgs, config: &Config) -> Result<()> {
    let store = config.open_store()?;

    eprintln!("{}", "Refreshing session...".dimmed());

    if !store.refresh_token().await {
        bail!("Session is no longer valid. Run 'scholar auth login' again.");
    }

    output::success("Session refreshed successfully");
    Ok(())
}

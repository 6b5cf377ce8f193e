//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, config: &Config) -> Result<()> {
    let store = config.open_store()?;
    store.logout().await;
    store.dispose();

    output::success("Logged out");
    Ok(())
}

//! Whoami command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the full profile as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WhoamiArgs, config: &Config) -> Result<()> {
    let store = config.open_store()?;

    if !store.check_auth().await {
        bail!("No active session. Run 'scholar auth login' first.");
    }

    let user = store
        .snapshot()
        .user
        .context("Session has no profile")?;

    if args.json {
        output::json_pretty(&user)
    } else {
        super::print_user(&user);
        output::field("API", config.api.as_str());
        Ok(())
    }
}

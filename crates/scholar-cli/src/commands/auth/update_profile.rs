//! Update profile command implementation.
//!
//! Changes only the locally stored profile; nothing is sent to the API.

use anyhow::{Result, bail};
use clap::Args;
use serde_json::{Map, Value};

use crate::commands::parse_field;
use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateProfileArgs {
    /// Fields to set as key=value (repeatable)
    #[arg(long = "set", value_parser = parse_field, required = true)]
    pub fields: Vec<(String, Value)>,
}

pub async fn run(args: UpdateProfileArgs, config: &Config) -> Result<()> {
    let store = config.open_store()?;

    if store.snapshot().user.is_none() {
        bail!("No active session. Run 'scholar auth login' first.");
    }

    let partial: Map<String, Value> = args.fields.into_iter().collect();
    store.update_user(partial);

    output::success("Profile updated");
    if let Some(user) = store.snapshot().user {
        super::print_user(&user);
    }
    Ok(())
}

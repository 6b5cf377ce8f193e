//! Guard command implementation.

use anyhow::Result;
use clap::Args;

use scholar_core::guard::{self, GuardConfig, GuardDecision};

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct GuardArgs {
    /// Location being requested, e.g. /courses/42
    pub location: String,

    /// Path of the login view
    #[arg(long, default_value = "/login")]
    pub login_path: String,
}

pub async fn run(args: GuardArgs, config: &Config) -> Result<()> {
    let store = config.open_store()?;
    store.check_auth().await;

    let guard_config = GuardConfig {
        login_path: args.login_path,
        ..GuardConfig::default()
    };

    match guard::evaluate(&store.snapshot(), &args.location, &guard_config) {
        GuardDecision::Allow => output::field("Allow", &args.location),
        GuardDecision::Wait => output::field("Wait", &args.location),
        GuardDecision::RedirectToLogin { location, .. } => output::field("Redirect", &location),
    }

    Ok(())
}

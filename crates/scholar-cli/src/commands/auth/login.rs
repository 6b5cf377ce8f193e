//! Login command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use scholar_core::Credentials;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username or email
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long, env = "SCHOLAR_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: LoginArgs, config: &Config) -> Result<()> {
    let store = config.open_store()?;
    let credentials = Credentials::new(args.username, args.password);

    eprintln!("{}", "Logging in...".dimmed());

    match store.login(&credentials).await {
        Ok(user) => {
            output::success("Logged in successfully");
            super::print_user(&user);
            Ok(())
        }
        Err(failure) => {
            output::error(&failure.message);
            bail!("Login failed")
        }
    }
}

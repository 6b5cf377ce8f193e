//! Subcommand implementations.

mod auth;
mod get;
mod guard;
mod image;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Session operations (login, logout, ...)
    Auth(auth::AuthCommand),

    /// Check whether the current session may open a protected location
    Guard(guard::GuardArgs),

    /// Fetch a JSON resource from the API, signed with the current session
    Get(get::GetArgs),

    /// Load an image, offering fallbacks when it fails
    Image(image::ImageArgs),
}

pub async fn handle(cmd: Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::Auth(cmd) => auth::handle(cmd, config).await,
        Commands::Guard(args) => guard::run(args, config).await,
        Commands::Get(args) => get::run(args, config).await,
        Commands::Image(args) => image::run(args, config).await,
    }
}

/// Parse `key=value`; the value is taken as JSON when it parses, else as a string.
pub(crate) fn parse_field(raw: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;

    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }

    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

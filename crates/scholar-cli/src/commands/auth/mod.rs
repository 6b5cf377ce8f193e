//! Session subcommand implementations.

mod login;
mod logout;
mod refresh_token;
mod register;
mod update_profile;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

use scholar_core::User;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Sign in with a username and password
    Login(login::LoginArgs),

    /// Create an account and sign in
    Register(register::RegisterArgs),

    /// Sign out and erase the stored session
    Logout(logout::LogoutArgs),

    /// Validate the stored session and show the profile
    Whoami(whoami::WhoamiArgs),

    /// Re-validate the stored session
    RefreshToken(refresh_token::RefreshTokenArgs),

    /// Change profile fields in the stored session
    UpdateProfile(update_profile::UpdateProfileArgs),
}

pub async fn handle(cmd: AuthCommand, config: &Config) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args, config).await,
        AuthSubcommand::Register(args) => register::run(args, config).await,
        AuthSubcommand::Logout(args) => logout::run(args, config).await,
        AuthSubcommand::Whoami(args) => whoami::run(args, config).await,
        AuthSubcommand::RefreshToken(args) => refresh_token::run(args, config).await,
        AuthSubcommand::UpdateProfile(args) => update_profile::run(args, config).await,
    }
}

/// Print the identifying fields of a profile.
fn print_user(user: &User) {
    for key in ["id", "username", "name", "email"] {
        if let Some(value) = user.get(key) {
            let shown = match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            };
            output::field(key, &shown);
        }
    }
}

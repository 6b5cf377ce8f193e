//! Register command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use serde_json::{Map, Value};

use crate::commands::parse_field;
use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, env = "SCHOLAR_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Extra profile fields as key=value (repeatable)
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, Value)>,
}

pub async fn run(args: RegisterArgs, config: &Config) -> Result<()> {
    let store = config.open_store()?;

    let mut user_data: Map<String, Value> = args.fields.into_iter().collect();
    user_data.insert("username".to_string(), Value::String(args.username));
    user_data.insert("email".to_string(), Value::String(args.email));
    user_data.insert("password".to_string(), Value::String(args.password));

    eprintln!("{}", "Registering...".dimmed());

    match store.register(&user_data).await {
        Ok(user) => {
            output::success("Account created");
            super::print_user(&user);
            Ok(())
        }
        Err(failure) => {
            output::error(&failure.message);
            bail!("Registration failed")
        }
    }
}

//! Configuration subcommands.

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::Config;

pub async fn show_command() -> Result<()> {
    let config = Config::load()?;
    println!("{}: {}", "endpoint".bold(), config.endpoint);
    match config.bearer_token {
        Some(_) => println!("{}: {}", "bearer token".bold(), "set".green()),
        None => println!("{}: {}", "bearer token".bold(), "not set".yellow()),
    }
    Ok(())
}

pub async fn set_endpoint_command(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_endpoint(url)?;
    println!("{}", "Endpoint updated".green());
    Ok(())
}

pub async fn set_token_command(token: Option<String>) -> Result<()> {
    info!("Updating bearer token");
    let mut config = Config::load()?;
    let cleared = token.is_none();
    config.set_bearer_token(token)?;
    if cleared {
        println!("{}", "Bearer token cleared".yellow());
    } else {
        println!("{}", "Bearer token updated".green());
    }
    Ok(())
}

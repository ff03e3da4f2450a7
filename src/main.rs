use anyhow::Result;
use clap::Parser;
use log::debug;

use directive_cli::cli::{Cli, Commands, ConfigSubcommands};
use directive_cli::commands;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Starting directive-cli");

    match cli.command {
        Commands::Fill(args) => commands::fill_command(args.dry_run).await,
        Commands::Demo(args) => commands::demo_command(args.seed, args.submit).await,
        Commands::Config(args) => match args.command {
            ConfigSubcommands::Show => commands::show_command().await,
            ConfigSubcommands::SetEndpoint { url } => {
                commands::set_endpoint_command(url).await
            }
            ConfigSubcommands::SetToken { token } => commands::set_token_command(token).await,
        },
    }
}

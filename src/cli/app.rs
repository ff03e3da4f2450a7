use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "directive-cli")]
#[command(about = "Fill in and submit digital services contracting questionnaires")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in a questionnaire interactively and submit it
    Fill(FillCommand),
    /// Generate a demo questionnaire from seeded data
    Demo(DemoCommand),
    /// API endpoint and credential management
    Config(ConfigCommands),
}

#[derive(Args)]
pub struct FillCommand {
    /// Print the mapped payload instead of submitting it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct DemoCommand {
    /// Seed for the generated record
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    /// Submit the generated questionnaire instead of printing it
    #[arg(long)]
    pub submit: bool,
}

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show the current configuration
    Show,
    /// Set the GraphQL endpoint URL
    SetEndpoint {
        /// Endpoint URL
        url: String,
    },
    /// Set or clear the API bearer token
    SetToken {
        /// Bearer token; omit to clear
        token: Option<String>,
    },
}

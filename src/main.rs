use clap::Parser;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use shiftboard_console::{commands::Cli, config::ConsoleConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // Load configuration, letting the command line override the API URL
    let mut config = ConsoleConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    shiftboard_console::start_console(config, cli.command).await?;

    Ok(())
}

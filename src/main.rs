use clap::Parser;
use swap_quoter::cli::{Cli, Commands};
use swap_quoter::core::{Config, QuoteResult};

#[tokio::main]
async fn main() -> QuoteResult<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    config.validate()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Quote(args) => {
            swap_quoter::cli::commands::quote::execute(args, config).await?;
        }
        Commands::Pools(args) => {
            swap_quoter::cli::commands::pools::execute(args, config).await?;
        }
    }

    Ok(())
}

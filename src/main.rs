use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use home_price_estimator::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    match args.command {
        cli::Commands::Locations => {
            commands::locations::execute(&args.config).await?;
        }
        cli::Commands::Estimate {
            sqft,
            bhk,
            bath,
            location,
        } => {
            let form = commands::estimate::EstimateArgs {
                sqft,
                bhk,
                bath,
                location,
            };
            commands::estimate::execute(&args.config, form).await?;
        }
        cli::Commands::Serve => {
            commands::serve::execute(&args.config).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Home Price Estimator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

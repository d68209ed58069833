use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "home-price", version, about = "Home price estimator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load the location dropdown from the prediction service
    Locations,

    /// Fill in the form and request a price estimate
    Estimate {
        /// Area in square feet, as typed into the form
        #[arg(long, allow_hyphen_values = true)]
        sqft: String,

        /// Bedrooms (BHK); omitted means no radio selected
        #[arg(long)]
        bhk: Option<u8>,

        /// Bathrooms; omitted means no radio selected
        #[arg(long)]
        bath: Option<u8>,

        /// Location; defaults to the first entry of the dropdown
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Start the prediction service
    Serve,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

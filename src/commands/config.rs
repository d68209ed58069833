use anyhow::Result;
use colored::Colorize;
use home_price_estimator::config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
pub fn show(config_path: &Path) -> Result<()> {
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", toml::to_string_pretty(&cfg)?);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!(path = %config_path.display(), "Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Service".cyan(), cfg.service.base_url);
    match cfg.service.timeout_seconds {
        Some(secs) => println!("  {}: {}s", "Timeout".cyan(), secs),
        None => println!("  {}: {}", "Timeout".cyan(), "transport default".dimmed()),
    }
    println!(
        "  {}: {}:{} (artifacts: {})",
        "Server".cyan(),
        cfg.server.host,
        cfg.server.port,
        cfg.server.artifacts_dir
    );

    Ok(())
}

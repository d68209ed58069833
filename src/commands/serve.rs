use anyhow::Result;
use colored::Colorize;
use home_price_estimator::{config, server};
use std::path::Path;
use tracing::info;

/// Execute the serve command
pub async fn execute(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    println!(
        "{} {}:{}",
        "Starting prediction server on".green(),
        cfg.server.host,
        cfg.server.port
    );
    info!(artifacts = %cfg.server.artifacts_dir, "Serving home price predictions");

    server::start_server(cfg.server).await
}

use anyhow::Result;
use colored::Colorize;
use home_price_estimator::{
    client::HttpPredictionClient,
    config::{self, Config},
    form::{self, EstimatorPage, LOCATIONS_SELECT},
    notify::TerminalNotifier,
};
use std::{path::Path, sync::Arc};
use tracing::info;

/// Build the estimator page wired to the configured service, alerting on stderr.
pub fn open_page(cfg: &Config) -> EstimatorPage {
    EstimatorPage::new(
        Arc::new(form::build_page()),
        Arc::new(HttpPredictionClient::from_config(&cfg.service)),
        Arc::new(TerminalNotifier),
    )
}

/// Execute the locations command
///
/// Runs the page-load flow and prints the resulting dropdown
pub async fn execute(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    info!(service = %cfg.service.base_url, "Loading locations");

    let page = open_page(&cfg);
    page.on_page_load().await?;

    let options = page.document().options(LOCATIONS_SELECT)?;
    println!("{} ({})", "Locations:".bold(), options.len());
    for (idx, option) in options.iter().enumerate() {
        println!("  {:>3}. {}", idx + 1, option.label);
    }

    Ok(())
}

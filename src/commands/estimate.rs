use anyhow::{bail, Result};
use colored::Colorize;
use home_price_estimator::{
    config,
    dom::Document,
    form::{BATH_GROUP, BHK_GROUP, LOCATIONS_SELECT, RESULT_BOX, SQFT_INPUT},
};
use std::path::Path;
use tracing::{info, warn};

use super::locations::open_page;

/// Form input as given on the command line
#[derive(Debug, Clone)]
pub struct EstimateArgs {
    pub sqft: String,
    pub bhk: Option<u8>,
    pub bath: Option<u8>,
    pub location: Option<String>,
}

/// Execute the estimate command
///
/// Loads the page, fills in the form and clicks estimate. The command fails
/// when the form is rejected or the service cannot be reached.
///
/// A failed location fetch does not stop the command: as on the page, the
/// dropdown stays empty and the click reports the missing location.
pub async fn execute(config_path: &Path, args: EstimateArgs) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let page = open_page(&cfg);

    if let Err(e) = page.on_page_load().await {
        warn!(error = %e, "Continuing without a location list");
    }
    fill_form(page.document(), &args)?;

    let location = page.document().value(LOCATIONS_SELECT)?;
    info!(location = %location, "Submitting estimate");

    page.on_clicked_estimate_price().await?;

    println!(
        "{} {}",
        "Estimated price:".green().bold(),
        page.document().text(RESULT_BOX)?
    );
    Ok(())
}

fn fill_form(document: &Document, args: &EstimateArgs) -> Result<()> {
    document.set_value(SQFT_INPUT, &args.sqft)?;

    select_radio(document, BHK_GROUP, "--bhk", args.bhk)?;
    select_radio(document, BATH_GROUP, "--bath", args.bath)?;

    if let Some(location) = &args.location {
        let loaded = !document.options(LOCATIONS_SELECT)?.is_empty();
        if loaded && !document.select_option(LOCATIONS_SELECT, location)? {
            bail!("Unknown location '{}'; run `home-price locations` to list them", location);
        }
    }

    Ok(())
}

fn select_radio(document: &Document, group: &str, flag: &str, value: Option<u8>) -> Result<()> {
    match value {
        Some(n) => {
            if !document.check_radio(group, &n.to_string()) {
                bail!("{} {} is not an option on the form", flag, n);
            }
        }
        None => document.clear_radio_group(group),
    }
    Ok(())
}

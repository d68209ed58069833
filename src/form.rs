//! Event handlers of the estimator page.
//!
//! Two independent flows drive the [`Document`]:
//! - page load: fetch the location names and fill the dropdown
//! - estimate click: read and validate the form, request a price, render it
//!
//! Neither flow retries, debounces or cancels. Concurrent estimate clicks each
//! write their own response, so the one that completes last is what stays on
//! the page.

use crate::{
    client::PredictionApi,
    dom::{Document, Element, SelectOption},
    error::{AppError, ValidationError},
    models::PredictionForm,
    notify::Notifier,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const SQFT_INPUT: &str = "uiSqft";
pub const BHK_GROUP: &str = "uiBHK";
pub const BATH_GROUP: &str = "uiBathrooms";
pub const LOCATIONS_SELECT: &str = "uiLocations";
pub const BUSY_INDICATOR: &str = "loadingSpinner";
pub const RESULT_BOX: &str = "uiEstimatedPrice";

/// Radio value reported when nothing in the group is checked
pub const UNSELECTED: i32 = -1;

pub const ESTIMATE_FAILED_ALERT: &str = "API Error: prediction server not running?";
pub const LOCATIONS_FAILED_ALERT: &str = "Cannot fetch locations. Start the prediction server!";

/// Build the estimator page: square feet input, 1-5 bedroom and bathroom
/// radios, location dropdown, hidden busy indicator and hidden result box.
pub fn build_page() -> Document {
    let document = Document::new();
    document.append(Element::text_input(SQFT_INPUT));
    for n in 1..=5 {
        document.append(Element::radio(BHK_GROUP, &n.to_string()));
    }
    for n in 1..=5 {
        document.append(Element::radio(BATH_GROUP, &n.to_string()));
    }
    document.append(Element::select(LOCATIONS_SELECT));
    document.append(Element::block(BUSY_INDICATOR, false));
    document.append(Element::block(RESULT_BOX, false));
    document
}

/// Integer value of the checked radio in `name`, or [`UNSELECTED`].
///
/// A checked radio whose value is not a whole integer also reads as
/// unselected; there is no leading-digit salvage, so `"2.5"` gives -1 rather
/// than 2. The page built by [`build_page`] only carries values 1 to 5.
pub fn radio_group_value(document: &Document, name: &str) -> i32 {
    document
        .elements_by_name(name)
        .into_iter()
        .find(|radio| radio.checked)
        .and_then(|radio| radio.value.trim().parse().ok())
        .unwrap_or(UNSELECTED)
}

pub fn show_busy_indicator(document: &Document, show: bool) -> Result<(), AppError> {
    document.set_visible(BUSY_INDICATOR, show)
}

/// Values read from the form for one estimate request
#[derive(Debug, Clone, PartialEq)]
pub struct InputSnapshot {
    pub square_feet: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub location: String,
}

impl From<InputSnapshot> for PredictionForm {
    fn from(input: InputSnapshot) -> Self {
        Self {
            total_sqft: input.square_feet,
            bhk: input.bedrooms,
            bath: input.bathrooms,
            location: input.location,
        }
    }
}

/// Parse the square feet field: a finite, positive number.
pub fn parse_square_feet(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Read the form. Missing elements are `ElementNotFound`, bad input is
/// `Validation`.
pub fn read_inputs(document: &Document) -> Result<InputSnapshot, AppError> {
    let raw_sqft = document.value(SQFT_INPUT)?;
    let bedrooms = radio_group_value(document, BHK_GROUP);
    let bathrooms = radio_group_value(document, BATH_GROUP);
    let location = document.value(LOCATIONS_SELECT)?;
    document.require(RESULT_BOX)?;

    let square_feet = parse_square_feet(&raw_sqft).ok_or(ValidationError::InvalidSquareFeet)?;
    if location.is_empty() {
        return Err(ValidationError::MissingLocation.into());
    }

    Ok(InputSnapshot {
        square_feet,
        bedrooms,
        bathrooms,
        location,
    })
}

/// Render a price the way the page shows it
pub fn format_price(estimated_price: f64) -> String {
    format!("{} Lakh", estimated_price)
}

/// The page together with the collaborators its handlers need
#[derive(Clone)]
pub struct EstimatorPage {
    document: Arc<Document>,
    api: Arc<dyn PredictionApi>,
    notifier: Arc<dyn Notifier>,
}

impl EstimatorPage {
    pub fn new(
        document: Arc<Document>,
        api: Arc<dyn PredictionApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            document,
            api,
            notifier,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Replace the dropdown's options with the service's location names.
    ///
    /// Returns the number of options loaded. On failure the alert is shown and
    /// the dropdown keeps whatever it had.
    pub async fn on_page_load(&self) -> Result<usize, AppError> {
        self.document.require(LOCATIONS_SELECT)?;

        match self.api.location_names().await {
            Ok(names) => {
                let options: Vec<SelectOption> =
                    names.iter().map(|name| SelectOption::named(name)).collect();
                let count = options.len();
                self.document.replace_options(LOCATIONS_SELECT, options)?;
                info!(count, "Location dropdown populated");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch location names");
                self.notifier.alert(LOCATIONS_FAILED_ALERT);
                Err(e)
            }
        }
    }

    /// Validate the form, request an estimate and render it into the result box.
    ///
    /// Validation failures alert and return before any request is sent.
    pub async fn on_clicked_estimate_price(&self) -> Result<f64, AppError> {
        let input = match read_inputs(&self.document) {
            Ok(input) => input,
            Err(AppError::Validation(e)) => {
                debug!(reason = %e, "Estimate rejected by form validation");
                self.notifier.alert(&e.to_string());
                return Err(e.into());
            }
            Err(e) => return Err(e),
        };

        show_busy_indicator(&self.document, true)?;
        self.document.set_visible(RESULT_BOX, false)?;

        let form = PredictionForm::from(input);
        let result = self.api.predict_home_price(&form).await;

        show_busy_indicator(&self.document, false)?;
        match result {
            Ok(estimated_price) => {
                self.document
                    .set_text(RESULT_BOX, &format_price(estimated_price))?;
                self.document.set_visible(RESULT_BOX, true)?;
                info!(location = %form.location, estimated_price, "Estimate rendered");
                Ok(estimated_price)
            }
            Err(e) => {
                warn!(error = %e, location = %form.location, "Estimate request failed");
                self.notifier.alert(ESTIMATE_FAILED_ALERT);
                Err(e)
            }
        }
    }
}

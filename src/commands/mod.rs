//! Command implementations for the CLI
//!
//! - locations: Run the page-load flow and list the dropdown
//! - estimate: Fill in the form and click estimate
//! - serve: Start the prediction service
//! - config: Configuration display and validation

pub mod config;
pub mod estimate;
pub mod locations;
pub mod serve;

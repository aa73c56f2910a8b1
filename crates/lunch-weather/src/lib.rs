//! Weather panel for the lunch picker
//!
//! Fetches current conditions for a fixed location from the Open-Meteo API
//! and maps the temperature onto a lunch advisory.

pub mod advisory;
pub mod provider;
pub mod types;

pub use advisory::{advise_for, AdvisoryBand};
pub use provider::WeatherProvider;
pub use types::*;

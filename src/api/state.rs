//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::CountryCode;

/// Shared application state.
///
/// Holds the loaded country configurations plus the sorted country list,
/// precomputed once at startup so `GET /countries` does not re-sort per
/// request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    countries: Arc<[CountryCode]>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let countries: Arc<[CountryCode]> = config.supported_countries().into();
        Self {
            config: Arc::new(config),
            countries,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Country codes with loaded configuration, sorted alphabetically.
    pub fn countries(&self) -> &[CountryCode] {
        &self.countries
    }
}

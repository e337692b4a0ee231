//! Country identification for the payroll engine.
//!
//! This module defines the [`CountryCode`] enum used to select a country's
//! tax configuration, calculator, and compliance rule catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// ISO 3166-1 alpha-2 code of a country supported by the engine.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CountryCode;
/// use std::str::FromStr;
///
/// let code = CountryCode::from_str("br").unwrap();
/// assert_eq!(code, CountryCode::Br);
/// assert_eq!(code.as_str(), "br");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryCode {
    /// Brazil.
    Br,
    /// Mexico.
    Mx,
    /// Argentina.
    Ar,
}

impl CountryCode {
    /// All countries the engine knows about.
    pub const ALL: [CountryCode; 3] = [CountryCode::Br, CountryCode::Mx, CountryCode::Ar];

    /// Returns the lowercase two-letter code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Br => "br",
            CountryCode::Mx => "mx",
            CountryCode::Ar => "ar",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "br" => Ok(CountryCode::Br),
            "mx" => Ok(CountryCode::Mx),
            "ar" => Ok(CountryCode::Ar),
            other => Err(EngineError::UnsupportedCountry {
                code: other.to_string(),
            }),
        }
    }
}

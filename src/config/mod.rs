//! Country payroll configuration.
//!
//! This module provides configuration loading and the strongly-typed
//! structures describing each country's tax tables, statutory benefits,
//! and labor regulations.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BenefitConfig, BenefitFormula, ContributionSlice, CountryConfig, CountryMetadata,
    IncomeTaxConfig, Regulations, SocialSecurityConfig, TaxBracket,
};

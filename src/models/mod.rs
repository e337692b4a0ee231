//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compliance;
mod country;
mod payroll;

pub use compliance::{
    ComplianceInput, ComplianceIssue, ComplianceReport, ComplianceWarning, RuleCategory, Severity,
};
pub use country::CountryCode;
pub use payroll::{BenefitLine, PayrollCalculation, PayrollTotals, TaxCategory, TaxLine};

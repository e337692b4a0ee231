//! Compliance rule validation for the payroll engine.
//!
//! This module contains the static per-country rule catalogs and the
//! validator that scores employee data against them.

mod rules;
mod validator;

pub use rules::{CheckFn, ComplianceRule, RuleOutcome, catalog};
pub use validator::ComplianceValidator;

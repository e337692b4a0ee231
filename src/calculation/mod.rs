//! Calculation logic for the payroll engine.
//!
//! This module contains the calculation functions for determining payroll
//! withholdings: bracket lookup, progressive income tax, accumulated
//! social security contributions, statutory benefits, and the per-country
//! calculator that orchestrates them.

mod benefits;
mod bracket;
mod calculator;
mod income_tax;
mod social_security;

pub use benefits::calculate_benefits;
pub use bracket::{find_bracket, round_money};
pub use calculator::{CalculationOptions, PayrollCalculator};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use social_security::{SocialSecurityResult, calculate_social_security};

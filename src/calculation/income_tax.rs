//! Progressive income tax calculation.
//!
//! This module computes the withheld income tax (IRRF, ISR, Ganancias)
//! from a gross salary using a country's bracket table: the matching
//! bracket yields `tax = fixed + (taxable_base - bracket.min) * rate`.

use rust_decimal::Decimal;

use crate::config::IncomeTaxConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{TaxCategory, TaxLine};

use super::bracket::{find_bracket, round_money};

/// The result of an income tax calculation.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The withheld tax line.
    pub line: TaxLine,
    /// The taxable base after dependent deductions.
    pub taxable_base: Decimal,
    /// Index of the bracket the base fell into.
    pub bracket_index: usize,
}

/// Calculates the withheld income tax for a gross salary.
///
/// Where the country grants a per-dependent deduction (Brazil's IRRF),
/// it is subtracted from the gross salary before the bracket lookup; the
/// base never goes below zero.
///
/// # Arguments
///
/// * `gross_salary` - The gross monthly salary
/// * `dependents` - Number of declared dependents
/// * `config` - The country's income tax configuration
///
/// # Returns
///
/// Returns the tax line with the amount rounded to cents, or an error if
/// the salary is negative or the bracket table does not cover it.
pub fn calculate_income_tax(
    gross_salary: Decimal,
    dependents: u32,
    config: &IncomeTaxConfig,
) -> EngineResult<IncomeTaxResult> {
    if gross_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            message: format!("gross salary cannot be negative: {}", gross_salary),
        });
    }

    let deduction = config
        .dependent_deduction
        .map(|per_dependent| per_dependent * Decimal::from(dependents))
        .unwrap_or(Decimal::ZERO);

    let taxable_base = (gross_salary - deduction).max(Decimal::ZERO);

    let (bracket_index, bracket) = find_bracket(taxable_base, &config.brackets)?;
    let amount = round_money(bracket.fixed + (taxable_base - bracket.min) * bracket.rate);

    Ok(IncomeTaxResult {
        line: TaxLine {
            code: config.name.to_lowercase(),
            name: config.name.clone(),
            category: TaxCategory::IncomeTax,
            base: taxable_base,
            amount,
        },
        taxable_base,
        bracket_index,
    })
}

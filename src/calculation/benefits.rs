//! Statutory benefit calculation.
//!
//! This module computes the monthly statutory benefit lines for a
//! country: percentage deposits (Brazil's FGTS, Mexico's Infonavit),
//! twelfth-per-month provisions (13th salary, SAC), and days-per-year
//! accruals (Mexican aguinaldo).

use rust_decimal::Decimal;

use crate::config::{BenefitConfig, BenefitFormula};
use crate::error::{EngineError, EngineResult};
use crate::models::BenefitLine;

use super::bracket::round_money;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Calculates all statutory benefit lines for a gross salary.
///
/// # Arguments
///
/// * `gross_salary` - The gross monthly salary
/// * `benefits` - The country's benefit configurations
///
/// # Returns
///
/// Returns one line per configured benefit, each rounded to cents, or an
/// error if the salary is negative.
pub fn calculate_benefits(
    gross_salary: Decimal,
    benefits: &[BenefitConfig],
) -> EngineResult<Vec<BenefitLine>> {
    if gross_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            message: format!("gross salary cannot be negative: {}", gross_salary),
        });
    }

    benefits
        .iter()
        .map(|benefit| {
            let amount = match &benefit.formula {
                BenefitFormula::Rate { rate } => gross_salary * rate,
                BenefitFormula::Twelfth => gross_salary / MONTHS_PER_YEAR,
                BenefitFormula::DaysPerYear { days } => {
                    let daily = gross_salary / DAYS_PER_MONTH;
                    daily * Decimal::from(*days) / MONTHS_PER_YEAR
                }
            };

            Ok(BenefitLine {
                code: benefit.code.clone(),
                name: benefit.name.clone(),
                amount: round_money(amount),
                employer_funded: benefit.employer_funded,
            })
        })
        .collect()
}

//! Per-country payroll calculator.
//!
//! This module provides the [`PayrollCalculator`] type that orchestrates
//! income tax, social security, and statutory benefit calculations into a
//! complete [`PayrollCalculation`] record for a single country.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::{ConfigLoader, CountryConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{CountryCode, PayrollCalculation, PayrollTotals};

use super::benefits::calculate_benefits;
use super::income_tax::calculate_income_tax;
use super::social_security::calculate_social_security;

/// Caller-supplied options for a payroll calculation.
#[derive(Debug, Clone, Default)]
pub struct CalculationOptions {
    /// Number of declared dependents (reduces the taxable base where the
    /// country grants a dependent deduction).
    pub dependents: u32,
    /// Additional deductions to subtract from net pay (advances, union
    /// dues). Must be non-negative.
    pub extra_deductions: Decimal,
}

/// Calculates payroll for a fixed country selected at construction time.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::calculation::{CalculationOptions, PayrollCalculator};
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::CountryCode;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let calculator = PayrollCalculator::for_country(CountryCode::Br, &loader).unwrap();
/// let result = calculator
///     .calculate(Decimal::new(200000, 2), &CalculationOptions::default())
///     .unwrap();
/// println!("Net: {}", result.totals.net_salary);
/// ```
#[derive(Debug, Clone)]
pub struct PayrollCalculator<'a> {
    config: &'a CountryConfig,
}

impl<'a> PayrollCalculator<'a> {
    /// Creates a calculator for the given country.
    ///
    /// Fails with `UnsupportedCountry` when the loader has no
    /// configuration for the country.
    pub fn for_country(code: CountryCode, loader: &'a ConfigLoader) -> EngineResult<Self> {
        Ok(Self {
            config: loader.country(code)?,
        })
    }

    /// Creates a calculator directly from a country configuration.
    pub fn new(config: &'a CountryConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this calculator operates on.
    pub fn config(&self) -> &CountryConfig {
        self.config
    }

    /// Calculates the complete payroll breakdown for a gross salary.
    ///
    /// # Arguments
    ///
    /// * `gross_salary` - The gross monthly salary, non-negative and in
    ///   whole cents
    /// * `options` - Dependents and extra deductions
    ///
    /// # Returns
    ///
    /// Returns a [`PayrollCalculation`] satisfying
    /// `net = gross - total_taxes - total_deductions + total_benefits`,
    /// or an error for negative inputs.
    pub fn calculate(
        &self,
        gross_salary: Decimal,
        options: &CalculationOptions,
    ) -> EngineResult<PayrollCalculation> {
        if gross_salary < Decimal::ZERO {
            return Err(EngineError::InvalidSalary {
                message: format!("gross salary cannot be negative: {}", gross_salary),
            });
        }
        // Tables are contiguous at cent granularity; a sub-cent salary
        // could fall between two brackets.
        if gross_salary.round_dp(2) != gross_salary {
            return Err(EngineError::InvalidSalary {
                message: format!(
                    "gross salary must have at most two decimal places: {}",
                    gross_salary
                ),
            });
        }
        if options.extra_deductions < Decimal::ZERO {
            return Err(EngineError::InvalidSalary {
                message: format!(
                    "extra deductions cannot be negative: {}",
                    options.extra_deductions
                ),
            });
        }

        let income_tax =
            calculate_income_tax(gross_salary, options.dependents, &self.config.income_tax)?;
        let social_security =
            calculate_social_security(gross_salary, &self.config.social_security)?;
        let benefit_lines = calculate_benefits(gross_salary, &self.config.benefits)?;

        let total_taxes = income_tax.line.amount + social_security.line.amount;
        let total_benefits: Decimal = benefit_lines
            .iter()
            .filter(|b| !b.employer_funded)
            .map(|b| b.amount)
            .sum();
        let net_salary =
            gross_salary - total_taxes - options.extra_deductions + total_benefits;

        let effective_tax_rate = if gross_salary.is_zero() {
            Decimal::ZERO
        } else {
            (total_taxes / gross_salary).round_dp(4)
        };

        let details = serde_json::json!({
            "taxable_base": income_tax.taxable_base.to_string(),
            "income_tax_bracket": income_tax.bracket_index,
            "social_security_capped": social_security.capped,
            "effective_tax_rate": effective_tax_rate.to_string(),
        });

        Ok(PayrollCalculation {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            country: self.config.country.code,
            currency: self.config.country.currency.clone(),
            gross_salary,
            taxes: vec![income_tax.line, social_security.line],
            benefits: benefit_lines,
            totals: PayrollTotals {
                total_taxes,
                total_benefits,
                total_deductions: options.extra_deductions,
                net_salary,
            },
            details,
        })
    }
}

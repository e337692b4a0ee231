//! Compliance validation over the static rule catalog.
//!
//! This module provides the [`ComplianceValidator`] type that evaluates
//! every rule in a country's catalog against submitted employee data and
//! aggregates the outcomes into a scored [`ComplianceReport`].

use chrono::Utc;
use uuid::Uuid;

use crate::config::{ConfigLoader, CountryConfig};
use crate::error::EngineResult;
use crate::models::{
    ComplianceInput, ComplianceIssue, ComplianceReport, ComplianceWarning, CountryCode,
};

use super::rules::{RuleOutcome, catalog};

/// Starting score before penalties are applied.
const FULL_SCORE: u32 = 100;

/// Validates employee data against a fixed country's rule catalog.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::compliance::ComplianceValidator;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{ComplianceInput, CountryCode};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let validator = ComplianceValidator::for_country(CountryCode::Mx, &loader).unwrap();
/// let report = validator.validate(&ComplianceInput {
///     employee_id: "emp_001".to_string(),
///     country: CountryCode::Mx,
///     monthly_salary: Decimal::new(1200000, 2),
///     weekly_hours: None,
///     vacation_days: Some(12),
///     year_end_bonus: Some(true),
///     social_security_registered: Some(true),
/// });
/// println!("score: {}", report.score);
/// ```
#[derive(Debug, Clone)]
pub struct ComplianceValidator<'a> {
    config: &'a CountryConfig,
}

impl<'a> ComplianceValidator<'a> {
    /// Creates a validator for the given country.
    ///
    /// Fails with `UnsupportedCountry` when the loader has no
    /// configuration for the country.
    pub fn for_country(code: CountryCode, loader: &'a ConfigLoader) -> EngineResult<Self> {
        Ok(Self {
            config: loader.country(code)?,
        })
    }

    /// Creates a validator directly from a country configuration.
    pub fn new(config: &'a CountryConfig) -> Self {
        Self { config }
    }

    /// Evaluates every rule in the country's catalog against `input`.
    ///
    /// The score starts at 100 and each failed rule subtracts its
    /// severity penalty, floored at 0. A rule whose check returns `Err`
    /// is collected as a warning and never affects the score. The report
    /// is compliant iff no issues were produced.
    pub fn validate(&self, input: &ComplianceInput) -> ComplianceReport {
        let rules = catalog(self.config.country.code);

        let mut issues = Vec::new();
        let mut warnings = Vec::new();
        let mut score = FULL_SCORE;

        for rule in rules {
            match (rule.check)(input, self.config) {
                Ok(RuleOutcome::Pass) => {}
                Ok(RuleOutcome::Fail {
                    message,
                    recommendation,
                }) => {
                    score = score.saturating_sub(rule.severity.penalty());
                    issues.push(ComplianceIssue {
                        rule_id: rule.id.to_string(),
                        severity: rule.severity,
                        category: rule.category,
                        message,
                        recommendation,
                    });
                }
                Err(reason) => {
                    warnings.push(ComplianceWarning {
                        rule_id: rule.id.to_string(),
                        message: reason,
                    });
                }
            }
        }

        ComplianceReport {
            report_id: Uuid::new_v4(),
            validated_at: Utc::now(),
            country: self.config.country.code,
            is_compliant: issues.is_empty(),
            score,
            rules_evaluated: rules.len() as u32,
            issues,
            warnings,
        }
    }
}

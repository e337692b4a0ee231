//! Compliance validation models.
//!
//! This module contains the input and report types used by the compliance
//! validator: the employee data under review, rule severities and
//! categories, and the [`ComplianceReport`] produced per validation call.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CountryCode;

/// Severity tier of a compliance rule.
///
/// Each tier carries a fixed score penalty applied when the rule fails.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Severity;
///
/// assert_eq!(Severity::Critical.penalty(), 25);
/// assert_eq!(Severity::Low.penalty(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Minor issue, penalty 5.
    Low,
    /// Moderate issue, penalty 10.
    Medium,
    /// Serious issue, penalty 15.
    High,
    /// Legal violation, penalty 25.
    Critical,
}

impl Severity {
    /// Returns the fixed score penalty for a failed rule of this severity.
    pub fn penalty(self) -> u32 {
        match self {
            Severity::Low => 5,
            Severity::Medium => 10,
            Severity::High => 15,
            Severity::Critical => 25,
        }
    }
}

/// Legal domain a compliance rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Tax withholding rules.
    Tax,
    /// Labor law rules (hours, vacation, minimum wage).
    Labor,
    /// Social security registration and contribution rules.
    SocialSecurity,
    /// Statutory benefit rules (year-end bonus, deposits).
    Benefits,
}

/// Employee and payroll data submitted for compliance validation.
///
/// Optional fields model data the caller may not have; a rule that needs
/// a missing field is reported as a warning instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceInput {
    /// Identifier of the employee under review.
    pub employee_id: String,
    /// The country whose rule catalog applies.
    pub country: CountryCode,
    /// The employee's gross monthly salary.
    pub monthly_salary: Decimal,
    /// Contracted weekly working hours, if known.
    #[serde(default)]
    pub weekly_hours: Option<Decimal>,
    /// Annual vacation days granted, if known.
    #[serde(default)]
    pub vacation_days: Option<u32>,
    /// Whether the employee receives the statutory year-end bonus
    /// (13th salary, aguinaldo, SAC), if known.
    #[serde(default)]
    pub year_end_bonus: Option<bool>,
    /// Whether the employee is registered with the social security
    /// authority, if known.
    #[serde(default)]
    pub social_security_registered: Option<bool>,
}

/// A failed compliance rule in a validation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceIssue {
    /// The id of the rule that failed.
    pub rule_id: String,
    /// The severity tier of the rule.
    pub severity: Severity,
    /// The legal domain of the rule.
    pub category: RuleCategory,
    /// Human-readable description of the violation.
    pub message: String,
    /// Suggested remediation.
    pub recommendation: String,
}

/// A rule that could not be evaluated.
///
/// Warnings never affect the score or the compliance flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceWarning {
    /// The id of the rule that was skipped.
    pub rule_id: String,
    /// Why the rule could not be evaluated.
    pub message: String,
}

/// The complete result of a compliance validation call.
///
/// Ephemeral: created per call and returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the validation was performed.
    pub validated_at: DateTime<Utc>,
    /// The country whose rule catalog was evaluated.
    pub country: CountryCode,
    /// True iff no issues were produced.
    pub is_compliant: bool,
    /// Score in `0..=100`: starts at 100, minus each failed rule's
    /// severity penalty, floored at 0.
    pub score: u32,
    /// Rules evaluated (passed, failed, or skipped).
    pub rules_evaluated: u32,
    /// Failed rules.
    pub issues: Vec<ComplianceIssue>,
    /// Rules that could not be evaluated.
    pub warnings: Vec<ComplianceWarning>,
}

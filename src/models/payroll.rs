//! Payroll calculation result models.
//!
//! This module contains the [`PayrollCalculation`] type and its associated
//! structures that capture all outputs from a payroll calculation, including
//! itemized tax lines, statutory benefit lines, and totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CountryCode;

/// The category of a withheld tax line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxCategory {
    /// Progressive income tax (IRRF, ISR, Ganancias).
    IncomeTax,
    /// Social security contribution (INSS, IMSS, SIPA).
    SocialSecurity,
}

/// A single withheld tax in a payroll calculation.
///
/// Each tax line captures the statutory code of the tax, the base it was
/// computed over, and the resulting amount.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{TaxLine, TaxCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = TaxLine {
///     code: "irrf".to_string(),
///     name: "IRRF".to_string(),
///     category: TaxCategory::IncomeTax,
///     base: Decimal::from_str("3000.00").unwrap(),
///     amount: Decimal::from_str("68.56").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Short code identifying the tax (e.g., "irrf", "isr", "inss").
    pub code: String,
    /// The statutory name of the tax.
    pub name: String,
    /// Whether this is income tax or a social security contribution.
    pub category: TaxCategory,
    /// The base amount the tax was computed over.
    pub base: Decimal,
    /// The withheld amount, rounded to cents.
    pub amount: Decimal,
}

/// A statutory benefit line in a payroll calculation.
///
/// Benefits cover both employer-funded items (FGTS deposits, Infonavit
/// contributions, year-end bonus provisions) and cash benefits payable to
/// the employee in the period. Only the latter count towards net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitLine {
    /// Short code identifying the benefit (e.g., "fgts", "aguinaldo").
    pub code: String,
    /// The statutory name of the benefit.
    pub name: String,
    /// The benefit amount for the period, rounded to cents.
    pub amount: Decimal,
    /// True when the employer funds this item outside the employee's net
    /// pay (deposits, provisions, employer contributions).
    pub employer_funded: bool,
}

/// Aggregated totals for a payroll calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of all withheld tax lines.
    pub total_taxes: Decimal,
    /// Sum of cash benefit lines (employer-funded lines excluded).
    pub total_benefits: Decimal,
    /// Additional deductions requested by the caller.
    pub total_deductions: Decimal,
    /// Net salary: `gross - total_taxes - total_deductions + total_benefits`.
    pub net_salary: Decimal,
}

/// The complete result of a payroll calculation.
///
/// Created per calculation call and never mutated afterwards. Persisting
/// the record is the caller's concern.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CountryCode, PayrollCalculation, PayrollTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = PayrollCalculation {
///     calculation_id: Uuid::new_v4(),
///     calculated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     country: CountryCode::Br,
///     currency: "BRL".to_string(),
///     gross_salary: Decimal::new(200000, 2),
///     taxes: vec![],
///     benefits: vec![],
///     totals: PayrollTotals {
///         total_taxes: Decimal::ZERO,
///         total_benefits: Decimal::ZERO,
///         total_deductions: Decimal::ZERO,
///         net_salary: Decimal::new(200000, 2),
///     },
///     details: serde_json::json!({}),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The country whose rules were applied.
    pub country: CountryCode,
    /// ISO 4217 currency code of all monetary amounts.
    pub currency: String,
    /// The gross monthly salary the calculation started from.
    pub gross_salary: Decimal,
    /// Itemized withheld taxes.
    pub taxes: Vec<TaxLine>,
    /// Itemized statutory benefits.
    pub benefits: Vec<BenefitLine>,
    /// Aggregated totals.
    pub totals: PayrollTotals,
    /// Country-specific detail values (effective rates, caps applied).
    pub details: serde_json::Value,
}

impl PayrollCalculation {
    /// Returns the sum of employer-funded benefit lines.
    ///
    /// These amounts are paid on top of gross salary and never reduce or
    /// increase the employee's net pay.
    pub fn employer_cost(&self) -> Decimal {
        self.benefits
            .iter()
            .filter(|b| b.employer_funded)
            .map(|b| b.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_calculation() -> PayrollCalculation {
        PayrollCalculation {
            calculation_id: Uuid::nil(),
            calculated_at: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            country: CountryCode::Br,
            currency: "BRL".to_string(),
            gross_salary: dec("2000.00"),
            taxes: vec![TaxLine {
                code: "inss".to_string(),
                name: "INSS".to_string(),
                category: TaxCategory::SocialSecurity,
                base: dec("2000.00"),
                amount: dec("158.82"),
            }],
            benefits: vec![BenefitLine {
                code: "fgts".to_string(),
                name: "FGTS".to_string(),
                amount: dec("160.00"),
                employer_funded: true,
            }],
            totals: PayrollTotals {
                total_taxes: dec("158.82"),
                total_benefits: dec("0"),
                total_deductions: dec("0"),
                net_salary: dec("1841.18"),
            },
            details: serde_json::json!({}),
        }
    }

    #[test]
    fn test_tax_category_serialization() {
        assert_eq!(
            serde_json::to_string(&TaxCategory::IncomeTax).unwrap(),
            "\"income_tax\""
        );
        assert_eq!(
            serde_json::to_string(&TaxCategory::SocialSecurity).unwrap(),
            "\"social_security\""
        );
    }

    #[test]
    fn test_employer_cost_sums_only_employer_funded_lines() {
        let mut calc = sample_calculation();
        calc.benefits.push(BenefitLine {
            code: "bonus".to_string(),
            name: "Cash bonus".to_string(),
            amount: dec("50.00"),
            employer_funded: false,
        });

        assert_eq!(calc.employer_cost(), dec("160.00"));
    }

    #[test]
    fn test_net_salary_identity_holds_in_sample() {
        let calc = sample_calculation();
        let expected = calc.gross_salary - calc.totals.total_taxes - calc.totals.total_deductions
            + calc.totals.total_benefits;
        assert_eq!(calc.totals.net_salary, expected);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let calc = sample_calculation();
        let json = serde_json::to_string(&calc).unwrap();
        let back: PayrollCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(calc, back);
    }

    #[test]
    fn test_serialized_shape() {
        let calc = sample_calculation();
        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"country\":\"br\""));
        assert!(json.contains("\"currency\":\"BRL\""));
        assert!(json.contains("\"gross_salary\":\"2000.00\""));
        assert!(json.contains("\"taxes\":["));
        assert!(json.contains("\"benefits\":["));
        assert!(json.contains("\"totals\":{"));
    }

    #[test]
    fn test_tax_line_deserialization() {
        let json = r#"{
            "code": "isr",
            "name": "ISR",
            "category": "income_tax",
            "base": "7735.01",
            "amount": "148.51"
        }"#;

        let line: TaxLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.code, "isr");
        assert_eq!(line.category, TaxCategory::IncomeTax);
        assert_eq!(line.amount, dec("148.51"));
    }
}

//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/calculate` and `/compliance/validate` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::CalculationOptions;
use crate::models::{ComplianceInput, CountryCode};

/// Request body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The country whose rules to apply.
    pub country: CountryCode,
    /// The gross monthly salary.
    pub gross_salary: Decimal,
    /// Number of declared dependents.
    #[serde(default)]
    pub dependents: u32,
    /// Additional deductions to subtract from net pay.
    #[serde(default)]
    pub extra_deductions: Decimal,
}

impl PayrollRequest {
    /// Extracts the calculation options from the request.
    pub fn options(&self) -> CalculationOptions {
        CalculationOptions {
            dependents: self.dependents,
            extra_deductions: self.extra_deductions,
        }
    }
}

/// Request body for the `/compliance/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRequest {
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
    /// Whether the employee receives the statutory year-end bonus, if known.
    #[serde(default)]
    pub year_end_bonus: Option<bool>,
    /// Whether the employee is registered with social security, if known.
    #[serde(default)]
    pub social_security_registered: Option<bool>,
}

impl From<ComplianceRequest> for ComplianceInput {
    fn from(req: ComplianceRequest) -> Self {
        ComplianceInput {
            employee_id: req.employee_id,
            country: req.country,
            monthly_salary: req.monthly_salary,
            weekly_hours: req.weekly_hours,
            vacation_days: req.vacation_days,
            year_end_bonus: req.year_end_bonus,
            social_security_registered: req.social_security_registered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "country": "br",
            "gross_salary": "2000.00",
            "dependents": 2,
            "extra_deductions": "50.00"
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.country, CountryCode::Br);
        assert_eq!(request.gross_salary, dec("2000.00"));
        assert_eq!(request.dependents, 2);
        assert_eq!(request.extra_deductions, dec("50.00"));
    }

    #[test]
    fn test_payroll_request_optional_fields_default() {
        let json = r#"{
            "country": "mx",
            "gross_salary": "7735.01"
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.dependents, 0);
        assert_eq!(request.extra_deductions, Decimal::ZERO);
    }

    #[test]
    fn test_options_extraction() {
        let request = PayrollRequest {
            country: CountryCode::Ar,
            gross_salary: dec("500000.00"),
            dependents: 1,
            extra_deductions: dec("1000.00"),
        };

        let options = request.options();
        assert_eq!(options.dependents, 1);
        assert_eq!(options.extra_deductions, dec("1000.00"));
    }

    #[test]
    fn test_compliance_request_conversion() {
        let json = r#"{
            "employee_id": "emp_001",
            "country": "br",
            "monthly_salary": "2000.00",
            "vacation_days": 30
        }"#;

        let request: ComplianceRequest = serde_json::from_str(json).unwrap();
        let input: ComplianceInput = request.into();

        assert_eq!(input.employee_id, "emp_001");
        assert_eq!(input.country, CountryCode::Br);
        assert_eq!(input.vacation_days, Some(30));
        assert!(input.weekly_hours.is_none());
    }
}

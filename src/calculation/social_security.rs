//! Social security contribution calculation.
//!
//! This module computes the employee's social security contribution
//! (INSS, IMSS, SIPA) by accumulated-slice summation: each slice of the
//! contribution table taxes the portion of salary that falls inside it,
//! and salary above the final slice (the ceiling) contributes nothing.

use rust_decimal::Decimal;

use crate::config::SocialSecurityConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{TaxCategory, TaxLine};

use super::bracket::round_money;

/// The result of a social security contribution calculation.
#[derive(Debug, Clone)]
pub struct SocialSecurityResult {
    /// The withheld contribution line.
    pub line: TaxLine,
    /// True when the salary exceeded the contribution ceiling.
    pub capped: bool,
}

/// Calculates the employee's social security contribution.
///
/// Sums `(min(salary, slice.max) - slice.min) * slice.rate` over every
/// slice whose lower bound the salary reaches, then rounds once to cents.
///
/// # Arguments
///
/// * `gross_salary` - The gross monthly salary
/// * `config` - The country's contribution table
///
/// # Returns
///
/// Returns the contribution line, or an error if the salary is negative.
pub fn calculate_social_security(
    gross_salary: Decimal,
    config: &SocialSecurityConfig,
) -> EngineResult<SocialSecurityResult> {
    if gross_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            message: format!("gross salary cannot be negative: {}", gross_salary),
        });
    }

    let mut total = Decimal::ZERO;
    let mut capped = false;

    for slice in &config.slices {
        if gross_salary < slice.min {
            break;
        }
        let taxed_portion = gross_salary.min(slice.max) - slice.min;
        total += taxed_portion * slice.rate;
        if gross_salary > slice.max {
            capped = true;
        } else {
            capped = false;
        }
    }

    // capped stays true only when the salary clears the final slice
    let amount = round_money(total);

    Ok(SocialSecurityResult {
        line: TaxLine {
            code: config.name.to_lowercase(),
            name: config.name.clone(),
            category: TaxCategory::SocialSecurity,
            base: gross_salary,
            amount,
        },
        capped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContributionSlice;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn brazilian_inss() -> SocialSecurityConfig {
        SocialSecurityConfig {
            name: "INSS".to_string(),
            slices: vec![
                ContributionSlice {
                    min: dec("0.00"),
                    max: dec("1412.00"),
                    rate: dec("0.075"),
                },
                ContributionSlice {
                    min: dec("1412.01"),
                    max: dec("2666.68"),
                    rate: dec("0.09"),
                },
                ContributionSlice {
                    min: dec("2666.69"),
                    max: dec("4000.03"),
                    rate: dec("0.12"),
                },
                ContributionSlice {
                    min: dec("4000.04"),
                    max: dec("7786.02"),
                    rate: dec("0.14"),
                },
            ],
        }
    }

    #[test]
    fn test_inss_within_first_slice() {
        let result = calculate_social_security(dec("1000.00"), &brazilian_inss()).unwrap();
        assert_eq!(result.line.amount, dec("75.00"));
        assert!(!result.capped);
    }

    #[test]
    fn test_inss_spans_two_slices() {
        let result = calculate_social_security(dec("2000.00"), &brazilian_inss()).unwrap();
        // 1412.00 * 7.5% + (2000.00 - 1412.01) * 9% = 105.90 + 52.9191
        assert_eq!(result.line.amount, dec("158.82"));
        assert!(!result.capped);
        assert_eq!(result.line.code, "inss");
        assert_eq!(result.line.category, TaxCategory::SocialSecurity);
    }

    #[test]
    fn test_inss_above_ceiling_is_capped() {
        let at_ceiling = calculate_social_security(dec("7786.02"), &brazilian_inss()).unwrap();
        let above = calculate_social_security(dec("20000.00"), &brazilian_inss()).unwrap();

        assert_eq!(above.line.amount, at_ceiling.line.amount);
        assert!(above.capped);
        assert!(!at_ceiling.capped);
    }

    #[test]
    fn test_contribution_is_monotonic() {
        let config = brazilian_inss();
        let mut previous = Decimal::ZERO;
        let mut salary = dec("0");
        while salary <= dec("9000") {
            let amount = calculate_social_security(salary, &config)
                .unwrap()
                .line
                .amount;
            assert!(
                amount >= previous,
                "contribution decreased at salary {}: {} < {}",
                salary,
                amount,
                previous
            );
            previous = amount;
            salary += dec("137.53");
        }
    }

    #[test]
    fn test_zero_salary_contributes_nothing() {
        let result = calculate_social_security(dec("0"), &brazilian_inss()).unwrap();
        assert_eq!(result.line.amount, dec("0"));
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let result = calculate_social_security(dec("-500.00"), &brazilian_inss());
        assert!(matches!(result, Err(EngineError::InvalidSalary { .. })));
    }

    #[test]
    fn test_single_slice_table_with_cap() {
        let imss = SocialSecurityConfig {
            name: "IMSS".to_string(),
            slices: vec![ContributionSlice {
                min: dec("0.00"),
                max: dec("82513.20"),
                rate: dec("0.02375"),
            }],
        };

        let result = calculate_social_security(dec("2000.00"), &imss).unwrap();
        assert_eq!(result.line.amount, dec("47.50"));
    }
}

//! Country-scoped compliance rule catalogs.
//!
//! Each rule is a named, country-scoped predicate over a
//! [`ComplianceInput`] and the country's configured regulations. Rule
//! check functions are pure, share no state, and have no ordering
//! dependency between them. A check that needs data the caller did not
//! provide returns `Err`, which the validator reports as a warning.

use crate::config::CountryConfig;
use crate::models::{ComplianceInput, CountryCode, RuleCategory, Severity};

/// The outcome of evaluating a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule is satisfied.
    Pass,
    /// The rule is violated.
    Fail {
        /// Human-readable description of the violation.
        message: String,
        /// Suggested remediation.
        recommendation: String,
    },
}

/// The signature of a rule check function.
///
/// `Err` means the rule could not be evaluated; the validator collects
/// it as a non-fatal warning and continues with the remaining rules.
pub type CheckFn = fn(&ComplianceInput, &CountryConfig) -> Result<RuleOutcome, String>;

/// A single entry of the static compliance rule catalog.
#[derive(Debug, Clone)]
pub struct ComplianceRule {
    /// Stable rule identifier (e.g., "br_minimum_wage").
    pub id: &'static str,
    /// Human-readable rule name.
    pub name: &'static str,
    /// Legal domain of the rule.
    pub category: RuleCategory,
    /// Severity tier, determining the score penalty on failure.
    pub severity: Severity,
    /// The pure check function.
    pub check: CheckFn,
}

/// Returns the static rule catalog for a country.
pub fn catalog(country: CountryCode) -> &'static [ComplianceRule] {
    match country {
        CountryCode::Br => &BRAZIL_RULES,
        CountryCode::Mx => &MEXICO_RULES,
        CountryCode::Ar => &ARGENTINA_RULES,
    }
}

fn check_minimum_wage(
    input: &ComplianceInput,
    config: &CountryConfig,
) -> Result<RuleOutcome, String> {
    let minimum = config.regulations.minimum_wage;
    if input.monthly_salary < minimum {
        Ok(RuleOutcome::Fail {
            message: format!(
                "Monthly salary {} is below the statutory minimum wage {}",
                input.monthly_salary, minimum
            ),
            recommendation: format!("Raise the monthly salary to at least {}", minimum),
        })
    } else {
        Ok(RuleOutcome::Pass)
    }
}

fn check_vacation_days(
    input: &ComplianceInput,
    config: &CountryConfig,
) -> Result<RuleOutcome, String> {
    let days = input
        .vacation_days
        .ok_or_else(|| "vacation_days not provided".to_string())?;
    let minimum = config.regulations.min_vacation_days;
    if days < minimum {
        Ok(RuleOutcome::Fail {
            message: format!(
                "Annual vacation of {} days is below the statutory minimum of {} days",
                days, minimum
            ),
            recommendation: format!("Grant at least {} vacation days per year", minimum),
        })
    } else {
        Ok(RuleOutcome::Pass)
    }
}

fn check_weekly_hours(
    input: &ComplianceInput,
    config: &CountryConfig,
) -> Result<RuleOutcome, String> {
    let hours = input
        .weekly_hours
        .ok_or_else(|| "weekly_hours not provided".to_string())?;
    let maximum = config.regulations.max_weekly_hours;
    if hours > maximum {
        Ok(RuleOutcome::Fail {
            message: format!(
                "Contracted weekly hours {} exceed the statutory maximum of {}",
                hours, maximum
            ),
            recommendation: format!(
                "Reduce ordinary weekly hours to {} or pay overtime",
                maximum
            ),
        })
    } else {
        Ok(RuleOutcome::Pass)
    }
}

fn check_year_end_bonus(
    input: &ComplianceInput,
    config: &CountryConfig,
) -> Result<RuleOutcome, String> {
    if !config.regulations.year_end_bonus_required {
        return Ok(RuleOutcome::Pass);
    }
    let granted = input
        .year_end_bonus
        .ok_or_else(|| "year_end_bonus not provided".to_string())?;
    if granted {
        Ok(RuleOutcome::Pass)
    } else {
        Ok(RuleOutcome::Fail {
            message: "Employee does not receive the mandatory year-end bonus".to_string(),
            recommendation: "Register the statutory year-end bonus for this employee".to_string(),
        })
    }
}

fn check_social_security_registration(
    input: &ComplianceInput,
    config: &CountryConfig,
) -> Result<RuleOutcome, String> {
    let registered = input
        .social_security_registered
        .ok_or_else(|| "social_security_registered not provided".to_string())?;
    if registered {
        Ok(RuleOutcome::Pass)
    } else {
        Ok(RuleOutcome::Fail {
            message: format!(
                "Employee is not registered with {}",
                config.social_security.name
            ),
            recommendation: format!(
                "Register the employee with {} before the next payroll run",
                config.social_security.name
            ),
        })
    }
}

static BRAZIL_RULES: [ComplianceRule; 5] = [
    ComplianceRule {
        id: "br_minimum_wage",
        name: "Salary meets the national minimum wage",
        category: RuleCategory::Labor,
        severity: Severity::Critical,
        check: check_minimum_wage,
    },
    ComplianceRule {
        id: "br_vacation_days",
        name: "Annual vacation meets the CLT minimum",
        category: RuleCategory::Labor,
        severity: Severity::High,
        check: check_vacation_days,
    },
    ComplianceRule {
        id: "br_weekly_hours",
        name: "Weekly hours within the constitutional limit",
        category: RuleCategory::Labor,
        severity: Severity::Medium,
        check: check_weekly_hours,
    },
    ComplianceRule {
        id: "br_thirteenth_salary",
        name: "13th salary granted",
        category: RuleCategory::Benefits,
        severity: Severity::High,
        check: check_year_end_bonus,
    },
    ComplianceRule {
        id: "br_inss_registration",
        name: "Employee registered with INSS",
        category: RuleCategory::SocialSecurity,
        severity: Severity::Critical,
        check: check_social_security_registration,
    },
];

static MEXICO_RULES: [ComplianceRule; 5] = [
    ComplianceRule {
        id: "mx_minimum_wage",
        name: "Salary meets the general minimum wage",
        category: RuleCategory::Labor,
        severity: Severity::Critical,
        check: check_minimum_wage,
    },
    ComplianceRule {
        id: "mx_vacation_days",
        name: "Annual vacation meets the LFT minimum",
        category: RuleCategory::Labor,
        severity: Severity::Medium,
        check: check_vacation_days,
    },
    ComplianceRule {
        id: "mx_weekly_hours",
        name: "Weekly hours within the LFT limit",
        category: RuleCategory::Labor,
        severity: Severity::Medium,
        check: check_weekly_hours,
    },
    ComplianceRule {
        id: "mx_aguinaldo",
        name: "Aguinaldo granted",
        category: RuleCategory::Benefits,
        severity: Severity::High,
        check: check_year_end_bonus,
    },
    ComplianceRule {
        id: "mx_imss_registration",
        name: "Employee registered with IMSS",
        category: RuleCategory::SocialSecurity,
        severity: Severity::Critical,
        check: check_social_security_registration,
    },
];

static ARGENTINA_RULES: [ComplianceRule; 5] = [
    ComplianceRule {
        id: "ar_minimum_wage",
        name: "Salary meets the SMVM minimum",
        category: RuleCategory::Labor,
        severity: Severity::Critical,
        check: check_minimum_wage,
    },
    ComplianceRule {
        id: "ar_vacation_days",
        name: "Annual vacation meets the LCT minimum",
        category: RuleCategory::Labor,
        severity: Severity::Medium,
        check: check_vacation_days,
    },
    ComplianceRule {
        id: "ar_weekly_hours",
        name: "Weekly hours within the legal limit",
        category: RuleCategory::Labor,
        severity: Severity::Medium,
        check: check_weekly_hours,
    },
    ComplianceRule {
        id: "ar_sac",
        name: "SAC granted",
        category: RuleCategory::Benefits,
        severity: Severity::High,
        check: check_year_end_bonus,
    },
    ComplianceRule {
        id: "ar_sipa_registration",
        name: "Employee registered with SIPA",
        category: RuleCategory::SocialSecurity,
        severity: Severity::Critical,
        check: check_social_security_registration,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use std::str::FromStr;

    use crate::config::ConfigLoader;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn brazil_config() -> CountryConfig {
        ConfigLoader::load("./config")
            .unwrap()
            .country(CountryCode::Br)
            .unwrap()
            .clone()
    }

    fn compliant_input() -> ComplianceInput {
        ComplianceInput {
            employee_id: "emp_001".to_string(),
            country: CountryCode::Br,
            monthly_salary: dec("2000.00"),
            weekly_hours: Some(dec("40")),
            vacation_days: Some(30),
            year_end_bonus: Some(true),
            social_security_registered: Some(true),
        }
    }

    #[test]
    fn test_every_country_has_a_catalog() {
        for code in CountryCode::ALL {
            assert!(!catalog(code).is_empty());
        }
    }

    #[test]
    fn test_rule_ids_are_unique_within_each_catalog() {
        for code in CountryCode::ALL {
            let ids: HashSet<&str> = catalog(code).iter().map(|r| r.id).collect();
            assert_eq!(ids.len(), catalog(code).len());
        }
    }

    #[test]
    fn test_rule_ids_carry_country_prefix() {
        for code in CountryCode::ALL {
            for rule in catalog(code) {
                assert!(
                    rule.id.starts_with(code.as_str()),
                    "rule {} missing prefix {}",
                    rule.id,
                    code
                );
            }
        }
    }

    #[test]
    fn test_minimum_wage_check_passes_and_fails() {
        let config = brazil_config();
        let mut input = compliant_input();

        assert_eq!(
            check_minimum_wage(&input, &config).unwrap(),
            RuleOutcome::Pass
        );

        input.monthly_salary = dec("1000.00");
        match check_minimum_wage(&input, &config).unwrap() {
            RuleOutcome::Fail { message, .. } => {
                assert!(message.contains("1000.00"));
                assert!(message.contains("1412.00"));
            }
            other => panic!("Expected Fail, got {:?}", other),
        }
    }

    #[test]
    fn test_vacation_check_requires_data() {
        let config = brazil_config();
        let mut input = compliant_input();
        input.vacation_days = None;

        let err = check_vacation_days(&input, &config).unwrap_err();
        assert!(err.contains("vacation_days"));
    }

    #[test]
    fn test_vacation_check_fails_below_minimum() {
        let config = brazil_config();
        let mut input = compliant_input();
        input.vacation_days = Some(20);

        assert!(matches!(
            check_vacation_days(&input, &config).unwrap(),
            RuleOutcome::Fail { .. }
        ));
    }

    #[test]
    fn test_weekly_hours_check_fails_above_maximum() {
        let config = brazil_config();
        let mut input = compliant_input();
        input.weekly_hours = Some(dec("50"));

        match check_weekly_hours(&input, &config).unwrap() {
            RuleOutcome::Fail { message, .. } => assert!(message.contains("44")),
            other => panic!("Expected Fail, got {:?}", other),
        }
    }

    #[test]
    fn test_year_end_bonus_check() {
        let config = brazil_config();
        let mut input = compliant_input();

        assert_eq!(
            check_year_end_bonus(&input, &config).unwrap(),
            RuleOutcome::Pass
        );

        input.year_end_bonus = Some(false);
        assert!(matches!(
            check_year_end_bonus(&input, &config).unwrap(),
            RuleOutcome::Fail { .. }
        ));
    }

    #[test]
    fn test_registration_check_names_the_authority() {
        let config = brazil_config();
        let mut input = compliant_input();
        input.social_security_registered = Some(false);

        match check_social_security_registration(&input, &config).unwrap() {
            RuleOutcome::Fail { message, .. } => assert!(message.contains("INSS")),
            other => panic!("Expected Fail, got {:?}", other),
        }
    }
}

//! Configuration types for country payroll rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from per-country YAML configuration files, along with
//! the validation applied to every tax table at load time.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::CountryCode;

/// One cent, the grid every table boundary sits on.
const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Identifying information about a country.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryMetadata {
    /// The country code (e.g., `br`).
    pub code: CountryCode,
    /// The human-readable country name.
    pub name: String,
    /// ISO 4217 currency code (e.g., "BRL").
    pub currency: String,
    /// BCP 47 locale tag (e.g., "pt-BR").
    pub locale: String,
    /// IANA timezone name (e.g., "America/Sao_Paulo").
    pub timezone: String,
}

/// A progressive income tax bracket.
///
/// Brackets are closed-closed ranges `[min, max]`; a `max` of `None`
/// marks the final unbounded bracket. The tax for a salary inside the
/// bracket is `fixed + (salary - min) * rate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (inclusive).
    pub min: Decimal,
    /// Upper bound of the bracket (inclusive); `None` means unbounded.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Marginal rate applied above `min`.
    pub rate: Decimal,
    /// Fixed tax accumulated from all lower brackets.
    #[serde(default)]
    pub fixed: Decimal,
}

/// Income tax configuration for a country.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxConfig {
    /// The statutory name of the tax (e.g., "IRRF", "ISR").
    pub name: String,
    /// Per-dependent deduction subtracted from the taxable base before
    /// the bracket lookup, where the country grants one.
    #[serde(default)]
    pub dependent_deduction: Option<Decimal>,
    /// Ordered, contiguous brackets covering `[0, infinity)`.
    pub brackets: Vec<TaxBracket>,
}

/// One slice of an accumulated social security contribution table.
///
/// Each slice contributes `(min(salary, max) - min) * rate`; the last
/// slice's `max` is the contribution ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContributionSlice {
    /// Lower bound of the slice (inclusive).
    pub min: Decimal,
    /// Upper bound of the slice (inclusive).
    pub max: Decimal,
    /// Rate applied to the portion of salary inside this slice.
    pub rate: Decimal,
}

/// Social security contribution configuration for a country.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialSecurityConfig {
    /// The statutory name of the contribution (e.g., "INSS", "IMSS").
    pub name: String,
    /// Ordered slices up to the contribution ceiling.
    pub slices: Vec<ContributionSlice>,
}

/// How a statutory benefit amount is derived from gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BenefitFormula {
    /// A fixed percentage of gross salary (e.g., FGTS 8%).
    Rate {
        /// The rate applied to gross salary.
        rate: Decimal,
    },
    /// One twelfth of gross salary per month (13th salary, SAC accrual).
    Twelfth,
    /// A yearly entitlement of `days` daily salaries, accrued monthly
    /// (e.g., Mexican aguinaldo of 15 days).
    DaysPerYear {
        /// Daily salaries granted per year.
        days: u32,
    },
}

/// A statutory benefit granted by a country.
#[derive(Debug, Clone, Deserialize)]
pub struct BenefitConfig {
    /// Short code identifying the benefit (e.g., "fgts").
    pub code: String,
    /// The statutory name of the benefit.
    pub name: String,
    /// True when the employer funds this item outside net pay.
    pub employer_funded: bool,
    /// How the monthly amount is computed.
    pub formula: BenefitFormula,
}

/// Country-level labor regulation flags used by the compliance rules.
#[derive(Debug, Clone, Deserialize)]
pub struct Regulations {
    /// Statutory monthly minimum wage.
    pub minimum_wage: Decimal,
    /// Minimum annual vacation days.
    pub min_vacation_days: u32,
    /// Maximum ordinary weekly working hours.
    pub max_weekly_hours: Decimal,
    /// Whether a statutory year-end bonus is mandatory.
    pub year_end_bonus_required: bool,
}

/// The complete payroll configuration for one country.
///
/// Immutable after load; validated by [`CountryConfig::validate`] before
/// the loader accepts it.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryConfig {
    /// Country metadata.
    pub country: CountryMetadata,
    /// Income tax bracket table.
    pub income_tax: IncomeTaxConfig,
    /// Social security contribution table.
    pub social_security: SocialSecurityConfig,
    /// Statutory benefits.
    pub benefits: Vec<BenefitConfig>,
    /// Labor regulation flags.
    pub regulations: Regulations,
}

impl CountryConfig {
    /// Validates every table in this configuration.
    ///
    /// Checks that the income tax brackets start at zero, are contiguous
    /// (each bracket starts one cent above the previous maximum, so there
    /// is neither overlap nor gap), end in an unbounded sentinel, and
    /// carry non-negative rates; and that the contribution slices are
    /// bounded and contiguous in the same way. Called by the loader so
    /// that a malformed table is rejected at startup rather than at
    /// calculation time.
    pub fn validate(&self) -> EngineResult<()> {
        self.validate_brackets()?;
        self.validate_slices()?;
        Ok(())
    }

    fn table_error(&self, table: &str, message: impl Into<String>) -> EngineError {
        EngineError::InvalidTaxTable {
            country: self.country.code.to_string(),
            table: table.to_string(),
            message: message.into(),
        }
    }

    fn validate_brackets(&self) -> EngineResult<()> {
        let table = &self.income_tax.name;
        let brackets = &self.income_tax.brackets;

        let first = brackets
            .first()
            .ok_or_else(|| self.table_error(table, "bracket table is empty"))?;
        if !first.min.is_zero() {
            return Err(self.table_error(table, "first bracket must start at 0"));
        }

        for (i, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.fixed < Decimal::ZERO {
                return Err(self.table_error(
                    table,
                    format!("bracket {} has a negative rate or fixed amount", i),
                ));
            }

            let is_last = i == brackets.len() - 1;
            match bracket.max {
                None if !is_last => {
                    return Err(self.table_error(
                        table,
                        format!("bracket {} is unbounded but not last", i),
                    ));
                }
                Some(max) if is_last => {
                    return Err(self.table_error(
                        table,
                        format!("last bracket must be unbounded, found max {}", max),
                    ));
                }
                Some(max) if max < bracket.min => {
                    return Err(self.table_error(
                        table,
                        format!("bracket {} has max below min", i),
                    ));
                }
                _ => {}
            }

            if let (Some(max), Some(next)) = (bracket.max, brackets.get(i + 1)) {
                if next.min != max + CENT {
                    return Err(self.table_error(
                        table,
                        format!("brackets {} and {} are not contiguous", i, i + 1),
                    ));
                }
            }
        }

        Ok(())
    }

    fn validate_slices(&self) -> EngineResult<()> {
        let table = &self.social_security.name;
        let slices = &self.social_security.slices;

        let first = slices
            .first()
            .ok_or_else(|| self.table_error(table, "slice table is empty"))?;
        if !first.min.is_zero() {
            return Err(self.table_error(table, "first slice must start at 0"));
        }

        for (i, slice) in slices.iter().enumerate() {
            if slice.rate < Decimal::ZERO {
                return Err(self.table_error(table, format!("slice {} has a negative rate", i)));
            }
            if slice.max <= slice.min {
                return Err(self.table_error(table, format!("slice {} has max below min", i)));
            }
            if let Some(next) = slices.get(i + 1) {
                if next.min != slice.max + CENT {
                    return Err(self.table_error(
                        table,
                        format!("slices {} and {} are not contiguous", i, i + 1),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Returns the contribution ceiling (the last slice's upper bound).
    pub fn contribution_ceiling(&self) -> Option<Decimal> {
        self.social_security.slices.last().map(|s| s.max)
    }
}

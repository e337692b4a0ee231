//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading per-country
//! payroll configurations from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::CountryCode;

use super::types::CountryConfig;

/// Loads and provides access to country payroll configuration.
///
/// The `ConfigLoader` reads one YAML file per country from a directory
/// and provides methods to query the loaded configurations. Every file is
/// validated on load; a malformed bracket or slice table fails the whole
/// load.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// └── countries/
///     ├── br.yaml   # Brazil
///     ├── mx.yaml   # Mexico
///     └── ar.yaml   # Argentina
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::CountryCode;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let brazil = loader.country(CountryCode::Br).unwrap();
/// println!("Currency: {}", brazil.country.currency);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    countries: HashMap<CountryCode, CountryConfig>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The `countries` directory is missing or contains no YAML files
    /// - Any file contains invalid YAML
    /// - Any country's tax tables fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let countries_dir = path.as_ref().join("countries");
        let countries_dir_str = countries_dir.display().to_string();

        if !countries_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: countries_dir_str,
            });
        }

        let entries = fs::read_dir(&countries_dir).map_err(|_| EngineError::ConfigNotFound {
            path: countries_dir_str.clone(),
        })?;

        let mut countries = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: countries_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let config = Self::load_yaml::<CountryConfig>(&path)?;
                config.validate()?;
                countries.insert(config.country.code, config);
            }
        }

        if countries.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no country files found)", countries_dir_str),
            });
        }

        Ok(Self { countries })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Gets the configuration for a country.
    ///
    /// # Arguments
    ///
    /// * `code` - The country code (e.g., `CountryCode::Br`)
    ///
    /// # Returns
    ///
    /// Returns the configuration if loaded, or `UnsupportedCountry` error.
    pub fn country(&self, code: CountryCode) -> EngineResult<&CountryConfig> {
        self.countries
            .get(&code)
            .ok_or_else(|| EngineError::UnsupportedCountry {
                code: code.to_string(),
            })
    }

    /// Returns the codes of all loaded countries, sorted alphabetically.
    pub fn supported_countries(&self) -> Vec<CountryCode> {
        let mut codes: Vec<CountryCode> = self.countries.keys().copied().collect();
        codes.sort_by_key(|c| c.as_str());
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BenefitFormula;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(
            loader.supported_countries(),
            vec![CountryCode::Ar, CountryCode::Br, CountryCode::Mx]
        );
    }

    #[test]
    fn test_brazil_metadata_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let brazil = loader.country(CountryCode::Br).unwrap();

        assert_eq!(brazil.country.name, "Brazil");
        assert_eq!(brazil.country.currency, "BRL");
        assert_eq!(brazil.country.locale, "pt-BR");
        assert_eq!(brazil.country.timezone, "America/Sao_Paulo");
    }

    #[test]
    fn test_brazil_irrf_table_shape() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let brazil = loader.country(CountryCode::Br).unwrap();

        assert_eq!(brazil.income_tax.name, "IRRF");
        assert_eq!(brazil.income_tax.brackets.len(), 5);
        assert_eq!(brazil.income_tax.dependent_deduction, Some(dec("189.59")));
        assert!(brazil.income_tax.brackets.last().unwrap().max.is_none());
    }

    #[test]
    fn test_brazil_inss_ceiling() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let brazil = loader.country(CountryCode::Br).unwrap();

        assert_eq!(brazil.social_security.name, "INSS");
        assert_eq!(brazil.contribution_ceiling(), Some(dec("7786.02")));
    }

    #[test]
    fn test_brazil_fgts_benefit_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let brazil = loader.country(CountryCode::Br).unwrap();

        let fgts = brazil
            .benefits
            .iter()
            .find(|b| b.code == "fgts")
            .expect("FGTS benefit missing");
        assert!(fgts.employer_funded);
        assert_eq!(fgts.formula, BenefitFormula::Rate { rate: dec("0.08") });
    }

    #[test]
    fn test_mexico_isr_table_matches_published_values() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let mexico = loader.country(CountryCode::Mx).unwrap();

        assert_eq!(mexico.income_tax.name, "ISR");
        let second = &mexico.income_tax.brackets[1];
        assert_eq!(second.min, dec("7735.01"));
        assert_eq!(second.max, Some(dec("65651.07")));
        assert_eq!(second.fixed, dec("148.51"));
    }

    #[test]
    fn test_argentina_regulations_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let argentina = loader.country(CountryCode::Ar).unwrap();

        assert_eq!(argentina.regulations.min_vacation_days, 14);
        assert_eq!(argentina.regulations.max_weekly_hours, dec("48"));
        assert!(argentina.regulations.year_end_bonus_required);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("countries"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}

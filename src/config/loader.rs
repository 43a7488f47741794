//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{BonusRule, CapRule, OvertimeRule, PayrollPolicy, PolicyMetadata};

/// Loads and provides access to payroll policy configuration.
///
/// The `ConfigLoader` reads a YAML policy file from a directory and
/// provides methods to query the individual pay rules.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// └── policy.yaml   # Policy metadata, overtime, bonus, and cap rules
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Overtime threshold: {} hours", loader.overtime().weekly_threshold_hours);
/// println!("Cap: ${}", loader.cap().amount);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PayrollPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The policy file is missing
    /// - The policy file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<PayrollPolicy>(&policy_path)?;
        Ok(Self { policy })
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

    /// Returns the complete payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.policy.policy
    }

    /// Returns the overtime rule.
    pub fn overtime(&self) -> &OvertimeRule {
        &self.policy.overtime
    }

    /// Returns the punctuality bonus rule.
    pub fn bonus(&self) -> &BonusRule {
        &self.policy.punctuality_bonus
    }

    /// Returns the authorization cap rule.
    pub fn cap(&self) -> &CapRule {
        &self.policy.authorization_cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/payroll"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "WEEKLY-STD");
        assert_eq!(loader.metadata().name, "Standard Weekly Payroll Policy");
    }

    #[test]
    fn test_overtime_rule_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.overtime().weekly_threshold_hours, dec("40"));
        assert_eq!(loader.overtime().multiplier, dec("1.5"));
    }

    #[test]
    fn test_bonus_rule_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.bonus().weekly_threshold_hours, dec("38"));
        assert_eq!(loader.bonus().amount, dec("500"));
    }

    #[test]
    fn test_cap_rule_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.cap().amount, dec("20000"));
    }

    #[test]
    fn test_thresholds_are_asymmetric() {
        // The bonus threshold (38) and overtime threshold (40) are distinct
        // policies evaluated independently.
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert!(loader.bonus().weekly_threshold_hours < loader.overtime().weekly_threshold_hours);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_policy_metadata_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.metadata().code, "WEEKLY-STD");
        assert_eq!(loader.metadata().version, "2026-01-01");
    }
}

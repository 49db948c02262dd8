//! Configuration system for RegCap.
//!
//! Load regulatory minimums and the set of enabled constraints from TOML
//! or YAML files, so threshold changes need no code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use regcap_config::CapitalConfig;
//! use regcap_core::{CapitalConstraint, CapitalTier};
//!
//! let config = CapitalConfig::from_toml_str(r#"
//!     constraints = ["srwa_cet1", "lev_t1"]
//!
//!     [minimums]
//!     standardized = [0.045, 0.06, 0.08, 0.18]
//!     advanced = [0.045, 0.06, 0.08, 0.18]
//!     leverage = [0.03, 0.04]
//! "#).unwrap();
//!
//! assert_eq!(config.minimums.leverage.get(CapitalTier::Tlac), None);
//! assert_eq!(
//!     config.enabled_constraints(),
//!     vec![CapitalConstraint::SRWA_CET1, CapitalConstraint::LEV_T1]
//! );
//! ```

use std::collections::HashSet;
use std::path::Path;

use regcap_core::{CapitalConstraint, CapitalTier, RatioFamily, RegCapError, RegulatoryMinimums};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Core(#[from] RegCapError),
}

/// Capital constraint configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CapitalConfig {
    /// Enabled constraints, in evaluation order.
    ///
    /// When absent, every constraint with a configured threshold is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<CapitalConstraint>>,

    /// Minimum ratios per family.
    pub minimums: RegulatoryMinimums,
}

impl CapitalConfig {
    /// Creates a configuration enabling every configured constraint.
    pub fn new(minimums: RegulatoryMinimums) -> Self {
        Self {
            constraints: None,
            minimums,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the regulatory minimums.
    pub fn with_minimums(mut self, minimums: RegulatoryMinimums) -> Self {
        self.minimums = minimums;
        self
    }

    /// Appends an enabled constraint.
    ///
    /// The first call switches the configuration from "all configured" to
    /// an explicit list.
    pub fn with_constraint(mut self, constraint: CapitalConstraint) -> Self {
        self.constraints.get_or_insert_with(Vec::new).push(constraint);
        self
    }

    /// Checks thresholds and the enabled constraint list.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Invalid`] if a threshold is not a finite ratio in
    ///   `[0, 1]` or a constraint is listed twice.
    /// - [`ConfigError::Core`] if a listed constraint has no threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for family in RatioFamily::ALL {
            let thresholds = self.minimums.for_family(family);
            for tier in CapitalTier::ALL {
                if let Some(value) = thresholds.get(tier) {
                    if !(0.0..=1.0).contains(&value) {
                        return Err(ConfigError::Invalid(format!(
                            "{family} {tier} minimum {value} is not a ratio in [0, 1]"
                        )));
                    }
                }
            }
        }

        if let Some(constraints) = &self.constraints {
            let mut seen = HashSet::new();
            for constraint in constraints {
                if !seen.insert(*constraint) {
                    return Err(ConfigError::Invalid(format!(
                        "constraint {constraint} listed more than once"
                    )));
                }
                self.minimums.require(constraint.family, constraint.tier)?;
            }
        }
        Ok(())
    }

    /// Returns the enabled constraints in evaluation order.
    pub fn enabled_constraints(&self) -> Vec<CapitalConstraint> {
        match &self.constraints {
            Some(constraints) => constraints.clone(),
            None => CapitalConstraint::ALL
                .into_iter()
                .filter(|c| self.minimums.for_family(c.family).get(c.tier).is_some())
                .collect(),
        }
    }
}

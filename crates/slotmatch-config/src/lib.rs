//! Configuration system for slotmatch.
//!
//! Load matching configuration from TOML or YAML to control proposal
//! order, validation strictness and regression checks without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use slotmatch_config::{MatchConfig, ProposalOrder, ValidationMode};
//!
//! let config = MatchConfig::from_toml_str(r#"
//!     proposal_order = "shuffled"
//!     random_seed = 7
//!     validation = "strict"
//!
//!     [[regression]]
//!     slot = "C1970"
//!     expected_member_sum = 28762
//! "#).unwrap();
//!
//! assert_eq!(config.proposal_order, ProposalOrder::Shuffled);
//! assert_eq!(config.validation, ValidationMode::Strict);
//! assert_eq!(config.regression.len(), 1);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use slotmatch_config::MatchConfig;
//!
//! let config = MatchConfig::load("slotmatch.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

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
}

/// Main matching configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchConfig {
    /// Order in which applicants make their first proposal.
    #[serde(default)]
    pub proposal_order: ProposalOrder,

    /// Seed for the shuffled proposal order.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// What to do with stability diagnostics after matching.
    #[serde(default)]
    pub validation: ValidationMode,

    /// Expected per-slot checksums, verified after matching.
    #[serde(default)]
    pub regression: Vec<RegressionCheck>,
}

impl MatchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML or YAML file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or fails
    /// [`MatchConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the proposal order.
    pub fn with_proposal_order(mut self, order: ProposalOrder) -> Self {
        self.proposal_order = order;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the validation mode.
    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Adds a regression check.
    pub fn with_regression(mut self, check: RegressionCheck) -> Self {
        self.regression.push(check);
        self
    }

    /// Checks values that parse but cannot be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotmatch_config::{MatchConfig, ProposalOrder};
    ///
    /// let config = MatchConfig::new().with_proposal_order(ProposalOrder::Shuffled);
    /// assert!(config.validate().is_err());
    /// assert!(config.with_random_seed(3).validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.proposal_order == ProposalOrder::Shuffled && self.random_seed.is_none() {
            return Err(ConfigError::Invalid(
                "shuffled proposal order requires random_seed".to_string(),
            ));
        }
        if let Some(check) = self.regression.iter().find(|c| c.slot.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "regression check with empty slot name (expected sum {})",
                check.expected_member_sum
            )));
        }
        Ok(())
    }
}

/// Order in which applicants make their first proposal.
///
/// Any fixed order yields a locally stable matching; different orders can
/// yield different ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalOrder {
    /// Lexicographic by applicant name.
    #[default]
    Name,

    /// Order in which applicants were declared.
    Input,

    /// Seeded permutation of the declaration order.
    Shuffled,
}

/// Handling of stability diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Skip the validator entirely.
    Off,

    /// Run the validator and report violations without failing.
    #[default]
    Report,

    /// Run the validator and fail if anything is reported.
    Strict,
}

impl ValidationMode {
    /// Returns true if the validator should run.
    pub fn is_enabled(self) -> bool {
        self != ValidationMode::Off
    }
}

/// Expected sum of the derived ids of the applicants placed in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RegressionCheck {
    /// Slot name.
    pub slot: String,

    /// Expected sum of member ids.
    pub expected_member_sum: u64,
}

impl RegressionCheck {
    pub fn new(slot: impl Into<String>, expected_member_sum: u64) -> Self {
        RegressionCheck {
            slot: slot.into(),
            expected_member_sum,
        }
    }
}

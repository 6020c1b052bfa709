//! Configuration for planforge.
//!
//! Load the scoring session and list selector settings from TOML or YAML
//! files without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use planforge_config::{EngineConfig, ScoreType, SelectionOrder};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [score]
//!     score_type = "hard_medium_soft"
//!     constraint_match_enabled = true
//!
//!     [sub_list_selector]
//!     minimum_sub_list_size = 2
//!     maximum_sub_list_size = 4
//!
//!     [destination_selector]
//!     selection_order = "original"
//! "#).unwrap();
//!
//! assert_eq!(config.score.score_type, ScoreType::HardMediumSoft);
//! assert_eq!(config.sub_list_selector.maximum_sub_list_size, 4);
//! assert_eq!(config.destination_selector.selection_order, SelectionOrder::Original);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use planforge_config::EngineConfig;
//!
//! let config = EngineConfig::load("planforge.toml").unwrap_or_default();
//! assert_eq!(config.sub_list_selector.minimum_sub_list_size, 1);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use planforge_core::PlanforgeError;
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

impl From<ConfigError> for PlanforgeError {
    fn from(err: ConfigError) -> Self {
        PlanforgeError::Config(err.to_string())
    }
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Random seed for reproducible selection.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Score inliner session configuration.
    #[serde(default)]
    pub score: ScoreConfig,

    /// Random sub-list selector configuration.
    #[serde(default)]
    pub sub_list_selector: SubListSelectorConfig,

    /// Element destination selector configuration.
    #[serde(default)]
    pub destination_selector: DestinationSelectorConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
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

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the score configuration.
    pub fn with_score(mut self, score: ScoreConfig) -> Self {
        self.score = score;
        self
    }

    /// Sets the sub-list size bounds.
    pub fn with_sub_list_sizes(mut self, minimum: usize, maximum: usize) -> Self {
        self.sub_list_selector = SubListSelectorConfig {
            minimum_sub_list_size: minimum,
            maximum_sub_list_size: maximum,
        };
        self
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.score.validate()?;
        self.sub_list_selector.validate()
    }
}

/// The score representation of a scoring session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    Simple,
    #[default]
    HardMediumSoft,
    HardMediumSoftLong,
    HardMediumSoftDecimal,
    Bendable,
    BendableLong,
    BendableDecimal,
}

impl ScoreType {
    /// Returns true for the runtime-sized bendable representations.
    pub fn is_bendable(&self) -> bool {
        matches!(
            self,
            ScoreType::Bendable | ScoreType::BendableLong | ScoreType::BendableDecimal
        )
    }
}

/// Score inliner session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoreConfig {
    /// Score representation.
    #[serde(default)]
    pub score_type: ScoreType,

    /// Track constraint matches and indictments. Fixed for the session.
    #[serde(default)]
    pub constraint_match_enabled: bool,

    /// Hard level count; bendable score types only.
    #[serde(default)]
    pub bendable_hard_levels: Option<usize>,

    /// Soft level count; bendable score types only.
    #[serde(default)]
    pub bendable_soft_levels: Option<usize>,

    /// Constraint weight overrides by full constraint name, in score display form.
    #[serde(default)]
    pub constraint_weights: BTreeMap<String, String>,
}

impl ScoreConfig {
    pub fn new(score_type: ScoreType) -> Self {
        Self {
            score_type,
            ..Self::default()
        }
    }

    /// Sets the bendable level counts.
    pub fn with_bendable_levels(mut self, hard_levels: usize, soft_levels: usize) -> Self {
        self.bendable_hard_levels = Some(hard_levels);
        self.bendable_soft_levels = Some(soft_levels);
        self
    }

    pub fn with_constraint_match_enabled(mut self, enabled: bool) -> Self {
        self.constraint_match_enabled = enabled;
        self
    }

    /// Adds a constraint weight override.
    pub fn with_constraint_weight(
        mut self,
        constraint: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        self.constraint_weights
            .insert(constraint.into(), weight.into());
        self
    }

    /// Returns `(hard, soft)` level counts of a bendable score type.
    pub fn bendable_levels(&self) -> Option<(usize, usize)> {
        Some((self.bendable_hard_levels?, self.bendable_soft_levels?))
    }

    /// Iterates the constraint weight overrides as `(name, weight)` pairs.
    pub fn constraint_weight_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.constraint_weights
            .iter()
            .map(|(name, weight)| (name.as_str(), weight.as_str()))
    }

    /// Bendable score types need both level counts; other types must not set them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_levels =
            self.bendable_hard_levels.is_some() || self.bendable_soft_levels.is_some();
        if self.score_type.is_bendable() {
            if self.bendable_levels().is_none() {
                return Err(ConfigError::Invalid(format!(
                    "score type {:?} requires bendable_hard_levels and bendable_soft_levels",
                    self.score_type
                )));
            }
        } else if has_levels {
            return Err(ConfigError::Invalid(format!(
                "score type {:?} does not take bendable level counts",
                self.score_type
            )));
        }
        Ok(())
    }
}

/// Random sub-list selector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SubListSelectorConfig {
    /// Smallest sub-list length, at least 1.
    #[serde(default = "default_minimum_sub_list_size")]
    pub minimum_sub_list_size: usize,

    /// Largest sub-list length, unbounded by default.
    #[serde(default = "default_maximum_sub_list_size")]
    pub maximum_sub_list_size: usize,
}

fn default_minimum_sub_list_size() -> usize {
    1
}

fn default_maximum_sub_list_size() -> usize {
    usize::MAX
}

impl Default for SubListSelectorConfig {
    fn default() -> Self {
        Self {
            minimum_sub_list_size: default_minimum_sub_list_size(),
            maximum_sub_list_size: default_maximum_sub_list_size(),
        }
    }
}

impl SubListSelectorConfig {
    /// Requires `1 <= minimum <= maximum`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_sub_list_size < 1 {
            return Err(ConfigError::Invalid(format!(
                "minimum_sub_list_size ({}) must be at least 1",
                self.minimum_sub_list_size
            )));
        }
        if self.minimum_sub_list_size > self.maximum_sub_list_size {
            return Err(ConfigError::Invalid(format!(
                "minimum_sub_list_size ({}) must not exceed maximum_sub_list_size ({})",
                self.minimum_sub_list_size, self.maximum_sub_list_size
            )));
        }
        Ok(())
    }
}

/// Element destination selector configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DestinationSelectorConfig {
    #[serde(default)]
    pub selection_order: SelectionOrder,
}

/// Defines the order in which elements are selected from a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrder {
    /// Inherit the selection order from the parent configuration.
    ///
    /// With no parent order this resolves to `Random`.
    #[default]
    Inherit,

    /// Select elements in their original order, each exactly once.
    Original,

    /// Select elements randomly on every call; the same element may repeat
    /// and the selection never ends.
    Random,
}

impl SelectionOrder {
    /// Resolves the selection order by inheriting from a parent if necessary.
    ///
    /// The result is never `Inherit`.
    pub fn resolve(self, inherited: SelectionOrder) -> SelectionOrder {
        match self {
            SelectionOrder::Inherit => {
                if inherited == SelectionOrder::Inherit {
                    SelectionOrder::Random
                } else {
                    inherited
                }
            }
            other => other,
        }
    }

    /// Returns `true` if this selection order implies random selection.
    pub fn is_random(&self) -> bool {
        matches!(self, SelectionOrder::Random)
    }

    /// Converts from a boolean random selection flag.
    pub fn from_random_selection(random: bool) -> Self {
        if random {
            SelectionOrder::Random
        } else {
            SelectionOrder::Original
        }
    }
}

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use super::retry::RetryConfig;
use super::rubric::Rubric;
use super::thresholds::{InterpretationThresholds, LevelThresholds};
use crate::core::ConfigError;

/// Root configuration structure, read from `.awaremap.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AwaremapConfig {
    /// Level classification thresholds
    #[serde(default)]
    pub levels: LevelThresholds,

    /// Strength, weakness and recommendation cut-offs
    #[serde(default)]
    pub interpretation: InterpretationThresholds,

    /// Retry policy for the recommendation text generator
    #[serde(default)]
    pub retry: RetryConfig,

    /// Indicator catalog and answer scale
    #[serde(default)]
    pub rubric: Rubric,
}

impl AwaremapConfig {
    /// Validate every section, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rubric.validate()?;
        self.levels
            .validate()
            .map_err(|message| ConfigError::Thresholds {
                section: "levels",
                message,
            })?;
        self.interpretation
            .validate()
            .map_err(|message| ConfigError::Thresholds {
                section: "interpretation",
                message,
            })?;
        self.retry.validate().map_err(ConfigError::Retry)?;
        Ok(())
    }

    /// Render the configuration as a commented TOML document
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        let body = toml::to_string_pretty(self)?;
        Ok(format!(
            "# awaremap configuration\n#\n# Levels and interpretation cut-offs are percentages (0-100).\n# Every question id may belong to exactly one indicator.\n\n{body}"
        ))
    }
}

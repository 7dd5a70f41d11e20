use serde::{Deserialize, Serialize};

/// Lower bounds (inclusive, in percent) of each awareness level.
///
/// Anything below `needs_improvement` is classified as poor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelThresholds {
    #[serde(default = "default_very_good")]
    pub very_good: f64,

    #[serde(default = "default_good")]
    pub good: f64,

    #[serde(default = "default_needs_improvement")]
    pub needs_improvement: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            very_good: default_very_good(),
            good: default_good(),
            needs_improvement: default_needs_improvement(),
        }
    }
}

impl LevelThresholds {
    // Pure function: Thresholds must be strictly descending percentages
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("very_good", self.very_good),
            ("good", self.good),
            ("needs_improvement", self.needs_improvement),
        ] {
            validate_percentage(value, name)?;
        }
        if !(self.very_good > self.good && self.good > self.needs_improvement) {
            return Err(format!(
                "levels must be strictly descending (very_good {} > good {} > needs_improvement {})",
                self.very_good, self.good, self.needs_improvement
            ));
        }
        Ok(())
    }
}

fn default_very_good() -> f64 {
    80.0
}
fn default_good() -> f64 {
    50.0
}
fn default_needs_improvement() -> f64 {
    25.0
}

/// Percent cut-offs used when interpreting indicator scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationThresholds {
    /// Indicators at or above this percentage are strengths
    #[serde(default = "default_strength")]
    pub strength: f64,

    /// Indicators below this percentage are weaknesses
    #[serde(default = "default_weakness")]
    pub weakness: f64,

    /// Indicators below this percentage get a targeted recommendation
    #[serde(default = "default_recommend_below")]
    pub recommend_below: f64,
}

impl Default for InterpretationThresholds {
    fn default() -> Self {
        Self {
            strength: default_strength(),
            weakness: default_weakness(),
            recommend_below: default_recommend_below(),
        }
    }
}

impl InterpretationThresholds {
    pub fn validate(&self) -> Result<(), String> {
        validate_percentage(self.strength, "strength")?;
        validate_percentage(self.weakness, "weakness")?;
        validate_percentage(self.recommend_below, "recommend_below")?;
        if self.weakness > self.strength {
            return Err(format!(
                "weakness ({}) must not exceed strength ({})",
                self.weakness, self.strength
            ));
        }
        Ok(())
    }
}

fn default_strength() -> f64 {
    75.0
}
fn default_weakness() -> f64 {
    50.0
}
fn default_recommend_below() -> f64 {
    75.0
}

fn validate_percentage(value: f64, name: &str) -> Result<(), String> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} must be between 0 and 100, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels_are_valid() {
        let levels = LevelThresholds::default();
        assert_eq!(levels.very_good, 80.0);
        assert_eq!(levels.good, 50.0);
        assert_eq!(levels.needs_improvement, 25.0);
        assert!(levels.validate().is_ok());
    }

    #[test]
    fn test_levels_must_descend() {
        let levels = LevelThresholds {
            good: 80.0,
            ..Default::default()
        };
        assert!(levels.validate().unwrap_err().contains("descending"));
    }

    #[test]
    fn test_levels_must_be_percentages() {
        let levels = LevelThresholds {
            very_good: 120.0,
            ..Default::default()
        };
        assert!(levels.validate().is_err());

        let levels = LevelThresholds {
            needs_improvement: f64::NAN,
            ..Default::default()
        };
        assert!(levels.validate().is_err());
    }

    #[test]
    fn test_interpretation_defaults() {
        let thresholds = InterpretationThresholds::default();
        assert_eq!(thresholds.strength, 75.0);
        assert_eq!(thresholds.weakness, 50.0);
        assert_eq!(thresholds.recommend_below, 75.0);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_weakness_above_strength_rejected() {
        let thresholds = InterpretationThresholds {
            weakness: 90.0,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let levels: LevelThresholds = toml::from_str("good = 60.0").unwrap();
        assert_eq!(levels.good, 60.0);
        assert_eq!(levels.very_good, 80.0);
    }
}

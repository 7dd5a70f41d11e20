use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal classification of the overall percentage.
///
/// `Error` is not a classification outcome; it marks a fallback report
/// produced when evaluation itself failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwarenessLevel {
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Poor")]
    Poor,
    #[serde(rename = "Error")]
    Error,
}

impl AwarenessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AwarenessLevel::VeryGood => "Very Good",
            AwarenessLevel::Good => "Good",
            AwarenessLevel::NeedsImprovement => "Needs Improvement",
            AwarenessLevel::Poor => "Poor",
            AwarenessLevel::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AwarenessLevel::Error)
    }
}

impl fmt::Display for AwarenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

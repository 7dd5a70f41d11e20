//! Typed errors for each evaluation stage and for configuration loading.

use super::{Category, QuestionId};
use std::path::PathBuf;
use thiserror::Error;

/// Why one response entry was skipped by the parse stage.
///
/// Parse issues never fail an evaluation; they are collected so callers and
/// tests can see exactly which entries were ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIssue {
    #[error("'{key}' is not a question key (expected q<number>)")]
    InvalidKey { key: String },

    #[error("answer '{value}' for {key} is not an integer")]
    InvalidValue { key: String, value: String },

    #[error("answer {value} for {key} is outside {min}..={max}")]
    OutOfRange {
        key: String,
        value: i64,
        min: u8,
        max: u8,
    },

    #[error("question {question} ({key}) is not part of the rubric")]
    UnknownQuestion { key: String, question: QuestionId },

    #[error("question {question} was already answered, ignoring {key}")]
    DuplicateAnswer { key: String, question: QuestionId },
}

impl ParseIssue {
    /// Raw response key the issue refers to
    pub fn key(&self) -> &str {
        match self {
            ParseIssue::InvalidKey { key }
            | ParseIssue::InvalidValue { key, .. }
            | ParseIssue::OutOfRange { key, .. }
            | ParseIssue::UnknownQuestion { key, .. }
            | ParseIssue::DuplicateAnswer { key, .. } => key,
        }
    }
}

/// Structural problems in a rubric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RubricError {
    #[error("{0} category has no indicators")]
    EmptyCategory(Category),

    #[error("indicator '{name}' has no questions")]
    EmptyIndicator { name: String },

    #[error("indicator key '{key}' is used more than once")]
    DuplicateIndicatorKey { key: String },

    #[error("indicator name '{name}' is used more than once")]
    DuplicateIndicatorName { name: String },

    #[error("question {question} is assigned to both '{first}' and '{second}'")]
    DuplicateQuestion {
        question: QuestionId,
        first: String,
        second: String,
    },

    #[error("indicator '{name}' lists question 0 (question ids start at 1)")]
    ZeroQuestion { name: String },

    #[error("invalid answer scale {min}..={max}")]
    InvalidScale { min: u8, max: u8 },
}

/// Failures of the aggregation stage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregationError {
    #[error("{0} category has no indicators to average")]
    EmptyCategory(Category),

    #[error("{scope} score is not finite ({value})")]
    NonFinite { scope: String, value: f64 },
}

/// Why an evaluation could not produce a real report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("invalid rubric: {0}")]
    InvalidRubric(#[from] RubricError),

    #[error("aggregation failed: {0}")]
    Aggregation(#[from] AggregationError),
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rubric: {0}")]
    Rubric(#[from] RubricError),

    #[error("invalid {section} thresholds: {message}")]
    Thresholds {
        section: &'static str,
        message: String,
    },

    #[error("invalid retry settings: {0}")]
    Retry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue_key() {
        let issue = ParseIssue::OutOfRange {
            key: "q3".into(),
            value: 9,
            min: 1,
            max: 4,
        };
        assert_eq!(issue.key(), "q3");
        assert_eq!(issue.to_string(), "answer 9 for q3 is outside 1..=4");
    }

    #[test]
    fn test_evaluation_error_from_stage_errors() {
        let err: EvaluationError = RubricError::EmptyCategory(Category::Social).into();
        assert!(matches!(err, EvaluationError::InvalidRubric(_)));
        assert_eq!(err.to_string(), "invalid rubric: Social category has no indicators");

        let err: EvaluationError = AggregationError::EmptyCategory(Category::Technical).into();
        assert!(matches!(err, EvaluationError::Aggregation(_)));
    }
}

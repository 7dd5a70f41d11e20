//! Scoring engine for a two-category cybersecurity awareness questionnaire.
//!
//! A submission is a map of `q<N>` keys to Likert answers. The [`Evaluator`]
//! parses it against a [`Rubric`], averages answers per indicator and per
//! category, and classifies the overall percentage into an
//! [`AwarenessLevel`]. Evaluation is total: failures yield
//! [`ScoreReport::fallback`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod interpretation;
pub mod io;
pub mod narrative;

pub use crate::config::{
    load_config, AwaremapConfig, IndicatorDef, InterpretationThresholds, LevelThresholds,
    LikertScale, RetryConfig, Rubric,
};

pub use crate::core::{
    AggregationError, AwarenessLevel, Category, CategoryScore, ConfigError, EvaluationError,
    IndicatorId, IndicatorScore, IndicatorScores, OverallScore, ParseIssue, QuestionId,
    RubricError, ScoreReport,
};

pub use crate::evaluation::{classify, evaluate, Evaluation, Evaluator, ResponseSet};

pub use crate::interpretation::{interpret, recommend, Interpretation, Recommendations};

pub use crate::io::output::{create_writer, Advice, OutputFormat, OutputWriter};

pub use crate::narrative::{
    generate_with_retry, NarrativeRequest, RespondentProfile, TextGenerator, FALLBACK_NARRATIVE,
};

//! Questionnaire evaluation pipeline.
//!
//! Raw `q<N>` form entries flow through three pure stages:
//!
//! 1. [`ResponseSet::parse`] keeps valid answers and records every skipped entry
//! 2. [`aggregate`] builds the nested [`ScoreReport`]
//! 3. [`classify`] maps the overall percentage to an [`AwarenessLevel`]
//!
//! [`Evaluator::evaluate`] never fails: any stage error is logged and the
//! all-zero fallback report with level `Error` is returned instead.
//!
//! [`AwarenessLevel`]: crate::core::AwarenessLevel

mod aggregate;
mod classify;
mod parse;

pub use aggregate::{aggregate, score_indicator};
pub use classify::classify;
pub use parse::{parse_question_key, ResponseSet};

use crate::config::{AwaremapConfig, LevelThresholds, Rubric};
use crate::core::{EvaluationError, ParseIssue, ScoreReport};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug_span, error};

static STANDARD_RUBRIC: Lazy<Arc<Rubric>> = Lazy::new(|| Arc::new(Rubric::standard()));

/// Successful evaluation: the report plus the answers it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub report: ScoreReport,
    pub responses: ResponseSet,
}

impl Evaluation {
    /// Fallback report with no answers.
    pub fn fallback() -> Self {
        Self {
            report: ScoreReport::fallback(),
            responses: ResponseSet::default(),
        }
    }

    pub fn issues(&self) -> &[ParseIssue] {
        self.responses.issues()
    }
}

/// Scores submissions against an injected rubric and level thresholds.
#[derive(Debug, Clone)]
pub struct Evaluator {
    rubric: Arc<Rubric>,
    levels: LevelThresholds,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl Evaluator {
    pub fn new(rubric: impl Into<Arc<Rubric>>, levels: LevelThresholds) -> Self {
        Self {
            rubric: rubric.into(),
            levels,
        }
    }

    /// Standard 43-question rubric with default thresholds
    pub fn standard() -> Self {
        Self::new(Arc::clone(&*STANDARD_RUBRIC), LevelThresholds::default())
    }

    pub fn from_config(config: &AwaremapConfig) -> Self {
        Self::new(config.rubric.clone(), config.levels.clone())
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn levels(&self) -> &LevelThresholds {
        &self.levels
    }

    /// Run the pipeline, surfacing stage errors.
    pub fn try_evaluate<I, K, V>(&self, entries: I) -> Result<Evaluation, EvaluationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let _span = debug_span!("evaluate", questions = self.rubric.question_count()).entered();

        self.rubric.validate()?;
        let responses = ResponseSet::parse(entries, &self.rubric);
        let report = aggregate(&responses, &self.rubric, &self.levels)?;

        Ok(Evaluation { report, responses })
    }

    /// Total evaluation: falls back to [`ScoreReport::fallback`] on any error.
    pub fn evaluate<I, K, V>(&self, entries: I) -> ScoreReport
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.evaluate_detailed(entries).report
    }

    /// Total evaluation that keeps the parsed answers.
    pub fn evaluate_detailed<I, K, V>(&self, entries: I) -> Evaluation
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.try_evaluate(entries).unwrap_or_else(|e| {
            error!(error = %e, "Evaluation failed, returning fallback report");
            Evaluation::fallback()
        })
    }

    /// Evaluate independent submissions in parallel; output order matches input.
    pub fn evaluate_batch<M>(&self, submissions: &[M]) -> Vec<ScoreReport>
    where
        M: Sync,
        for<'a> &'a M: IntoIterator<Item = (&'a String, &'a String)>,
    {
        submissions.par_iter().map(|m| self.evaluate(m)).collect()
    }
}

/// Evaluate one submission with the standard rubric.
pub fn evaluate<I, K, V>(entries: I) -> ScoreReport
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    Evaluator::standard().evaluate(entries)
}

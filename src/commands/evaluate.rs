use super::{open_output, resolve_config};
use crate::cli;
use crate::config::AwaremapConfig;
use crate::core::ParseIssue;
use crate::evaluation::{Evaluation, Evaluator};
use crate::interpretation::{interpret, recommend};
use crate::io::{self, create_writer, Advice};
use crate::narrative::{generate_with_retry, CommandGenerator, NarrativeRequest, RespondentProfile};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub struct EvaluateConfig {
    pub responses: PathBuf,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub batch: bool,
    pub no_advice: bool,
    pub narrator: Option<String>,
}

/// Raw form fields of one submission, values as strings.
pub type Submission = BTreeMap<String, String>;

pub fn evaluate_responses(config: EvaluateConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let evaluator = Evaluator::from_config(&settings);
    let input = io::read_input(&config.responses)?;

    if config.batch {
        let submissions = parse_batch(&input)?;
        info!(count = submissions.len(), "Evaluating batch");
        let reports = evaluator.evaluate_batch(&submissions);
        let out = open_output(config.output.as_deref())?;
        return create_writer(config.format.into(), out).write_batch(&reports);
    }

    let submission = parse_submission(&input)?;
    let evaluation = evaluator.evaluate_detailed(&submission);
    log_issues(evaluation.issues());

    let report = &evaluation.report;
    let (interpretation, recommendations, narrative) = if config.no_advice {
        (None, None, None)
    } else {
        let narrative = match config.narrator.as_deref() {
            Some(line) => Some(narrate(line, &submission, &evaluation, &settings)?),
            None => None,
        };
        (
            Some(interpret(report, &settings.interpretation)),
            Some(recommend(report, &settings.interpretation)),
            narrative,
        )
    };

    let advice = Advice {
        interpretation: interpretation.as_ref(),
        recommendations: recommendations.as_ref(),
        narrative: narrative.as_deref(),
    };
    let out = open_output(config.output.as_deref())?;
    create_writer(config.format.into(), out).write_report(report, &advice)
}

fn narrate(
    command_line: &str,
    submission: &Submission,
    evaluation: &Evaluation,
    settings: &AwaremapConfig,
) -> Result<String> {
    let generator = CommandGenerator::from_command_line(command_line)
        .context("--narrator needs a program to run")?;
    let request = NarrativeRequest::new(
        profile_from(submission),
        &evaluation.report,
        evaluation.responses.answers(),
        &settings.rubric.scale,
        &settings.interpretation,
    );
    Ok(generate_with_retry(&generator, &request, &settings.retry))
}

/// Profile fields travel in the same form as the answers.
pub fn profile_from(submission: &Submission) -> RespondentProfile {
    let field = |name: &str| submission.get(name).cloned().unwrap_or_default();
    RespondentProfile {
        education: field("education"),
        domicile: field("domicile"),
        gender: field("gender"),
    }
}

fn log_issues(issues: &[ParseIssue]) {
    for issue in issues {
        match issue {
            // Non-question fields such as the respondent profile
            ParseIssue::InvalidKey { .. } => debug!(%issue, "Ignored form field"),
            _ => warn!(%issue, "Skipped response"),
        }
    }
}

pub fn parse_submission(input: &str) -> Result<Submission> {
    let value: Value = serde_json::from_str(input).context("Responses are not valid JSON")?;
    match value {
        Value::Object(map) => Ok(stringify_values(map)),
        _ => anyhow::bail!("Responses must be a JSON object of question ids to answers"),
    }
}

pub fn parse_batch(input: &str) -> Result<Vec<Submission>> {
    let value: Value = serde_json::from_str(input).context("Batch input is not valid JSON")?;
    let Value::Array(items) = value else {
        anyhow::bail!("Batch input must be a JSON array of response objects");
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(stringify_values(map)),
            _ => anyhow::bail!("Batch entry {} is not a JSON object", i + 1),
        })
        .collect()
}

// Form values arrive as strings; numbers are accepted too.
fn stringify_values(map: Map<String, Value>) -> Submission {
    map.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect()
}

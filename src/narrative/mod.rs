//! Personalized advice from an external text generator.
//!
//! The generator is a black box behind [`TextGenerator`]. Building the prompt
//! is pure; calling the generator goes through [`generate_with_retry`], which
//! never fails and degrades to [`FALLBACK_NARRATIVE`].

mod command;

pub use command::CommandGenerator;

use crate::config::{InterpretationThresholds, LikertScale, RetryConfig};
use crate::core::{QuestionId, ScoreReport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{error, info, warn};

/// Returned when the generator keeps failing.
pub const FALLBACK_NARRATIVE: &str =
    "Sorry, we could not generate recommendations at this time. Please try again later.";

const SYSTEM_ROLE: &str = "You are a cybersecurity expert giving recommendations that are \
specific to the respondent's questionnaire answers. Focus on the areas with low scores and \
give practical solutions that fit the respondent's background.";

/// Non-identifying respondent details passed to the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentProfile {
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub domicile: String,
    #[serde(default)]
    pub gender: String,
}

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("text generator unavailable: {0}")]
    Unavailable(String),

    #[error("text generator failed: {0}")]
    Failed(String),

    #[error("text generator returned no text")]
    Empty,
}

/// A black-box text generator.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError>;

    /// Generate with a per-call time limit. Generators that cannot be
    /// interrupted ignore the limit.
    fn generate_within(&self, prompt: &str, _timeout: Duration) -> Result<String, NarrativeError> {
        self.generate(prompt)
    }
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String, NarrativeError>,
{
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        self(prompt)
    }
}

/// Prompt material for one respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeRequest {
    profile: RespondentProfile,
    overall: String,
    weak_areas: Vec<String>,
    answers: Vec<(QuestionId, String)>,
}

impl NarrativeRequest {
    pub fn new(
        profile: RespondentProfile,
        report: &ScoreReport,
        answers: &BTreeMap<QuestionId, u8>,
        scale: &LikertScale,
        thresholds: &InterpretationThresholds,
    ) -> Self {
        let overall = format!(
            "{} ({:.1}%), technical {:.1}%, social {:.1}%",
            report.overall.level,
            report.overall.percentage,
            report.technical.percentage,
            report.social.percentage
        );

        let weak_areas = report
            .indicators()
            .filter(|(_, score)| score.percentage < thresholds.weakness)
            .map(|(category, score)| format!("{} ({category}, {:.1}%)", score.name, score.percentage))
            .collect();

        let answers = answers
            .iter()
            .map(|(&q, &value)| {
                let label = scale
                    .label(value)
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string());
                (q, label)
            })
            .collect();

        Self {
            profile,
            overall,
            weak_areas,
            answers,
        }
    }

    pub fn prompt(&self) -> String {
        let mut prompt = String::new();
        let p = &self.profile;

        writeln!(prompt, "{SYSTEM_ROLE}\n").unwrap();
        writeln!(
            prompt,
            "As a cybersecurity expert, analyze the following respondent's profile and \
             questionnaire answers.\n"
        )
        .unwrap();
        writeln!(prompt, "Respondent profile:").unwrap();
        writeln!(prompt, "- Education: {}", or_unknown(&p.education)).unwrap();
        writeln!(prompt, "- Location: {}", or_unknown(&p.domicile)).unwrap();
        writeln!(prompt, "- Gender: {}\n", or_unknown(&p.gender)).unwrap();

        writeln!(prompt, "Overall result: {}", self.overall).unwrap();
        if !self.weak_areas.is_empty() {
            writeln!(prompt, "Weak areas: {}", self.weak_areas.join("; ")).unwrap();
        }

        writeln!(prompt, "\nQuestionnaire answers:").unwrap();
        if self.answers.is_empty() {
            writeln!(prompt, "- (no valid answers)").unwrap();
        }
        for (q, label) in &self.answers {
            writeln!(prompt, "- Question {q}: {label}").unwrap();
        }

        prompt.push_str(INSTRUCTIONS);
        prompt
    }
}

const INSTRUCTIONS: &str = "
Recommendation format:

1. PRIORITY ACTIONS (based on weak answers)
   - Focus on 2-3 areas answered \"Disagree\" or \"Strongly Disagree\"
   - Give concrete steps to improve each area

2. SECURITY HARDENING (based on the profile)
   - Give 3-4 security practices suited to the respondent's education level

3. TRAINING & DEVELOPMENT
   - Recommend learning resources suited to the education level, the weak areas and the location

4. TOOLS & RESOURCES
   - Recommend free or affordable tools that are easy to use and available in the location
   - Give step-by-step usage guidance

Every recommendation must relate directly to the questionnaire answers.
";

fn or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        "not provided"
    } else {
        value
    }
}

/// Call the generator under `retry`, sleeping between attempts.
pub fn generate_with_retry(
    generator: &dyn TextGenerator,
    request: &NarrativeRequest,
    retry: &RetryConfig,
) -> String {
    generate_with_retry_using(generator, request, retry, std::thread::sleep)
}

/// Like [`generate_with_retry`] with an injectable sleeper.
pub fn generate_with_retry_using(
    generator: &dyn TextGenerator,
    request: &NarrativeRequest,
    retry: &RetryConfig,
    mut sleep: impl FnMut(Duration),
) -> String {
    let prompt = request.prompt();
    let started = Instant::now();
    let mut failed = 0u32;

    loop {
        info!(attempt = failed + 1, max = retry.max_attempts, "Calling text generator");
        let outcome = generator.generate_within(&prompt, retry.timeout()).and_then(|text| {
            if text.trim().is_empty() {
                Err(NarrativeError::Empty)
            } else {
                Ok(text)
            }
        });

        match outcome {
            Ok(text) => return text,
            Err(e) => {
                failed += 1;
                warn!(attempt = failed, error = %e, "Text generator call failed");
            }
        }

        if !retry.should_retry(failed, started.elapsed()) {
            error!(attempts = failed, "Giving up on text generator, using fallback");
            return FALLBACK_NARRATIVE.to_string();
        }

        let delay = retry.delay_for_attempt(failed);
        info!(delay_ms = delay.as_millis() as u64, "Retrying text generator");
        sleep(delay);
    }
}

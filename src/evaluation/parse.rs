//! Parse stage: raw `q<N>` form entries to validated answers.

use crate::config::Rubric;
use crate::core::{ParseIssue, QuestionId};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Validated answers of one submission, plus every entry that was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    answers: BTreeMap<QuestionId, u8>,
    issues: Vec<ParseIssue>,
}

impl ResponseSet {
    /// Parse raw entries against a rubric.
    ///
    /// Entries are processed in (key, value) order, so the outcome never depends on
    /// the iteration order of the caller's map. When two keys name the same
    /// question (`q1` and `q01`), the first in that order wins.
    pub fn parse<I, K, V>(entries: I, rubric: &Rubric) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries: Vec<(K, V)> = entries.into_iter().collect();
        entries.sort_by(|a, b| {
            a.0.as_ref()
                .cmp(b.0.as_ref())
                .then_with(|| a.1.as_ref().cmp(b.1.as_ref()))
        });

        let known: HashSet<QuestionId> = rubric.question_ids().collect();
        let mut set = ResponseSet::default();

        for (key, value) in &entries {
            let key = key.as_ref();
            let outcome = parse_entry(key, value.as_ref(), rubric, &known).and_then(|(q, v)| {
                if set.answers.contains_key(&q) {
                    Err(ParseIssue::DuplicateAnswer {
                        key: key.to_string(),
                        question: q,
                    })
                } else {
                    Ok((q, v))
                }
            });

            match outcome {
                Ok((question, value)) => {
                    set.answers.insert(question, value);
                }
                Err(issue) => {
                    debug!(%issue, "Skipping response entry");
                    set.issues.push(issue);
                }
            }
        }

        set
    }

    pub fn answer(&self, question: QuestionId) -> Option<u8> {
        self.answers.get(&question).copied()
    }

    pub fn answers(&self) -> &BTreeMap<QuestionId, u8> {
        &self.answers
    }

    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Number of valid answers
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Parse a `q<digits>` key into its question id
pub fn parse_question_key(key: &str) -> Option<QuestionId> {
    let digits = key.strip_prefix('q')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_entry(
    key: &str,
    value: &str,
    rubric: &Rubric,
    known: &HashSet<QuestionId>,
) -> Result<(QuestionId, u8), ParseIssue> {
    let question = parse_question_key(key).ok_or_else(|| ParseIssue::InvalidKey {
        key: key.to_string(),
    })?;

    if !known.contains(&question) {
        return Err(ParseIssue::UnknownQuestion {
            key: key.to_string(),
            question,
        });
    }

    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| ParseIssue::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })?;

    let out_of_range = || ParseIssue::OutOfRange {
        key: key.to_string(),
        value: parsed,
        min: rubric.scale.min,
        max: rubric.scale.max,
    };
    if !rubric.scale.contains(parsed) {
        return Err(out_of_range());
    }
    let answer = u8::try_from(parsed).map_err(|_| out_of_range())?;

    Ok((question, answer))
}

//! Indicator catalog and answer scale.
//!
//! A [`Rubric`] maps every question id to exactly one indicator and every
//! indicator to one of the two categories. The standard rubric is the fixed
//! 43-question catalog; alternate rubrics can be supplied through
//! `.awaremap.toml`:
//!
//! ```toml
//! [rubric.scale]
//! min = 1
//! max = 4
//!
//! [[rubric.technical]]
//! key = "passwords"
//! name = "Passwords"
//! questions = [1, 2, 3]
//! ```

use crate::core::{Category, IndicatorId, QuestionId, RubricError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Likert answer scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikertScale {
    /// Lowest valid answer (default: 1)
    #[serde(default = "default_scale_min")]
    pub min: u8,

    /// Highest valid answer, also the divisor for percentages (default: 4)
    #[serde(default = "default_scale_max")]
    pub max: u8,

    /// Labels for each answer value, starting at `min`
    #[serde(default = "default_scale_labels")]
    pub labels: Vec<String>,
}

impl Default for LikertScale {
    fn default() -> Self {
        Self {
            min: default_scale_min(),
            max: default_scale_max(),
            labels: default_scale_labels(),
        }
    }
}

fn default_scale_min() -> u8 {
    1
}

fn default_scale_max() -> u8 {
    4
}

fn default_scale_labels() -> Vec<String> {
    ["Strongly Disagree", "Disagree", "Agree", "Strongly Agree"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl LikertScale {
    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }

    /// Label for an answer value, if the value is on the scale and labelled
    pub fn label(&self, value: u8) -> Option<&str> {
        if !self.contains(i64::from(value)) {
            return None;
        }
        self.labels
            .get(usize::from(value - self.min))
            .map(String::as_str)
    }

    /// Convert a mean answer to a 0-100 percentage of the scale maximum
    pub fn percentage(&self, score: f64) -> f64 {
        score / f64::from(self.max) * 100.0
    }

    pub fn validate(&self) -> Result<(), RubricError> {
        if self.min == 0 || self.min > self.max {
            return Err(RubricError::InvalidScale {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Named group of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorDef {
    /// Stable identifier, matched against [`IndicatorId`] keys
    pub key: String,
    /// Display name used in reports
    pub name: String,
    pub questions: Vec<QuestionId>,
}

impl IndicatorDef {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        questions: impl IntoIterator<Item = QuestionId>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            questions: questions.into_iter().collect(),
        }
    }

    /// Definition of a standard indicator with its canonical key and name
    pub fn standard(id: IndicatorId, questions: impl IntoIterator<Item = QuestionId>) -> Self {
        Self::new(id.key(), id.display_name(), questions)
    }

    /// The standard indicator this definition refers to, if any
    pub fn indicator_id(&self) -> Option<IndicatorId> {
        self.key.parse().ok()
    }
}

/// Complete scoring rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    #[serde(default)]
    pub scale: LikertScale,

    #[serde(default = "standard_technical")]
    pub technical: Vec<IndicatorDef>,

    #[serde(default = "standard_social")]
    pub social: Vec<IndicatorDef>,
}

impl Default for Rubric {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_technical() -> Vec<IndicatorDef> {
    vec![
        IndicatorDef::standard(IndicatorId::InstallationTerms, 1..=2),
        IndicatorDef::standard(IndicatorId::Passwords, 3..=8),
        IndicatorDef::standard(IndicatorId::InternetAndWifi, 9..=13),
        IndicatorDef::standard(IndicatorId::DeviceSecurity, 14..=19),
        IndicatorDef::standard(IndicatorId::TechnicalIncidentReporting, 20..=22),
        IndicatorDef::standard(IndicatorId::TechnicalLawAndRegulation, 23..=24),
    ]
}

fn standard_social() -> Vec<IndicatorDef> {
    vec![
        IndicatorDef::standard(IndicatorId::SocialEngineering, 25..=30),
        IndicatorDef::standard(IndicatorId::NegativeContent, 31..=33),
        IndicatorDef::standard(IndicatorId::SocialMediaActivity, 34..=38),
        IndicatorDef::standard(IndicatorId::SocialIncidentReporting, 39..=41),
        IndicatorDef::standard(IndicatorId::SocialLawAndRegulation, 42..=43),
    ]
}

impl Rubric {
    /// The fixed 11-indicator, 43-question catalog
    pub fn standard() -> Self {
        Self {
            scale: LikertScale::default(),
            technical: standard_technical(),
            social: standard_social(),
        }
    }

    pub fn indicators(&self, category: Category) -> &[IndicatorDef] {
        match category {
            Category::Technical => &self.technical,
            Category::Social => &self.social,
        }
    }

    /// All indicators with their category, technical first
    pub fn all(&self) -> impl Iterator<Item = (Category, &IndicatorDef)> {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.indicators(c).iter().map(move |i| (c, i)))
    }

    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.all().flat_map(|(_, i)| i.questions.iter().copied())
    }

    pub fn question_count(&self) -> usize {
        self.question_ids().count()
    }

    pub fn indicator_for(&self, question: QuestionId) -> Option<(Category, &IndicatorDef)> {
        self.all().find(|(_, i)| i.questions.contains(&question))
    }

    /// Check the structural invariants every evaluation relies on.
    ///
    /// Reports the first problem in rubric order.
    pub fn validate(&self) -> Result<(), RubricError> {
        self.scale.validate()?;

        if let Some(category) = Category::ALL
            .into_iter()
            .find(|c| self.indicators(*c).is_empty())
        {
            return Err(RubricError::EmptyCategory(category));
        }

        let mut keys = HashSet::new();
        let mut names = HashSet::new();
        let mut owners: HashMap<QuestionId, &str> = HashMap::new();

        for (_, indicator) in self.all() {
            if indicator.questions.is_empty() {
                return Err(RubricError::EmptyIndicator {
                    name: indicator.name.clone(),
                });
            }
            if !keys.insert(indicator.key.as_str()) {
                return Err(RubricError::DuplicateIndicatorKey {
                    key: indicator.key.clone(),
                });
            }
            if !names.insert(indicator.name.as_str()) {
                return Err(RubricError::DuplicateIndicatorName {
                    name: indicator.name.clone(),
                });
            }
            for &question in &indicator.questions {
                if question == 0 {
                    return Err(RubricError::ZeroQuestion {
                        name: indicator.name.clone(),
                    });
                }
                if let Some(first) = owners.insert(question, indicator.name.as_str()) {
                    return Err(RubricError::DuplicateQuestion {
                        question,
                        first: first.to_string(),
                        second: indicator.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

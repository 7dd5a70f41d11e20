//! Core data model for questionnaire scoring.
//!
//! - [`Category`] and [`IndicatorId`] name the fixed parts of the rubric
//! - [`AwarenessLevel`] is the ordinal classification of an overall score
//! - [`ScoreReport`] is the nested result handed to report renderers
//! - [`errors`] holds the typed errors of each evaluation stage

pub mod errors;
mod level;
mod report;

pub use errors::{AggregationError, ConfigError, EvaluationError, ParseIssue, RubricError};
pub use level::AwarenessLevel;
pub use report::{CategoryScore, IndicatorScore, IndicatorScores, OverallScore, ScoreReport};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric question identifier (`q7` on the wire is question 7).
pub type QuestionId = u32;

/// Top-level grouping of indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Social,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Technical, Category::Social];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Social => "Social",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of one of the eleven standard indicators.
///
/// Rubrics refer to indicators through their stable [`key`](IndicatorId::key);
/// display names are free text and are never matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorId {
    InstallationTerms,
    Passwords,
    InternetAndWifi,
    DeviceSecurity,
    TechnicalIncidentReporting,
    TechnicalLawAndRegulation,
    SocialEngineering,
    NegativeContent,
    SocialMediaActivity,
    SocialIncidentReporting,
    SocialLawAndRegulation,
}

impl IndicatorId {
    pub const ALL: [IndicatorId; 11] = [
        IndicatorId::InstallationTerms,
        IndicatorId::Passwords,
        IndicatorId::InternetAndWifi,
        IndicatorId::DeviceSecurity,
        IndicatorId::TechnicalIncidentReporting,
        IndicatorId::TechnicalLawAndRegulation,
        IndicatorId::SocialEngineering,
        IndicatorId::NegativeContent,
        IndicatorId::SocialMediaActivity,
        IndicatorId::SocialIncidentReporting,
        IndicatorId::SocialLawAndRegulation,
    ];

    /// Stable configuration key
    pub fn key(&self) -> &'static str {
        match self {
            IndicatorId::InstallationTerms => "installation_terms",
            IndicatorId::Passwords => "passwords",
            IndicatorId::InternetAndWifi => "internet_and_wifi",
            IndicatorId::DeviceSecurity => "device_security",
            IndicatorId::TechnicalIncidentReporting => "technical_incident_reporting",
            IndicatorId::TechnicalLawAndRegulation => "technical_law_and_regulation",
            IndicatorId::SocialEngineering => "social_engineering",
            IndicatorId::NegativeContent => "negative_content",
            IndicatorId::SocialMediaActivity => "social_media_activity",
            IndicatorId::SocialIncidentReporting => "social_incident_reporting",
            IndicatorId::SocialLawAndRegulation => "social_law_and_regulation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IndicatorId::InstallationTerms => "Installation Terms and Conditions",
            IndicatorId::Passwords => "Passwords",
            IndicatorId::InternetAndWifi => "Internet and Wi-Fi",
            IndicatorId::DeviceSecurity => "Device Security",
            IndicatorId::TechnicalIncidentReporting => "Technical Cyber Incident Reporting",
            IndicatorId::TechnicalLawAndRegulation => "Technical Cybersecurity Law and Regulation",
            IndicatorId::SocialEngineering => "Social Engineering",
            IndicatorId::NegativeContent => "Negative Content",
            IndicatorId::SocialMediaActivity => "Social Media Activity",
            IndicatorId::SocialIncidentReporting => "Social Cyber Incident Reporting",
            IndicatorId::SocialLawAndRegulation => "Social Cybersecurity Law and Regulation",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            IndicatorId::InstallationTerms
            | IndicatorId::Passwords
            | IndicatorId::InternetAndWifi
            | IndicatorId::DeviceSecurity
            | IndicatorId::TechnicalIncidentReporting
            | IndicatorId::TechnicalLawAndRegulation => Category::Technical,
            IndicatorId::SocialEngineering
            | IndicatorId::NegativeContent
            | IndicatorId::SocialMediaActivity
            | IndicatorId::SocialIncidentReporting
            | IndicatorId::SocialLawAndRegulation => Category::Social,
        }
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for IndicatorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndicatorId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| format!("unknown indicator key: {s}"))
    }
}

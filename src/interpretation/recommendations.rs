use crate::config::InterpretationThresholds;
use crate::core::{AwarenessLevel, Category, IndicatorId, ScoreReport};
use serde::{Deserialize, Serialize};

/// Advice derived from a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub general: Vec<String>,
    pub technical: Vec<String>,
    pub social: Vec<String>,
    pub implementation_steps: Vec<String>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.general.is_empty()
            && self.technical.is_empty()
            && self.social.is_empty()
            && self.implementation_steps.is_empty()
    }
}

const IMPLEMENTATION_STEPS: [&str; 5] = [
    "Make a priority list from the recommendations above",
    "Set a schedule for putting each recommendation into practice",
    "Find learning resources that suit your level of education",
    "Apply the recommendations gradually and consistently",
    "Evaluate your progress periodically",
];

/// Pure function: build the advice lists for a report.
pub fn recommend(report: &ScoreReport, thresholds: &InterpretationThresholds) -> Recommendations {
    let level = report.overall.level;
    let general: Vec<String> = general_advice(level).iter().map(|s| s.to_string()).collect();

    if level.is_error() {
        return Recommendations {
            general,
            ..Recommendations::default()
        };
    }

    let mut recommendations = Recommendations {
        general,
        implementation_steps: IMPLEMENTATION_STEPS.iter().map(|s| s.to_string()).collect(),
        ..Recommendations::default()
    };

    for (category, score) in report.indicators() {
        if score.percentage >= thresholds.recommend_below {
            continue;
        }
        let Some(advice) = score.key.parse::<IndicatorId>().ok().map(indicator_advice) else {
            continue;
        };
        match category {
            Category::Technical => recommendations.technical.push(advice.to_string()),
            Category::Social => recommendations.social.push(advice.to_string()),
        }
    }

    recommendations
}

fn general_advice(level: AwarenessLevel) -> &'static [&'static str] {
    match level {
        AwarenessLevel::VeryGood => &[
            "Keep up and build on your existing cybersecurity practices",
            "Share your cybersecurity knowledge with others",
            "Follow the latest developments in cybersecurity",
        ],
        AwarenessLevel::Good => &[
            "Deepen your understanding of cybersecurity best practices",
            "Take cybersecurity training regularly",
            "Apply cybersecurity practices in your daily activities",
        ],
        AwarenessLevel::NeedsImprovement => &[
            "Start learning the fundamentals of cybersecurity",
            "Take a basic cybersecurity training",
            "Apply basic security measures in your digital activities",
        ],
        AwarenessLevel::Poor => &[
            "Start learning the basic concepts of cybersecurity",
            "Take a basic cybersecurity training",
            "Apply basic security measures in your digital activities",
        ],
        AwarenessLevel::Error => &["Retry the assessment after answering every question"],
    }
}

fn indicator_advice(id: IndicatorId) -> &'static str {
    match id {
        IndicatorId::InstallationTerms => {
            "Read the terms and requested permissions before installing an application"
        }
        IndicatorId::Passwords => "Use a strong and unique password for every account",
        IndicatorId::InternetAndWifi => "Avoid public Wi-Fi for sensitive activities",
        IndicatorId::DeviceSecurity => "Enable the security features of your devices",
        IndicatorId::TechnicalIncidentReporting => "Learn how to report cybersecurity incidents",
        IndicatorId::TechnicalLawAndRegulation => {
            "Learn the cybersecurity regulations that apply to you"
        }
        IndicatorId::SocialEngineering => "Beware of manipulation attempts through digital media",
        IndicatorId::NegativeContent => "Verify information before sharing it",
        IndicatorId::SocialMediaActivity => "Limit the personal information you share on social media",
        IndicatorId::SocialIncidentReporting => "Learn how to report negative content",
        IndicatorId::SocialLawAndRegulation => "Learn the regulations on digital activity",
    }
}

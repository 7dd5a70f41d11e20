//! Rule-based reading of a score report: a summary sentence, strengths and
//! weaknesses, plus the advice lists in [`recommendations`].

pub mod recommendations;

pub use recommendations::{recommend, Recommendations};

use crate::config::InterpretationThresholds;
use crate::core::{AwarenessLevel, Category, ScoreReport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Pure function: summarize a report and split its indicators into strengths
/// and weaknesses.
pub fn interpret(report: &ScoreReport, thresholds: &InterpretationThresholds) -> Interpretation {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for (category, score) in report.indicators() {
        let subject = subject(category);
        if score.percentage >= thresholds.strength {
            strengths.push(format!("Good {subject} of {}", score.name));
        } else if score.percentage < thresholds.weakness {
            weaknesses.push(format!("Needs to improve {subject} of {}", score.name));
        }
    }

    Interpretation {
        summary: summary(report),
        strengths,
        weaknesses,
    }
}

// Technical indicators measure understanding, social ones awareness.
fn subject(category: Category) -> &'static str {
    match category {
        Category::Technical => "understanding",
        Category::Social => "awareness",
    }
}

fn summary(report: &ScoreReport) -> String {
    let overall = report.overall.percentage;
    let lead = match report.overall.level {
        AwarenessLevel::VeryGood => format!(
            "Your cybersecurity awareness is very good ({overall:.1}%). You show a thorough \
             grasp of both the technical and the social side of cybersecurity."
        ),
        AwarenessLevel::Good => format!(
            "Your cybersecurity awareness is good ({overall:.1}%). Your understanding is solid, \
             though some areas can still be improved."
        ),
        AwarenessLevel::NeedsImprovement => format!(
            "Your cybersecurity awareness needs improvement ({overall:.1}%). Several aspects of \
             cybersecurity deserve more attention."
        ),
        AwarenessLevel::Poor => format!(
            "Your cybersecurity awareness is poor ({overall:.1}%). Improving both your \
             understanding and your day-to-day practice is important."
        ),
        AwarenessLevel::Error => {
            return "The assessment could not be evaluated. Please retry the assessment."
                .to_string()
        }
    };

    format!(
        "{lead} Technical: {:.1}%, social: {:.1}%.",
        report.technical.percentage, report.social.percentage
    )
}

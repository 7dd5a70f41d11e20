//! Aggregation stage: validated answers to a nested score report.
//!
//! Indicator score is the mean of its valid answers. Category score is the
//! unweighted mean of its indicator scores, so indicators with more questions
//! do not weigh more. Overall score is the mean of the two category scores.

use super::classify::classify;
use super::parse::ResponseSet;
use crate::config::{IndicatorDef, LevelThresholds, LikertScale, Rubric};
use crate::core::{
    AggregationError, Category, CategoryScore, IndicatorScore, IndicatorScores, OverallScore,
    ScoreReport,
};
use tracing::warn;

pub fn aggregate(
    responses: &ResponseSet,
    rubric: &Rubric,
    levels: &LevelThresholds,
) -> Result<ScoreReport, AggregationError> {
    let technical = score_category(Category::Technical, responses, rubric)?;
    let social = score_category(Category::Social, responses, rubric)?;

    let score = (technical.average_score + social.average_score) / 2.0;
    let percentage = rubric.scale.percentage(score);
    ensure_finite("overall", percentage)?;

    Ok(ScoreReport {
        technical,
        social,
        overall: OverallScore {
            score,
            percentage,
            level: classify(percentage, levels),
        },
    })
}

/// Score one indicator; unanswered questions are left out of the mean.
pub fn score_indicator(
    indicator: &IndicatorDef,
    responses: &ResponseSet,
    scale: &LikertScale,
) -> IndicatorScore {
    let valid: Vec<f64> = indicator
        .questions
        .iter()
        .filter_map(|&q| responses.answer(q))
        .map(f64::from)
        .collect();

    let score = if valid.is_empty() {
        warn!(indicator = %indicator.name, "No valid responses for indicator");
        0.0
    } else {
        mean(&valid)
    };

    IndicatorScore {
        key: indicator.key.clone(),
        name: indicator.name.clone(),
        score,
        percentage: scale.percentage(score),
        answered: valid.len(),
    }
}

fn score_category(
    category: Category,
    responses: &ResponseSet,
    rubric: &Rubric,
) -> Result<CategoryScore, AggregationError> {
    let definitions = rubric.indicators(category);
    if definitions.is_empty() {
        return Err(AggregationError::EmptyCategory(category));
    }

    let indicators: Vec<IndicatorScore> = definitions
        .iter()
        .map(|def| score_indicator(def, responses, &rubric.scale))
        .collect();

    let scores: Vec<f64> = indicators.iter().map(|s| s.score).collect();
    let average_score = mean(&scores);
    let percentage = rubric.scale.percentage(average_score);
    ensure_finite(category.label(), percentage)?;

    Ok(CategoryScore {
        indicators: IndicatorScores::new(indicators),
        average_score,
        percentage,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn ensure_finite(scope: &str, value: f64) -> Result<(), AggregationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AggregationError::NonFinite {
            scope: scope.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn responses(entries: &[(&str, &str)], rubric: &Rubric) -> ResponseSet {
        ResponseSet::parse(entries.iter().copied(), rubric)
    }

    #[test]
    fn test_indicator_mean_ignores_unanswered() {
        let rubric = Rubric::standard();
        // Passwords covers q3..=q8; only two are answered.
        let set = responses(&[("q3", "4"), ("q4", "2")], &rubric);
        let score = score_indicator(&rubric.technical[1], &set, &rubric.scale);
        assert_eq!(score.score, 3.0);
        assert_eq!(score.percentage, 75.0);
        assert_eq!(score.answered, 2);
    }

    #[test]
    fn test_indicator_without_answers_scores_zero() {
        let rubric = Rubric::standard();
        let set = responses(&[], &rubric);
        let score = score_indicator(&rubric.social[0], &set, &rubric.scale);
        assert_eq!(score.score, 0.0);
        assert_eq!(score.percentage, 0.0);
        assert!(!score.has_answers());
    }

    #[test]
    fn test_category_averages_indicator_scores_not_answers() {
        let rubric = Rubric::standard();
        // Installation terms (2 questions) all 4, passwords (6 questions) all 1.
        let mut entries = vec![("q1", "4"), ("q2", "4")];
        entries.extend(["q3", "q4", "q5", "q6", "q7", "q8"].map(|q| (q, "1")));
        let set = responses(&entries, &rubric);

        let report = aggregate(&set, &rubric, &LevelThresholds::default()).unwrap();
        // (4 + 1 + 0 + 0 + 0 + 0) / 6, not (2*4 + 6*1) / 8
        assert_eq!(report.technical.average_score, 5.0 / 6.0);
        assert_eq!(report.technical.percentage, 5.0 / 6.0 / 4.0 * 100.0);
    }

    #[test]
    fn test_overall_is_mean_of_categories() {
        let rubric = Rubric::standard();
        let entries: Vec<(String, String)> = (1..=24)
            .map(|q| (format!("q{q}"), "4".to_string()))
            .chain((25..=43).map(|q| (format!("q{q}"), "2".to_string())))
            .collect();
        let set = ResponseSet::parse(entries, &rubric);

        let report = aggregate(&set, &rubric, &LevelThresholds::default()).unwrap();
        assert_eq!(report.technical.average_score, 4.0);
        assert_eq!(report.social.average_score, 2.0);
        assert_eq!(report.overall.score, 3.0);
        assert_eq!(report.overall.percentage, 75.0);
        assert_eq!(report.overall.level, crate::core::AwarenessLevel::Good);
    }

    #[test]
    fn test_empty_category_is_an_error() {
        let rubric = Rubric {
            social: Vec::new(),
            ..Rubric::standard()
        };
        let set = responses(&[], &rubric);
        assert_eq!(
            aggregate(&set, &rubric, &LevelThresholds::default()),
            Err(AggregationError::EmptyCategory(Category::Social))
        );
    }

    #[test]
    fn test_zero_scale_max_is_non_finite() {
        let mut rubric = Rubric::standard();
        rubric.scale.max = 0;
        let set = ResponseSet::default();
        let err = aggregate(&set, &rubric, &LevelThresholds::default()).unwrap_err();
        assert!(matches!(err, AggregationError::NonFinite { .. }));
    }

    #[test]
    fn test_indicator_order_follows_rubric() {
        let rubric = Rubric::standard();
        let report = aggregate(&ResponseSet::default(), &rubric, &LevelThresholds::default()).unwrap();
        let names: Vec<_> = report.social.indicators.iter().map(|s| s.name.as_str()).collect();
        let expected: Vec<_> = rubric.social.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, expected);
    }
}

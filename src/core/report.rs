//! Nested score report produced by an evaluation.

use super::{AwarenessLevel, Category};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Score of a single indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorScore {
    /// Stable rubric key
    pub key: String,
    /// Display name, also the key of the serialized indicator map
    pub name: String,
    /// Mean of the valid answers, 0 when nothing was answered
    pub score: f64,
    /// `score / scale max * 100`
    pub percentage: f64,
    /// Number of valid answers that went into `score`
    pub answered: usize,
}

impl IndicatorScore {
    pub fn has_answers(&self) -> bool {
        self.answered > 0
    }
}

#[derive(Serialize)]
struct IndicatorEntryRef<'a> {
    key: &'a str,
    score: f64,
    percentage: f64,
    answered: usize,
}

#[derive(Deserialize)]
struct IndicatorEntry {
    #[serde(default)]
    key: String,
    score: f64,
    percentage: f64,
    #[serde(default)]
    answered: usize,
}

/// Indicator scores in rubric order.
///
/// Serialized as a JSON object keyed by display name; entry order follows
/// the rubric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorScores(Vec<IndicatorScore>);

impl IndicatorScores {
    pub fn new(scores: Vec<IndicatorScore>) -> Self {
        Self(scores)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndicatorScore> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an indicator by its display name
    pub fn get(&self, name: &str) -> Option<&IndicatorScore> {
        self.0.iter().find(|s| s.name == name)
    }

    /// Look up an indicator by its stable key
    pub fn by_key(&self, key: &str) -> Option<&IndicatorScore> {
        self.0.iter().find(|s| s.key == key)
    }
}

impl<'a> IntoIterator for &'a IndicatorScores {
    type Item = &'a IndicatorScore;
    type IntoIter = std::slice::Iter<'a, IndicatorScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for IndicatorScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for score in &self.0 {
            map.serialize_entry(
                &score.name,
                &IndicatorEntryRef {
                    key: &score.key,
                    score: score.score,
                    percentage: score.percentage,
                    answered: score.answered,
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IndicatorScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoresVisitor;

        impl<'de> Visitor<'de> for ScoresVisitor {
            type Value = IndicatorScores;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of indicator names to scores")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut scores = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, entry)) = access.next_entry::<String, IndicatorEntry>()? {
                    scores.push(IndicatorScore {
                        key: entry.key,
                        name,
                        score: entry.score,
                        percentage: entry.percentage,
                        answered: entry.answered,
                    });
                }
                Ok(IndicatorScores(scores))
            }
        }

        deserializer.deserialize_map(ScoresVisitor)
    }
}

/// Aggregate of one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub indicators: IndicatorScores,
    /// Unweighted mean of the indicator scores
    pub average_score: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    pub score: f64,
    pub percentage: f64,
    pub level: AwarenessLevel,
}

/// Full evaluation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub technical: CategoryScore,
    pub social: CategoryScore,
    pub overall: OverallScore,
}

impl ScoreReport {
    /// All-zero report with level `Error`, returned when evaluation fails.
    pub fn fallback() -> Self {
        Self {
            technical: CategoryScore::default(),
            social: CategoryScore::default(),
            overall: OverallScore {
                score: 0.0,
                percentage: 0.0,
                level: AwarenessLevel::Error,
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.overall.level.is_error()
    }

    pub fn category(&self, category: Category) -> &CategoryScore {
        match category {
            Category::Technical => &self.technical,
            Category::Social => &self.social,
        }
    }

    /// Every indicator score with its category, technical first
    pub fn indicators(&self) -> impl Iterator<Item = (Category, &IndicatorScore)> {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.category(c).indicators.iter().map(move |s| (c, s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> IndicatorScores {
        IndicatorScores::new(vec![
            IndicatorScore {
                key: "zeta".into(),
                name: "Zeta".into(),
                score: 3.5,
                percentage: 87.5,
                answered: 2,
            },
            IndicatorScore {
                key: "alpha".into(),
                name: "Alpha".into(),
                score: 0.0,
                percentage: 0.0,
                answered: 0,
            },
        ])
    }

    #[test]
    fn test_indicator_map_keeps_rubric_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"Zeta":{"key":"zeta","score":3.5,"percentage":87.5,"answered":2},"Alpha":{"key":"alpha","score":0.0,"percentage":0.0,"answered":0}}"#
        );
    }

    #[test]
    fn test_indicator_map_deserializes_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let parsed: IndicatorScores = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_minimal_entry_deserializes() {
        let parsed: IndicatorScores =
            serde_json::from_str(r#"{"Passwords":{"score":2.0,"percentage":50.0}}"#).unwrap();
        let entry = parsed.get("Passwords").unwrap();
        assert_eq!(entry.key, "");
        assert_eq!(entry.answered, 0);
    }

    #[test]
    fn test_fallback_shape() {
        let report = ScoreReport::fallback();
        assert!(report.is_fallback());
        assert!(report.technical.indicators.is_empty());
        assert!(report.social.indicators.is_empty());
        assert_eq!(report.overall.percentage, 0.0);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["overall"]["level"], "Error");
        assert_eq!(value["technical"]["indicators"], serde_json::json!({}));
    }
}

use crate::config::LevelThresholds;
use crate::core::AwarenessLevel;

/// Classify an overall percentage.
///
/// Thresholds are inclusive lower bounds checked from highest to lowest;
/// the first match wins.
pub fn classify(percentage: f64, levels: &LevelThresholds) -> AwarenessLevel {
    if percentage >= levels.very_good {
        AwarenessLevel::VeryGood
    } else if percentage >= levels.good {
        AwarenessLevel::Good
    } else if percentage >= levels.needs_improvement {
        AwarenessLevel::NeedsImprovement
    } else {
        AwarenessLevel::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_exact() {
        let levels = LevelThresholds::default();
        let cases = [
            (100.0, AwarenessLevel::VeryGood),
            (80.0, AwarenessLevel::VeryGood),
            (79.99, AwarenessLevel::Good),
            (50.0, AwarenessLevel::Good),
            (49.99, AwarenessLevel::NeedsImprovement),
            (25.0, AwarenessLevel::NeedsImprovement),
            (24.99, AwarenessLevel::Poor),
            (0.0, AwarenessLevel::Poor),
        ];
        for (percentage, expected) in cases {
            assert_eq!(classify(percentage, &levels), expected, "{percentage}");
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let levels = LevelThresholds {
            very_good: 90.0,
            good: 70.0,
            needs_improvement: 40.0,
        };
        assert_eq!(classify(85.0, &levels), AwarenessLevel::Good);
        assert_eq!(classify(39.0, &levels), AwarenessLevel::Poor);
    }
}

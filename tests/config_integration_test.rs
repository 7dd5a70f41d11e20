//! Loading `.awaremap.toml` from disk and evaluating with it.

use awaremap::config::{load_config_from, load_config_from_path, CONFIG_FILE_NAME};
use awaremap::{AwaremapConfig, AwarenessLevel, ConfigError, Evaluator, RubricError};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_config_round_trips_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, AwaremapConfig::default().to_toml().unwrap()).unwrap();

    let loaded = load_config_from_path(&path).unwrap();
    assert_eq!(loaded, AwaremapConfig::default());
}

#[test]
fn test_config_found_in_ancestor_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [levels]
            very_good = 95.0
            good = 70.0
            needs_improvement = 40.0
        "#},
    )
    .unwrap();
    let nested = dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = load_config_from(nested);
    assert_eq!(config.levels.very_good, 95.0);

    // Roughly 88% is Very Good by default but only Good here.
    let entries: Vec<(String, String)> = (1..=43)
        .map(|q| (format!("q{q}"), if q % 2 == 0 { "3" } else { "4" }.to_string()))
        .collect();
    let report = Evaluator::from_config(&config).evaluate(entries);
    assert!(report.overall.percentage > 80.0 && report.overall.percentage < 95.0);
    assert_eq!(report.overall.level, AwarenessLevel::Good);
}

#[test]
fn test_custom_rubric_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [rubric.scale]
            min = 1
            max = 5
            labels = ["Never", "Rarely", "Sometimes", "Often", "Always"]

            [[rubric.technical]]
            key = "backups"
            name = "Backups"
            questions = [1, 2]

            [[rubric.social]]
            key = "oversharing"
            name = "Oversharing"
            questions = [3]
        "#},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.rubric.question_count(), 3);

    let report = Evaluator::from_config(&config).evaluate([("q1", "5"), ("q2", "5"), ("q3", "5")]);
    assert_eq!(report.overall.percentage, 100.0);
    assert_eq!(
        report.technical.indicators.get("Backups").unwrap().percentage,
        100.0
    );
}

#[test]
fn test_invalid_rubric_is_rejected_strictly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [[rubric.technical]]
            key = "a"
            name = "A"
            questions = [1, 2]

            [[rubric.social]]
            key = "b"
            name = "B"
            questions = [2]
        "#},
    )
    .unwrap();

    let err = load_config_from_path(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Rubric(RubricError::DuplicateQuestion { question: 2, .. })
    ));

    // The lenient search falls back to defaults.
    let config = load_config_from(dir.path().to_path_buf());
    assert_eq!(config, AwaremapConfig::default());
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config_from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

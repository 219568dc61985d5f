use std::collections::HashMap;
use std::path::{Path, PathBuf};

use courserec_core::config::*;
use courserec_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CourserecConfig::from_toml("").unwrap();

    assert_eq!(
        config.data.effective_grades_path(),
        PathBuf::from("uiuc-gpa-dataset.csv")
    );
    assert_eq!(
        config.data.effective_ratings_path(),
        PathBuf::from("profrating.csv")
    );
    assert_eq!(config.centering.effective_rating_mean(), 3.6);
    assert_eq!(config.centering.effective_difficulty_mean(), 2.9);

    let weights = config.weights.effective();
    assert_eq!(weights.title, 1.0);
    assert_eq!(weights.instructor, 0.3);
    assert_eq!(weights.subject, 0.3);
    assert_eq!(weights.grades, 1.0);
    assert_eq!(weights.rating, 1.0);

    assert_eq!(config.query.effective_top_k(), 10);
    assert!(!config.similarity.effective_parallel());
    assert_eq!(config.limits.effective_max_catalog_rows(), 20_000);
    assert!(config.limits.effective_build_timeout().is_none());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[weights]
instructor = 0.5

[query]
top_k = 5

[limits]
build_timeout_secs = 30
"#;
    let config = CourserecConfig::from_toml(toml).unwrap();
    assert_eq!(config.weights.effective().instructor, 0.5);
    // Non-overridden fields keep defaults
    assert_eq!(config.weights.effective().subject, 0.3);
    assert_eq!(config.query.effective_top_k(), 5);
    assert_eq!(
        config.limits.effective_build_timeout(),
        Some(std::time::Duration::from_secs(30))
    );
}

#[test]
fn negative_weight_fails_validation() {
    let err = CourserecConfig::from_toml("[weights]\ngrades = -1.0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "weights.grades"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn zero_top_k_fails_validation() {
    let err = CourserecConfig::from_toml("[query]\ntop_k = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "query.top_k"));
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = CourserecConfig::from_toml("[weights\ntitle = 1").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let mut config = CourserecConfig::default();
    config.query.top_k = Some(7);
    config.centering.rating_mean = Some(3.5);
    let toml_str = config.to_toml().unwrap();
    let roundtripped = CourserecConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.query.effective_top_k(), 7);
    assert_eq!(roundtripped.centering.effective_rating_mean(), 3.5);
}

#[test]
fn load_reads_project_file_and_cli_wins() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("courserec.toml"),
        "[data]\ngrades_path = \"grades.csv\"\n\n[query]\ntop_k = 3\n",
    )
    .unwrap();

    let cli = CliOverrides {
        top_k: Some(4),
        ..Default::default()
    };
    let config = CourserecConfig::load(dir.path(), Some(&cli)).unwrap();
    assert_eq!(config.data.effective_grades_path(), PathBuf::from("grades.csv"));
    assert_eq!(config.query.effective_top_k(), 4);
}

#[test]
fn load_without_project_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = CourserecConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.weights.effective().title, 1.0);
}

#[test]
fn explicit_missing_config_path_is_error() {
    let cli = CliOverrides {
        config_path: Some(PathBuf::from("/definitely/not/here/courserec.toml")),
        ..Default::default()
    };
    let err = CourserecConfig::load(Path::new("."), Some(&cli)).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn env_overrides_apply_and_bad_values_are_ignored() {
    let env: HashMap<&str, &str> = [
        ("COURSEREC_RATINGS_PATH", "/data/ratings.csv"),
        ("COURSEREC_TOP_K", "not-a-number"),
        ("COURSEREC_DIFFICULTY_MEAN", "3.0"),
        ("COURSEREC_PARALLEL", "true"),
    ]
    .into_iter()
    .collect();

    let mut config = CourserecConfig::default();
    CourserecConfig::apply_env_with(&mut config, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(
        config.data.effective_ratings_path(),
        PathBuf::from("/data/ratings.csv")
    );
    assert_eq!(config.query.effective_top_k(), 10);
    assert_eq!(config.centering.effective_difficulty_mean(), 3.0);
    assert!(config.similarity.effective_parallel());
}

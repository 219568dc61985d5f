//! End-to-end: fixture CSVs → index → queries.

use courserec_core::errors::{LoadError, QueryError, RecommenderError};
use courserec_core::types::CourseNumber;
use courserec_engine::loader::load_catalog;
use courserec_engine::{run, IndexBuilder};
use test_fixtures::small_dataset_config;

#[test]
fn fixture_tables_load_with_expected_counts() {
    let config = small_dataset_config();
    let loaded = load_catalog(&config.data, &config.centering).unwrap();

    assert_eq!(loaded.stats.grade_records, 13);
    assert_eq!(loaded.stats.skipped_grade_records, 1);
    assert_eq!(loaded.stats.rating_records, 6);
    assert_eq!(loaded.stats.duplicate_rating_records, 1);
    assert_eq!(loaded.stats.aggregate.groups, 10);
    assert_eq!(loaded.stats.aggregate.zero_student_rows, 1);
    assert_eq!(loaded.stats.aggregate.unrated_rows, 1);

    let titles: Vec<&str> = loaded.catalog.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Advanced Database Systems",
            "Calculus II",
            "Calculus III",
            "Data Mining",
            "Data Mining",
            "Data Structures",
            "Database Systems",
            "Elementary Organic Chemistry I",
            "Railroad Transportation Engrg",
            "Senior Thesis",
        ]
    );
}

#[test]
fn terms_are_summed_per_offering() {
    let config = small_dataset_config();
    let loaded = load_catalog(&config.data, &config.centering).unwrap();
    let db = loaded
        .catalog
        .iter()
        .find(|r| r.title == "Database Systems")
        .unwrap();

    assert_eq!(db.instructor, "ChangKevinC");
    assert_eq!(db.number, CourseNumber::Numeric(411));
    assert_eq!(db.students, 96 + 91);
    let sum: f64 = db.grades.as_slice().iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    // first rating row for a duplicated instructor wins
    assert!((db.rating - 0.6).abs() < 1e-9);
    assert!((db.difficulty - 0.5).abs() < 1e-9);
}

#[test]
fn run_returns_index_and_warm_up_results() {
    let config = small_dataset_config();
    let (index, results) = run(&config, "Database Systems", "Chang, Kevin C").unwrap();

    assert_eq!(index.catalog().len(), 10);
    assert_eq!(results.len(), 9);
    assert_eq!(results[0].title, "Advanced Database Systems");
    assert_eq!(results[0].instructor, "ChangKevinC");
    assert!(results.iter().all(|r| r.title != "Database Systems"));
}

#[test]
fn queries_are_normalized_before_lookup() {
    let config = small_dataset_config();
    let index = IndexBuilder::from_config(&config)
        .build_from_config(&config)
        .unwrap();

    let raw = index.recommend("Calculus 2", "Tyson, Kelly").unwrap();
    let normalized = index.recommend("Calculus II", "TysonKelly").unwrap();
    assert_eq!(raw, normalized);
    assert_eq!(raw[0].title, "Calculus III");
}

#[test]
fn top_k_from_config_limits_results() {
    let mut config = small_dataset_config();
    config.query.top_k = Some(3);
    let (_, results) = run(&config, "Data Structures", "Evans, Graham C").unwrap();
    assert_eq!(results.len(), 3);
}

#[test]
fn scored_results_descend_and_skip_query_row() {
    let config = small_dataset_config();
    let (index, _) = run(&config, "Database Systems", "Chang, Kevin C").unwrap();

    let query = index.lookup("Database Systems", "Chang, Kevin C").unwrap();
    let scored = index
        .recommend_scored("Database Systems", "Chang, Kevin C")
        .unwrap();
    assert!(scored.iter().all(|s| s.index != query));
    assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(scored[0].score, index.matrix().get(query, scored[0].index));
}

#[test]
fn cross_listed_key_resolves_to_first_row() {
    let config = small_dataset_config();
    let (index, _) = run(&config, "Data Mining", "Han, Jiawei").unwrap();

    assert_eq!(index.stats().duplicate_keys, 1);
    let row = index.lookup("Data Mining", "Han, Jiawei").unwrap();
    assert_eq!(index.catalog().get(row).unwrap().subject, "CS");

    let results = index.recommend("Data Mining", "Han, Jiawei").unwrap();
    // the STAT listing is a different row and is a valid recommendation
    assert_eq!(results[0].subject, "STAT");
    assert_eq!(results[0].title, "Data Mining");
}

#[test]
fn unknown_query_is_not_found() {
    let config = small_dataset_config();
    let err = run(&config, "Underwater Basket Weaving", "Nobody").unwrap_err();
    match err {
        RecommenderError::Query(QueryError::NotFound { course, instructor }) => {
            assert_eq!(course, "Underwater Basket Weaving");
            assert_eq!(instructor, "Nobody");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn missing_dataset_file_is_a_load_error() {
    let mut config = small_dataset_config();
    config.data.grades_path = Some("does/not/exist.csv".into());
    let err = run(&config, "Database Systems", "Chang, Kevin C").unwrap_err();
    assert!(matches!(err, RecommenderError::Load(LoadError::Io { .. })));
}

#[test]
fn stats_describe_the_fixture_catalog() {
    let config = small_dataset_config();
    let (index, _) = run(&config, "Database Systems", "Chang, Kevin C").unwrap();
    let stats = index.stats();

    assert_eq!(stats.rows, 10);
    assert_eq!(stats.zero_student_rows, 1);
    assert_eq!(stats.unrated_rows, 1);
    assert_eq!(stats.subject_vocabulary, 6);
    assert_eq!(stats.instructor_vocabulary, 7);
    assert_eq!(stats.matrix_bytes, 10 * 10 * 8);
    assert!(stats.load.is_some());
}

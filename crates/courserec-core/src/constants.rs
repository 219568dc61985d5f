/// Recommender version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dataset-wide mean of `AvgRating`, precomputed offline.
pub const DEFAULT_RATING_MEAN: f64 = 3.6;

/// Dataset-wide mean of `AvgDifficulty`, precomputed offline.
pub const DEFAULT_DIFFICULTY_MEAN: f64 = 2.9;

/// Number of recommendations returned per query.
pub const DEFAULT_TOP_K: usize = 10;

/// Composite similarity weights.
pub const DEFAULT_TITLE_WEIGHT: f64 = 1.0;
pub const DEFAULT_INSTRUCTOR_WEIGHT: f64 = 0.3;
pub const DEFAULT_SUBJECT_WEIGHT: f64 = 0.3;
pub const DEFAULT_GRADES_WEIGHT: f64 = 1.0;
pub const DEFAULT_RATING_WEIGHT: f64 = 1.0;

/// Upper bound on catalog rows. The similarity matrix is N×N `f64`, so
/// 20 000 rows is roughly 3.2 GB.
pub const DEFAULT_MAX_CATALOG_ROWS: usize = 20_000;

/// Default dataset locations, relative to the working directory.
pub const DEFAULT_GRADES_PATH: &str = "uiuc-gpa-dataset.csv";
pub const DEFAULT_RATINGS_PATH: &str = "profrating.csv";

/// Project config file name.
pub const CONFIG_FILE_NAME: &str = "courserec.toml";

/// Grade table columns.
pub const COL_COURSE_TITLE: &str = "CourseTitle";
pub const COL_PRIMARY_INSTRUCTOR: &str = "PrimaryInstructor";
pub const COL_SUBJECT: &str = "Subject";
pub const COL_NUMBER: &str = "Number";

/// Rating table columns.
pub const COL_AVG_RATING: &str = "AvgRating";
pub const COL_AVG_DIFFICULTY: &str = "AvgDifficulty";

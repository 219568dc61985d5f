//! Shared fixtures for recommender tests.
//!
//! Locates the CSV datasets under `fixtures/datasets` and builds small grade
//! and rating tables in memory.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use courserec_core::config::CourserecConfig;
use courserec_core::types::GRADE_BUCKETS;

/// Header order of the published grade dataset.
pub const GRADES_HEADER: &str =
    "Year,Term,YearTerm,Subject,Number,CourseTitle,A+,A,A-,B+,B,B-,C+,C,C-,D+,D,D-,F,W,PrimaryInstructor";

pub const RATINGS_HEADER: &str = "PrimaryInstructor,AvgRating,AvgDifficulty,NumRatings";

pub const SMALL_GRADES: &str = "grades_small.csv";
pub const SMALL_RATINGS: &str = "ratings_small.csv";

/// `fixtures/datasets` at the workspace root.
pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/datasets")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_root().join(name)
}

/// Config pointing at the two small fixture tables.
pub fn small_dataset_config() -> CourserecConfig {
    let mut config = CourserecConfig::default();
    config.data.grades_path = Some(fixture_path(SMALL_GRADES));
    config.data.ratings_path = Some(fixture_path(SMALL_RATINGS));
    config
}

/// One term record of the grade table.
#[derive(Debug, Clone)]
pub struct GradeRow {
    pub year: u16,
    pub term: &'static str,
    pub subject: String,
    pub number: String,
    pub title: String,
    pub counts: [u64; 14],
    pub instructor: String,
}

impl GradeRow {
    pub fn new(subject: &str, number: &str, title: &str, instructor: &str) -> Self {
        Self {
            year: 2019,
            term: "Fall",
            subject: subject.to_string(),
            number: number.to_string(),
            title: title.to_string(),
            counts: [0; 14],
            instructor: instructor.to_string(),
        }
    }

    pub fn counts(mut self, counts: [u64; 14]) -> Self {
        self.counts = counts;
        self
    }

    /// Set one bucket by its label, e.g. `"B+"`.
    pub fn grade(mut self, bucket: &str, count: u64) -> Self {
        let slot = GRADE_BUCKETS
            .iter()
            .position(|b| *b == bucket)
            .unwrap_or_else(|| panic!("unknown grade bucket {bucket}"));
        self.counts[slot] = count;
        self
    }
}

/// One instructor of the rating table. `None` leaves the cell blank.
#[derive(Debug, Clone)]
pub struct RatingRow {
    pub instructor: String,
    pub rating: Option<f64>,
    pub difficulty: Option<f64>,
}

impl RatingRow {
    pub fn new(instructor: &str, rating: f64, difficulty: f64) -> Self {
        Self {
            instructor: instructor.to_string(),
            rating: Some(rating),
            difficulty: Some(difficulty),
        }
    }

    pub fn blank(instructor: &str) -> Self {
        Self {
            instructor: instructor.to_string(),
            rating: None,
            difficulty: None,
        }
    }
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn grades_csv(rows: &[GradeRow]) -> String {
    let mut out = String::from(GRADES_HEADER);
    out.push('\n');
    for row in rows {
        let _ = write!(
            out,
            "{},{},{}-{},{},{},{}",
            row.year,
            row.term,
            row.year,
            row.term.to_lowercase(),
            quote(&row.subject),
            quote(&row.number),
            quote(&row.title),
        );
        for count in row.counts {
            let _ = write!(out, ",{count}");
        }
        let _ = writeln!(out, ",{}", quote(&row.instructor));
    }
    out
}

pub fn ratings_csv(rows: &[RatingRow]) -> String {
    let mut out = String::from(RATINGS_HEADER);
    out.push('\n');
    for row in rows {
        let cell = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{},{},{},1",
            quote(&row.instructor),
            cell(row.rating),
            cell(row.difficulty),
        );
    }
    out
}

/// Both tables written to a temporary directory. The files live as long as
/// this value.
pub struct TempDataset {
    pub dir: tempfile::TempDir,
    pub grades: PathBuf,
    pub ratings: PathBuf,
}

impl TempDataset {
    pub fn write(grades: &[GradeRow], ratings: &[RatingRow]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let grades_path = dir.path().join("grades.csv");
        let ratings_path = dir.path().join("ratings.csv");
        std::fs::write(&grades_path, grades_csv(grades)).expect("write grades");
        std::fs::write(&ratings_path, ratings_csv(ratings)).expect("write ratings");
        Self {
            dir,
            grades: grades_path,
            ratings: ratings_path,
        }
    }

    pub fn config(&self) -> CourserecConfig {
        let mut config = CourserecConfig::default();
        config.data.grades_path = Some(self.grades.clone());
        config.data.ratings_path = Some(self.ratings.clone());
        config
    }
}

/// Five offerings. The first two are `Database Systems`/`Chang, Kevin C` as
/// CS 411 and CS 412: same title, instructor, subject and grade distribution,
/// differing only in course number, so both carry the same query key.
pub fn five_row_grades() -> Vec<GradeRow> {
    let shared = [8, 20, 6, 4, 3, 1, 0, 0, 0, 0, 0, 0, 0, 2];
    vec![
        GradeRow::new("CS", "411", "Database Systems", "Chang, Kevin C").counts(shared),
        GradeRow::new("CS", "412", "Database Systems", "Chang, Kevin C").counts(shared),
        GradeRow::new("CHEM", "232", "Elementary Organic Chemistry I", "Smith, Jane")
            .counts([1, 3, 4, 6, 9, 8, 7, 5, 3, 2, 1, 1, 2, 4]),
        GradeRow::new("HIST", "100", "Global History", "Lee, Min")
            .counts([0, 5, 5, 5, 5, 5, 0, 0, 0, 0, 0, 0, 0, 0]),
        GradeRow::new("CEE", "409", "Railroad Transportation Engrg", "Barkan, Christopher P")
            .counts([12, 9, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    ]
}

pub fn five_row_ratings() -> Vec<RatingRow> {
    vec![
        RatingRow::new("Chang Kevin C", 4.1, 3.3),
        RatingRow::new("Barkan Christopher P", 4.8, 2.2),
        RatingRow::new("Lee Min", 3.0, 3.0),
    ]
}

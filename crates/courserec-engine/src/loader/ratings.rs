//! Instructor rating table reader and centering.

use std::io::Read;

use courserec_core::config::CenteringConfig;
use courserec_core::constants::{COL_AVG_DIFFICULTY, COL_AVG_RATING, COL_PRIMARY_INSTRUCTOR};
use courserec_core::errors::LoadError;
use rustc_hash::FxHashMap;
use tracing::warn;

use super::schema::{self, ColumnIndex};

/// Means subtracted from the raw rating columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centering {
    pub rating_mean: f64,
    pub difficulty_mean: f64,
}

impl Centering {
    pub fn from_config(config: &CenteringConfig) -> Self {
        Self {
            rating_mean: config.effective_rating_mean(),
            difficulty_mean: config.effective_difficulty_mean(),
        }
    }
}

impl Default for Centering {
    fn default() -> Self {
        Self::from_config(&CenteringConfig::default())
    }
}

/// Centered (rating, difficulty) per raw instructor name.
///
/// A blank cell centers to 0, the neutral midpoint. When an instructor is
/// listed twice the first row wins.
#[derive(Debug, Clone, Default)]
pub struct RatingTable {
    by_instructor: FxHashMap<String, (f64, f64)>,
    duplicates: usize,
}

impl RatingTable {
    /// Centered (rating, difficulty), or `None` if the instructor is unrated.
    pub fn get(&self, instructor: &str) -> Option<(f64, f64)> {
        self.by_instructor.get(instructor).copied()
    }

    pub fn len(&self) -> usize {
        self.by_instructor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_instructor.is_empty()
    }

    /// Rows ignored because their instructor was already present.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Insert an already centered entry, keeping the first one for each name.
    pub fn insert(&mut self, instructor: String, rating: f64, difficulty: f64) {
        if self.by_instructor.contains_key(&instructor) {
            self.duplicates += 1;
            return;
        }
        self.by_instructor.insert(instructor, (rating, difficulty));
    }
}

/// Read the rating table and center both columns.
pub fn read_ratings<R: Read>(
    reader: R,
    source: &str,
    centering: Centering,
) -> Result<RatingTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| schema::malformed(source, e))?
        .clone();
    let columns = ColumnIndex::resolve(
        &headers,
        &[COL_PRIMARY_INSTRUCTOR, COL_AVG_RATING, COL_AVG_DIFFICULTY],
        source,
    )?;

    let mut table = RatingTable::default();
    for (idx, result) in csv_reader.records().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| schema::malformed(source, e))?;

        let instructor = columns.cell(&record, 0);
        if instructor.trim().is_empty() {
            continue;
        }
        let rating = schema::parse_optional_f64(columns.cell(&record, 1), source, row, COL_AVG_RATING)?;
        let difficulty =
            schema::parse_optional_f64(columns.cell(&record, 2), source, row, COL_AVG_DIFFICULTY)?;

        table.insert(
            instructor.to_string(),
            rating.map_or(0.0, |r| r - centering.rating_mean),
            difficulty.map_or(0.0, |d| d - centering.difficulty_mean),
        );
    }

    if table.duplicates > 0 {
        warn!(
            duplicates = table.duplicates,
            source, "duplicate instructors in rating table, first row kept"
        );
    }

    Ok(table)
}

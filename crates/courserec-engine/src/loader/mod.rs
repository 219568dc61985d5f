//! Dataset loading and aggregation.
//!
//! Reads the grade table and the rating table, sums grade counts per
//! (title, instructor, subject, number), converts them to fractions,
//! joins centered ratings, and normalizes the text columns.

pub mod aggregate;
pub mod grades;
pub mod ratings;
pub mod schema;

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use courserec_core::config::{CenteringConfig, DataConfig};
use courserec_core::errors::LoadError;
use courserec_core::types::Catalog;
use serde::Serialize;
use tracing::info;

pub use aggregate::{aggregate, AggregateStats};
pub use grades::{read_grades, GradeRecord, GradeTable};
pub use ratings::{read_ratings, Centering, RatingTable};

/// The catalog plus what was dropped or defaulted on the way.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub stats: LoadStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub grade_records: usize,
    pub skipped_grade_records: usize,
    pub rating_records: usize,
    pub duplicate_rating_records: usize,
    pub aggregate: AggregateStats,
}

/// Load both tables from the configured paths and build the catalog.
pub fn load_catalog(
    data: &DataConfig,
    centering: &CenteringConfig,
) -> Result<LoadedCatalog, LoadError> {
    let grades_path = data.effective_grades_path();
    let ratings_path = data.effective_ratings_path();
    let grades = open(&grades_path)?;
    let ratings = open(&ratings_path)?;
    read_catalog(
        grades,
        &grades_path.display().to_string(),
        ratings,
        &ratings_path.display().to_string(),
        centering,
    )
}

/// Build the catalog from two readers. `*_name` labels errors.
pub fn read_catalog<G: Read, R: Read>(
    grades: G,
    grades_name: &str,
    ratings: R,
    ratings_name: &str,
    centering: &CenteringConfig,
) -> Result<LoadedCatalog, LoadError> {
    let start = Instant::now();

    let grade_table = read_grades(grades, grades_name)?;
    let centering = Centering::from_config(centering);
    let rating_table = read_ratings(ratings, ratings_name, centering)?;

    let (catalog, aggregate_stats) = aggregate(&grade_table.records, &rating_table);
    if catalog.is_empty() {
        return Err(LoadError::EmptyDataset {
            path: grades_name.to_string(),
        });
    }

    let stats = LoadStats {
        grade_records: grade_table.records.len(),
        skipped_grade_records: grade_table.skipped,
        rating_records: rating_table.len(),
        duplicate_rating_records: rating_table.duplicates(),
        aggregate: aggregate_stats,
    };

    info!(
        rows = catalog.len(),
        grade_records = stats.grade_records,
        rated_instructors = stats.rating_records,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "catalog loaded"
    );

    Ok(LoadedCatalog { catalog, stats })
}

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

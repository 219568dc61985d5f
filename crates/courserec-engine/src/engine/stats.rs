//! Build statistics for an index.

use serde::Serialize;

use crate::loader::LoadStats;

/// Counts gathered while building a [`RecommenderIndex`](super::RecommenderIndex).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexStats {
    pub rows: usize,
    pub title_vocabulary: usize,
    pub instructor_vocabulary: usize,
    pub subject_vocabulary: usize,
    /// Rows whose (title, instructor) key was shadowed by an earlier row.
    pub duplicate_keys: usize,
    /// Rows with a zero grade vector.
    pub zero_student_rows: usize,
    /// Rows whose instructor has no rating entry.
    pub unrated_rows: usize,
    pub matrix_bytes: usize,
    pub build_ms: u64,
    /// Present when the index was built from files.
    pub load: Option<LoadStats>,
}

//! Resolves a (course, instructor) query to its nearest neighbours.

use std::cmp::Ordering;

use courserec_core::errors::QueryError;
use courserec_core::types::{Catalog, Recommendation, ScoredRecommendation};
use tracing::debug;

use crate::normalize::{normalize_instructor, normalize_title};
use crate::similarity::SimilarityMatrix;

use super::index::QueryIndex;

/// Borrowed view over the parts of an index a query needs.
#[derive(Debug, Clone, Copy)]
pub struct QueryResolver<'a> {
    catalog: &'a Catalog,
    matrix: &'a SimilarityMatrix,
    keys: &'a QueryIndex,
    top_k: usize,
}

impl<'a> QueryResolver<'a> {
    pub fn new(
        catalog: &'a Catalog,
        matrix: &'a SimilarityMatrix,
        keys: &'a QueryIndex,
        top_k: usize,
    ) -> Self {
        Self {
            catalog,
            matrix,
            keys,
            top_k,
        }
    }

    /// Normalize both query strings and find the query row.
    pub fn resolve(&self, course: &str, instructor: &str) -> Result<usize, QueryError> {
        let title = normalize_title(course);
        let instructor_key = normalize_instructor(instructor);
        self.keys
            .lookup(&title, &instructor_key)
            .ok_or_else(|| QueryError::NotFound {
                course: course.to_string(),
                instructor: instructor.to_string(),
            })
    }

    pub fn recommend(
        &self,
        course: &str,
        instructor: &str,
    ) -> Result<Vec<Recommendation>, QueryError> {
        Ok(self
            .recommend_scored(course, instructor)?
            .into_iter()
            .map(|scored| scored.recommendation)
            .collect())
    }

    pub fn recommend_scored(
        &self,
        course: &str,
        instructor: &str,
    ) -> Result<Vec<ScoredRecommendation>, QueryError> {
        let query = self.resolve(course, instructor)?;
        let ranked = rank_neighbours(self.matrix.row(query), query, self.top_k);
        debug!(query, returned = ranked.len(), "query resolved");

        Ok(ranked
            .into_iter()
            .filter_map(|(index, score)| {
                self.catalog.get(index).map(|row| ScoredRecommendation {
                    index,
                    score,
                    recommendation: row.summary(),
                })
            })
            .collect())
    }
}

/// Top `k` entries of `row` by descending score, skipping `exclude`.
/// Ties go to the lower index.
pub fn rank_neighbours(row: &[f64], exclude: usize, k: usize) -> Vec<(usize, f64)> {
    let mut candidates: Vec<(usize, f64)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|(index, _)| *index != exclude)
        .collect();

    let by_score = |a: &(usize, f64), b: &(usize, f64)| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    };

    if candidates.len() > k {
        candidates.select_nth_unstable_by(k, by_score);
        candidates.truncate(k);
    }
    candidates.sort_by(by_score);
    candidates
}

//! The immutable query-time index.

use courserec_core::errors::QueryError;
use courserec_core::types::{Catalog, Recommendation, ScoredRecommendation, SimilarityWeights};

use super::stats::IndexStats;
use crate::query::{QueryIndex, QueryResolver};
use crate::similarity::SimilarityMatrix;

/// Catalog, similarity matrix and key lookup, built once by
/// [`IndexBuilder`](super::IndexBuilder). Read-only afterwards, so it can be
/// shared across threads by reference or `Arc`.
#[derive(Debug, Clone)]
pub struct RecommenderIndex {
    catalog: Catalog,
    matrix: SimilarityMatrix,
    keys: QueryIndex,
    weights: SimilarityWeights,
    top_k: usize,
    stats: IndexStats,
}

impl RecommenderIndex {
    pub(crate) fn new(
        catalog: Catalog,
        matrix: SimilarityMatrix,
        keys: QueryIndex,
        weights: SimilarityWeights,
        top_k: usize,
        stats: IndexStats,
    ) -> Self {
        Self {
            catalog,
            matrix,
            keys,
            weights,
            top_k,
            stats,
        }
    }

    fn resolver(&self) -> QueryResolver<'_> {
        QueryResolver::new(&self.catalog, &self.matrix, &self.keys, self.top_k)
    }

    /// The `top_k` offerings most similar to (course, instructor).
    pub fn recommend(
        &self,
        course: &str,
        instructor: &str,
    ) -> Result<Vec<Recommendation>, QueryError> {
        self.resolver().recommend(course, instructor)
    }

    /// Like [`recommend`](Self::recommend), with row index and composite score.
    pub fn recommend_scored(
        &self,
        course: &str,
        instructor: &str,
    ) -> Result<Vec<ScoredRecommendation>, QueryError> {
        self.resolver().recommend_scored(course, instructor)
    }

    /// Catalog row a query resolves to.
    pub fn lookup(&self, course: &str, instructor: &str) -> Result<usize, QueryError> {
        self.resolver().resolve(course, instructor)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    pub fn weights(&self) -> SimilarityWeights {
        self.weights
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

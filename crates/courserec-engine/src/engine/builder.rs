//! Builds a [`RecommenderIndex`] from a catalog.

use std::time::{Duration, Instant};

use courserec_core::config::CourserecConfig;
use courserec_core::constants;
use courserec_core::errors::{BuildError, RecommenderError};
use courserec_core::traits::CancellationToken;
use courserec_core::types::{Catalog, SimilarityWeights};
use tracing::info;

use super::recommender::RecommenderIndex;
use super::stats::IndexStats;
use crate::features::build_features;
use crate::loader::{load_catalog, LoadStats, LoadedCatalog};
use crate::query::QueryIndex;
use crate::similarity::{build_composite, BuildGuard};

/// Builder for [`RecommenderIndex`].
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    weights: SimilarityWeights,
    top_k: usize,
    parallel: bool,
    max_catalog_rows: usize,
    timeout: Option<Duration>,
    cancel: Option<CancellationToken>,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self {
            weights: SimilarityWeights::default(),
            top_k: constants::DEFAULT_TOP_K,
            parallel: false,
            max_catalog_rows: constants::DEFAULT_MAX_CATALOG_ROWS,
            timeout: None,
            cancel: None,
        }
    }

    pub fn from_config(config: &CourserecConfig) -> Self {
        Self {
            weights: config.weights.effective(),
            top_k: config.query.effective_top_k(),
            parallel: config.similarity.effective_parallel(),
            max_catalog_rows: config.limits.effective_max_catalog_rows(),
            timeout: config.limits.effective_build_timeout(),
            cancel: None,
        }
    }

    pub fn weights(mut self, weights: SimilarityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn max_catalog_rows(mut self, max: usize) -> Self {
        self.max_catalog_rows = max;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Load the configured tables and build.
    pub fn build_from_config(
        &self,
        config: &CourserecConfig,
    ) -> Result<RecommenderIndex, RecommenderError> {
        let loaded = load_catalog(&config.data, &config.centering)?;
        Ok(self.build_loaded(loaded)?)
    }

    pub fn build_loaded(&self, loaded: LoadedCatalog) -> Result<RecommenderIndex, BuildError> {
        self.build_inner(loaded.catalog, Some(loaded.stats))
    }

    pub fn build(&self, catalog: Catalog) -> Result<RecommenderIndex, BuildError> {
        self.build_inner(catalog, None)
    }

    fn build_inner(
        &self,
        catalog: Catalog,
        load: Option<LoadStats>,
    ) -> Result<RecommenderIndex, BuildError> {
        if catalog.len() > self.max_catalog_rows {
            return Err(BuildError::CatalogTooLarge {
                rows: catalog.len(),
                max: self.max_catalog_rows,
            });
        }

        let start = Instant::now();
        let guard = BuildGuard::new(self.timeout, self.cancel.clone());

        let features = build_features(&catalog);
        let matrix = build_composite(&features, self.weights, &guard, self.parallel)?;
        let keys = QueryIndex::build(&catalog);

        let stats = IndexStats {
            rows: catalog.len(),
            title_vocabulary: features.title_vocabulary,
            instructor_vocabulary: features.instructor_vocabulary,
            subject_vocabulary: features.subject_vocabulary,
            duplicate_keys: keys.duplicate_keys(),
            zero_student_rows: catalog.iter().filter(|r| r.grades.is_zero()).count(),
            unrated_rows: catalog.iter().filter(|r| !r.rated).count(),
            matrix_bytes: matrix.size_bytes(),
            build_ms: start.elapsed().as_millis() as u64,
            load,
        };

        info!(
            rows = stats.rows,
            duplicate_keys = stats.duplicate_keys,
            build_ms = stats.build_ms,
            "recommender index ready"
        );

        Ok(RecommenderIndex::new(
            catalog,
            matrix,
            keys,
            self.weights,
            self.top_k,
            stats,
        ))
    }
}

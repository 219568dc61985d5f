//! Similarity build configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Compute matrix rows on the rayon pool. Default: false.
    pub parallel: Option<bool>,
}

impl SimilarityConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}

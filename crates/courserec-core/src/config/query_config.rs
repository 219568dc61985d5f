//! Query configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QueryConfig {
    /// Recommendations returned per query. Default: 10.
    pub top_k: Option<usize>,
}

impl QueryConfig {
    pub fn effective_top_k(&self) -> usize {
        self.top_k.unwrap_or(constants::DEFAULT_TOP_K)
    }
}

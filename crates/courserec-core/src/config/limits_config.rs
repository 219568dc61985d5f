//! Resource limits for the startup build.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum catalog rows before the N×N matrix is refused. Default: 20 000.
    pub max_catalog_rows: Option<usize>,
    /// Wall-clock budget for the matrix build in seconds. 0 or unset = unlimited.
    pub build_timeout_secs: Option<u64>,
}

impl LimitsConfig {
    pub fn effective_max_catalog_rows(&self) -> usize {
        self.max_catalog_rows
            .unwrap_or(constants::DEFAULT_MAX_CATALOG_ROWS)
    }

    pub fn effective_build_timeout(&self) -> Option<Duration> {
        match self.build_timeout_secs {
            Some(0) | None => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        }
    }
}

//! Rating centering configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Dataset-wide means subtracted from the raw rating columns. These are
/// external parameters and are not recomputed from the loaded table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CenteringConfig {
    /// Mean `AvgRating`. Default: 3.6.
    pub rating_mean: Option<f64>,
    /// Mean `AvgDifficulty`. Default: 2.9.
    pub difficulty_mean: Option<f64>,
}

impl CenteringConfig {
    pub fn effective_rating_mean(&self) -> f64 {
        self.rating_mean.unwrap_or(constants::DEFAULT_RATING_MEAN)
    }

    pub fn effective_difficulty_mean(&self) -> f64 {
        self.difficulty_mean
            .unwrap_or(constants::DEFAULT_DIFFICULTY_MEAN)
    }
}

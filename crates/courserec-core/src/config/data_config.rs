//! Dataset location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the two input tables live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Grade-distribution table. Default: `uiuc-gpa-dataset.csv`.
    pub grades_path: Option<PathBuf>,
    /// Instructor-rating table. Default: `profrating.csv`.
    pub ratings_path: Option<PathBuf>,
}

impl DataConfig {
    pub fn effective_grades_path(&self) -> PathBuf {
        self.grades_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_GRADES_PATH))
    }

    pub fn effective_ratings_path(&self) -> PathBuf {
        self.ratings_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_RATINGS_PATH))
    }
}

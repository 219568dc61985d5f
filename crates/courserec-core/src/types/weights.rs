//! Composite similarity weights.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Per-feature weights for the composite similarity.
/// A weight of 1.0 is a full vote; 0.0 disables the feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    pub title: f64,
    pub instructor: f64,
    pub subject: f64,
    pub grades: f64,
    pub rating: f64,
}

impl SimilarityWeights {
    /// (name, weight) pairs in feature order.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("title", self.title),
            ("instructor", self.instructor),
            ("subject", self.subject),
            ("grades", self.grades),
            ("rating", self.rating),
        ]
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            title: constants::DEFAULT_TITLE_WEIGHT,
            instructor: constants::DEFAULT_INSTRUCTOR_WEIGHT,
            subject: constants::DEFAULT_SUBJECT_WEIGHT,
            grades: constants::DEFAULT_GRADES_WEIGHT,
            rating: constants::DEFAULT_RATING_WEIGHT,
        }
    }
}

//! Composite similarity weight configuration.

use serde::{Deserialize, Serialize};

use crate::types::SimilarityWeights;

/// Optional per-feature weight overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeightsConfig {
    /// Course-title weight. Default: 1.0.
    pub title: Option<f64>,
    /// Instructor-identity weight. Default: 0.3.
    pub instructor: Option<f64>,
    /// Subject weight. Default: 0.3.
    pub subject: Option<f64>,
    /// Grade-distribution weight. Default: 1.0.
    pub grades: Option<f64>,
    /// Rating/difficulty weight. Default: 1.0.
    pub rating: Option<f64>,
}

impl WeightsConfig {
    /// Resolve overrides against the default weights.
    pub fn effective(&self) -> SimilarityWeights {
        let defaults = SimilarityWeights::default();
        SimilarityWeights {
            title: self.title.unwrap_or(defaults.title),
            instructor: self.instructor.unwrap_or(defaults.instructor),
            subject: self.subject.unwrap_or(defaults.subject),
            grades: self.grades.unwrap_or(defaults.grades),
            rating: self.rating.unwrap_or(defaults.rating),
        }
    }
}

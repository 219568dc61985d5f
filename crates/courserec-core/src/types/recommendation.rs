use serde::{Deserialize, Serialize};

/// A recommended course offering: the title, instructor and subject of a
/// catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub instructor: String,
    pub subject: String,
}

/// A recommendation together with its catalog index and composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    pub index: usize,
    pub score: f64,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

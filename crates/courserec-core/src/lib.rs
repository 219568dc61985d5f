//! # courserec-core
//!
//! Foundation crate for the course recommender.
//! Defines the catalog types, errors, config, tracing setup, and constants
//! shared by the engine and the CLI.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CourserecConfig;
pub use errors::{BuildError, ConfigError, LoadError, QueryError, RecommenderError};
pub use types::{
    Catalog, CatalogRow, CourseNumber, GradeCounts, GradeDistribution, Recommendation,
    ScoredRecommendation, SimilarityWeights,
};

//! Top-level error for the startup path.

use super::error_code::CourserecErrorCode;
use super::{BuildError, ConfigError, LoadError, QueryError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RecommenderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}

impl CourserecErrorCode for RecommenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Load(e) => e.error_code(),
            Self::Build(e) => e.error_code(),
            Self::Query(e) => e.error_code(),
        }
    }
}

//! Index build errors.

use super::error_code::{self, CourserecErrorCode};

/// Errors that can occur while building the similarity index.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Catalog has {rows} rows, limit is {max}")]
    CatalogTooLarge { rows: usize, max: usize },

    #[error("Index build exceeded {limit_ms}ms after {rows_done} of {rows} rows")]
    Timeout {
        limit_ms: u64,
        rows_done: usize,
        rows: usize,
    },

    #[error("Index build cancelled")]
    Cancelled,
}

impl CourserecErrorCode for BuildError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CatalogTooLarge { .. } => error_code::CATALOG_TOO_LARGE,
            Self::Timeout { .. } => error_code::BUILD_TIMEOUT,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}

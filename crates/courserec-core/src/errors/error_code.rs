//! CourserecErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable, machine-readable
/// code string alongside its human-readable message.
pub trait CourserecErrorCode {
    /// Returns the error code string (e.g., "LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const CATALOG_TOO_LARGE: &str = "CATALOG_TOO_LARGE";
pub const BUILD_TIMEOUT: &str = "BUILD_TIMEOUT";
pub const CANCELLED: &str = "CANCELLED";
pub const NOT_FOUND: &str = "NOT_FOUND";

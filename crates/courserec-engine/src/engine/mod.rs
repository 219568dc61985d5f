//! Startup orchestration and the immutable query-time index.

pub mod builder;
pub mod recommender;
pub mod stats;

pub use builder::IndexBuilder;
pub use recommender::RecommenderIndex;
pub use stats::IndexStats;

use courserec_core::config::CourserecConfig;
use courserec_core::errors::RecommenderError;
use courserec_core::types::Recommendation;

/// Load both tables, build the index and answer one warm-up query.
///
/// The index is returned alongside the results so callers can keep
/// querying it.
pub fn run(
    config: &CourserecConfig,
    course: &str,
    instructor: &str,
) -> Result<(RecommenderIndex, Vec<Recommendation>), RecommenderError> {
    let index = IndexBuilder::from_config(config).build_from_config(config)?;
    let results = index.recommend(course, instructor)?;
    Ok((index, results))
}

//! Catalog data model.

pub mod catalog;
pub mod grades;
pub mod recommendation;
pub mod weights;

pub use catalog::{Catalog, CatalogRow, CourseNumber};
pub use grades::{GradeCounts, GradeDistribution, GRADE_BUCKETS, GRADE_BUCKET_COUNT};
pub use recommendation::{Recommendation, ScoredRecommendation};
pub use weights::SimilarityWeights;

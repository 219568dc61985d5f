//! Configuration system for the recommender.
//! TOML-based, 3-layer resolution: CLI > env > project file > defaults.

pub mod centering_config;
pub mod courserec_config;
pub mod data_config;
pub mod limits_config;
pub mod query_config;
pub mod similarity_config;
pub mod weights_config;

pub use centering_config::CenteringConfig;
pub use courserec_config::{CliOverrides, CourserecConfig};
pub use data_config::DataConfig;
pub use limits_config::LimitsConfig;
pub use query_config::QueryConfig;
pub use similarity_config::SimilarityConfig;
pub use weights_config::WeightsConfig;

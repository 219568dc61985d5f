//! Top-level recommender configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    CenteringConfig, DataConfig, LimitsConfig, QueryConfig, SimilarityConfig, WeightsConfig,
};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COURSEREC_*`)
/// 3. Config file (`--config` path, else `courserec.toml` in the root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CourserecConfig {
    pub data: DataConfig,
    pub centering: CenteringConfig,
    pub weights: WeightsConfig,
    pub query: QueryConfig,
    pub similarity: SimilarityConfig,
    pub limits: LimitsConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub grades_path: Option<PathBuf>,
    pub ratings_path: Option<PathBuf>,
    pub top_k: Option<usize>,
    pub parallel: Option<bool>,
}

impl CourserecConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: explicit config file, else the project file if present.
        let explicit = cli_overrides.and_then(|cli| cli.config_path.as_ref());
        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(constants::CONFIG_FILE_NAME);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CourserecConfig) -> Result<(), ConfigError> {
        for (name, weight) in config.weights.effective().named() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("weights.{name}"),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        let centering = [
            ("centering.rating_mean", config.centering.effective_rating_mean()),
            (
                "centering.difficulty_mean",
                config.centering.effective_difficulty_mean(),
            ),
        ];
        for (field, value) in centering {
            if !value.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        if config.query.effective_top_k() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "query.top_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.limits.effective_max_catalog_rows() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "limits.max_catalog_rows".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CourserecConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CourserecConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut CourserecConfig, other: &CourserecConfig) {
        // Data
        if other.data.grades_path.is_some() {
            base.data.grades_path = other.data.grades_path.clone();
        }
        if other.data.ratings_path.is_some() {
            base.data.ratings_path = other.data.ratings_path.clone();
        }

        // Centering
        if other.centering.rating_mean.is_some() {
            base.centering.rating_mean = other.centering.rating_mean;
        }
        if other.centering.difficulty_mean.is_some() {
            base.centering.difficulty_mean = other.centering.difficulty_mean;
        }

        // Weights
        if other.weights.title.is_some() {
            base.weights.title = other.weights.title;
        }
        if other.weights.instructor.is_some() {
            base.weights.instructor = other.weights.instructor;
        }
        if other.weights.subject.is_some() {
            base.weights.subject = other.weights.subject;
        }
        if other.weights.grades.is_some() {
            base.weights.grades = other.weights.grades;
        }
        if other.weights.rating.is_some() {
            base.weights.rating = other.weights.rating;
        }

        // Query
        if other.query.top_k.is_some() {
            base.query.top_k = other.query.top_k;
        }

        // Similarity
        if other.similarity.parallel.is_some() {
            base.similarity.parallel = other.similarity.parallel;
        }

        // Limits
        if other.limits.max_catalog_rows.is_some() {
            base.limits.max_catalog_rows = other.limits.max_catalog_rows;
        }
        if other.limits.build_timeout_secs.is_some() {
            base.limits.build_timeout_secs = other.limits.build_timeout_secs;
        }
    }

    /// Apply environment variable overrides from the process environment.
    fn apply_env_overrides(config: &mut CourserecConfig) {
        Self::apply_env_with(config, |key| std::env::var(key).ok());
    }

    /// Apply environment overrides from an arbitrary lookup.
    /// Pattern: `COURSEREC_GRADES_PATH`, `COURSEREC_TOP_K`, etc.
    /// Values that fail to parse are ignored with a warning.
    pub fn apply_env_with<F>(config: &mut CourserecConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("COURSEREC_GRADES_PATH") {
            config.data.grades_path = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("COURSEREC_RATINGS_PATH") {
            config.data.ratings_path = Some(PathBuf::from(val));
        }
        if let Some(v) = parse_env(&lookup, "COURSEREC_TOP_K") {
            config.query.top_k = Some(v);
        }
        if let Some(v) = parse_env(&lookup, "COURSEREC_RATING_MEAN") {
            config.centering.rating_mean = Some(v);
        }
        if let Some(v) = parse_env(&lookup, "COURSEREC_DIFFICULTY_MEAN") {
            config.centering.difficulty_mean = Some(v);
        }
        if let Some(v) = parse_env(&lookup, "COURSEREC_PARALLEL") {
            config.similarity.parallel = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut CourserecConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.grades_path {
            config.data.grades_path = Some(v.clone());
        }
        if let Some(ref v) = cli.ratings_path {
            config.data.ratings_path = Some(v.clone());
        }
        if let Some(v) = cli.top_k {
            config.query.top_k = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.similarity.parallel = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

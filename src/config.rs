//! Configuration loading and validation
//!
//! The run configuration is a JSON object with exactly six required
//! parameters. Loading and validation are separate steps: `load` turns a
//! file into raw JSON, `validate` turns raw JSON into a typed [`Config`].
//! Presence of every parameter is checked before any type check, so the
//! first reported error is deterministic regardless of what else is wrong.

use crate::error::ConfigError;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Required configuration parameters, in validation and report order.
pub const REQUIRED_PARAMS: [&str; 6] = [
    "package_name",
    "repo_url_or_path",
    "test_repo_mode",
    "package_version",
    "max_depth",
    "filter_substring",
];

/// Validated, immutable run configuration.
///
/// `max_depth` and `filter_substring` are accepted and reported but not
/// consulted by the fetch pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Name of the package whose dependencies are listed
    pub package_name: String,
    /// Base URL or filesystem path of the repository root
    pub repo_url_or_path: String,
    /// When set, all network access is suppressed
    pub test_repo_mode: bool,
    /// Version identifier, not semantically parsed
    pub package_version: String,
    /// Accepted but currently inert
    pub max_depth: u64,
    /// Accepted but currently inert, may be empty
    pub filter_substring: String,
}

impl Config {
    /// Read a configuration file into raw JSON.
    pub fn load(path: &Path) -> Result<Value, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        serde_json::from_str(&content).map_err(|e| ConfigError::parse_error(e.to_string()))
    }

    /// Validate raw JSON into a typed configuration.
    ///
    /// Reports the first absent parameter, then the first wrong-typed one,
    /// in [`REQUIRED_PARAMS`] order.
    pub fn validate(raw: &Value) -> Result<Config, ConfigError> {
        let object = match raw.as_object() {
            Some(object) if !object.is_empty() => object,
            _ => return Err(ConfigError::NotLoaded),
        };

        for param in REQUIRED_PARAMS {
            if !object.contains_key(param) {
                return Err(ConfigError::missing_field(param));
            }
        }

        let string_param = |field: &'static str| {
            object[field]
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| ConfigError::type_mismatch(field, "a string"))
        };

        let package_name = string_param("package_name")?;
        let repo_url_or_path = string_param("repo_url_or_path")?;
        let test_repo_mode = object["test_repo_mode"]
            .as_bool()
            .ok_or_else(|| ConfigError::type_mismatch("test_repo_mode", "a boolean"))?;
        let package_version = string_param("package_version")?;
        let max_depth = object["max_depth"]
            .as_u64()
            .ok_or_else(|| ConfigError::type_mismatch("max_depth", "a non-negative integer"))?;
        let filter_substring = string_param("filter_substring")?;

        Ok(Config {
            package_name,
            repo_url_or_path,
            test_repo_mode,
            package_version,
            max_depth,
            filter_substring,
        })
    }

    /// Load and validate a configuration file in one step.
    pub fn load_and_validate(path: &Path) -> Result<Config, ConfigError> {
        let raw = Self::load(path)?;
        Self::validate(&raw)
    }
}

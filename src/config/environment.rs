// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::errors::AppError;
use crate::intelligence::OutputMode;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable names
pub mod env_vars {
    /// Model output mode (`6`/`predicted` or `5`/`supplied`)
    pub const OUTPUT_MODE: &str = "RECOMMENDER_OUTPUT_MODE";
    /// Path of the artifact bundle JSON
    pub const ARTIFACTS: &str = "RECOMMENDER_ARTIFACTS";
    /// Seed for reproducible meal sampling
    pub const SEED: &str = "RECOMMENDER_SEED";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default artifact bundle location
pub const DEFAULT_ARTIFACTS_PATH: &str = "artifacts/bundle.json";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable is set but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}

/// Environment type for logging and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Recommender runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// Which model outputs are expected
    pub output_mode: OutputMode,
    /// Artifact bundle location
    pub artifacts_path: PathBuf,
    /// Seed for reproducible meal sampling; random when absent
    pub seed: Option<u64>,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::default(),
            artifacts_path: PathBuf::from(DEFAULT_ARTIFACTS_PATH),
            seed: None,
            environment: Environment::default(),
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from environment variables
    ///
    /// Absent variables take their defaults; present but malformed ones are errors.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable holds an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let output_mode = match read_var(env_vars::OUTPUT_MODE)? {
            Some(value) => OutputMode::from_str_opt(&value).ok_or_else(|| {
                ConfigError::Parse(format!(
                    "{} must be one of 6, predicted, 5, supplied (got '{value}')",
                    env_vars::OUTPUT_MODE
                ))
            })?,
            None => defaults.output_mode,
        };

        let artifacts_path =
            read_var(env_vars::ARTIFACTS)?.map_or(defaults.artifacts_path, PathBuf::from);

        let seed = read_var(env_vars::SEED)?
            .map(|value| {
                value.trim().parse::<u64>().map_err(|e| {
                    ConfigError::Parse(format!("{} must be an unsigned integer: {e}", env_vars::SEED))
                })
            })
            .transpose()?;

        let environment = read_var(env_vars::ENVIRONMENT)?
            .map_or(defaults.environment, |value| {
                Environment::from_str_or_default(&value)
            });

        Ok(Self {
            output_mode,
            artifacts_path,
            seed,
            environment,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrition recommender configuration: mode={}, artifacts={}, seed={}, environment={}",
            self.output_mode,
            self.artifacts_path.display(),
            self.seed
                .map_or_else(|| "random".to_owned(), |seed| seed.to_string()),
            self.environment
        )
    }
}

fn read_var(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

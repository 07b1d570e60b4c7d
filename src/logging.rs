// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, formatters, and the stderr writer so stdout stays machine-readable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Log lines always go to stderr: the CLI prints its JSON result on stdout.

use crate::constants::service_names;
use crate::models::Recommendation;
use anyhow::{anyhow, Result};
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    filter::Directive,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty output
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::NUTRITION_RECOMMENDER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |value| LogFormat::from_str_lossy(&value));
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // Production gets location and thread detail by default
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::NUTRITION_RECOMMENDER.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        self.filter_from(env::var("RUST_LOG").ok().as_deref())
    }

    /// Build the level filter, keeping this crate at the configured level
    ///
    /// A multi-directive `RUST_LOG` is used as given.
    fn filter_from(&self, rust_log: Option<&str>) -> EnvFilter {
        let mut filter = rust_log.map_or_else(|| EnvFilter::new(&self.level), EnvFilter::new);
        let level = self.level.trim().to_lowercase();
        if level.parse::<Level>().is_ok() {
            if let Ok(directive) = format!("nutrition_recommender={level}").parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }
        filter
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(self.span_events()),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(self.span_events()),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Nutrition recommender starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Logging configured: {config_summary}");
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured events for finished recommendations
pub struct RecommendationLogger;

impl RecommendationLogger {
    /// Log the outcome of one recommendation
    pub fn log_recommendation(recommendation: &Recommendation, duration_ms: u64) {
        let plan = &recommendation.plan;
        info!(
            plan.target_calories = plan.target_calories,
            plan.exercise_minutes = plan.exercise_time_minutes,
            plan.dietary_restriction = %plan.dietary_restriction,
            meal_plan.days = recommendation.weekly_meal_plan.len(),
            duration_ms = duration_ms,
            "Recommendation served"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_lossy("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_lossy("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_lossy("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_filter_keeps_crate_at_configured_level() {
        let config = LoggingConfig {
            level: "debug".into(),
            ..LoggingConfig::default()
        };
        let filter = config.filter_from(None).to_string().to_lowercase();
        assert!(filter.contains("nutrition_recommender=debug"), "{filter}");
    }

    #[test]
    fn test_filter_uses_multi_directive_rust_log_as_given() {
        let config = LoggingConfig {
            level: "warn,foo=debug".into(),
            ..LoggingConfig::default()
        };
        let filter = config
            .filter_from(Some("warn,foo=debug"))
            .to_string()
            .to_lowercase();
        assert!(filter.contains("foo=debug"), "{filter}");
        assert!(filter.contains("warn"), "{filter}");
        assert!(!filter.contains("info"), "{filter}");
    }

    #[test]
    fn test_default_service_name() {
        let config = LoggingConfig::default();
        assert_eq!(config.service_name, "nutrition-recommender");
        assert_eq!(config.format, LogFormat::Pretty);
    }
}

// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment-variable parsing, defaults and malformed-value handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrition_recommender::config::environment::env_vars;
use nutrition_recommender::config::{
    ConfigError, Environment, RecommenderConfig, DEFAULT_ARTIFACTS_PATH,
};
use nutrition_recommender::intelligence::OutputMode;
use nutrition_recommender::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const ALL_VARS: [&str; 4] = [
    env_vars::OUTPUT_MODE,
    env_vars::ARTIFACTS,
    env_vars::SEED,
    env_vars::ENVIRONMENT,
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = RecommenderConfig::from_env().unwrap();

    assert_eq!(config, RecommenderConfig::default());
    assert_eq!(config.output_mode, OutputMode::PredictedRestriction);
    assert_eq!(config.artifacts_path, PathBuf::from(DEFAULT_ARTIFACTS_PATH));
    assert_eq!(config.seed, None);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_reads_every_variable() {
    clear_env();
    env::set_var(env_vars::OUTPUT_MODE, "5");
    env::set_var(env_vars::ARTIFACTS, "/srv/models/bundle.json");
    env::set_var(env_vars::SEED, " 1234 ");
    env::set_var(env_vars::ENVIRONMENT, "production");

    let config = RecommenderConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.output_mode, OutputMode::SuppliedRestriction);
    assert_eq!(
        config.artifacts_path,
        PathBuf::from("/srv/models/bundle.json")
    );
    assert_eq!(config.seed, Some(1234));
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_invalid_output_mode_is_rejected() {
    clear_env();
    env::set_var(env_vars::OUTPUT_MODE, "7");

    let result = RecommenderConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(message)) if message.contains("RECOMMENDER_OUTPUT_MODE")));
}

#[test]
#[serial]
fn test_invalid_seed_is_rejected() {
    clear_env();
    env::set_var(env_vars::SEED, "-3");

    let result = RecommenderConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_summary_mentions_mode_and_seed() {
    let config = RecommenderConfig {
        seed: Some(7),
        ..RecommenderConfig::default()
    };

    let summary = config.summary();

    assert!(summary.contains("6-output"));
    assert!(summary.contains("seed=7"));
    assert!(RecommenderConfig::default().summary().contains("seed=random"));
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "recommender-canary");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "recommender-canary");
}

// ABOUTME: Configuration module for recommender runtime settings
// ABOUTME: Re-exports environment-driven configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the nutrition recommender
//!
//! - **Environment**: output mode, artifact location, sampling seed and
//!   deployment environment, read from environment variables

/// Environment-driven configuration
pub mod environment;

pub use environment::{ConfigError, Environment, RecommenderConfig, DEFAULT_ARTIFACTS_PATH};

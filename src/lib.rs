// ABOUTME: Main library entry point for the nutrition recommender
// ABOUTME: Turns a user profile into nutrition targets, exercise time and a weekly meal plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Recommender
//!
//! Runs a pre-trained multi-output regression model over a user profile and
//! post-processes its outputs with fixed business rules: goal-adjusted calorie
//! target, recommended exercise time, dietary restriction and a seven-day meal
//! plan sampled from a catalog.
//!
//! ## Architecture
//!
//! - **Artifacts**: one JSON bundle with encoders, scaler, model and meal catalog
//! - **Intelligence**: encoder, feature builder, predictor, rules and meal sampler
//! - **Config**: environment-driven runtime settings
//! - **Logging**: structured `tracing` output on stderr
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrition_recommender::artifacts::ArtifactBundle;
//! use nutrition_recommender::config::RecommenderConfig;
//! use nutrition_recommender::errors::AppResult;
//! use nutrition_recommender::models::ProfileRequest;
//!
//! fn main() -> AppResult<()> {
//!     let config = RecommenderConfig::from_env()?;
//!     let recommender =
//!         ArtifactBundle::from_path(&config.artifacts_path)?.into_recommender(config.output_mode)?;
//!
//!     let request = ProfileRequest::from_json_str(
//!         r#"{"age": 30, "gender": "Male", "weight_kg": 80, "height_cm": 180,
//!             "activity_level": "Moderately Active", "health_condition": "None",
//!             "goal": "lose weight"}"#,
//!     )?;
//!     let recommendation = recommender.recommend(&request.validate()?)?;
//!     println!("{}", serde_json::to_string_pretty(&recommendation)?);
//!     Ok(())
//! }
//! ```

pub use recommender_core::{constants, errors, models};

/// Artifact bundle loading and startup checks
pub mod artifacts;

/// Environment-driven configuration
pub mod config;

/// Prediction-to-recommendation pipeline
pub mod intelligence;

/// Structured logging setup
pub mod logging;

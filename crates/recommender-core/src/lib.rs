// ABOUTME: Core types and constants for the nutrition recommender
// ABOUTME: Foundation crate with error handling, data models, and business-rule constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recommender Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! recommender. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Pipeline error taxonomy (`RecommendationError`) and the boundary `AppError`
//! - **models**: User profile, nutrition plan, meal catalog and weekly plan types
//! - **constants**: Fixed business-rule tables (goal offsets, exercise heuristics)

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Fixed business-rule constants organized by domain
pub mod constants;

/// Core data models (profiles, plans, meal catalog)
pub mod models;

// ABOUTME: Error taxonomy of the prediction-to-recommendation pipeline
// ABOUTME: One variant per failure category, each mapped to a stable ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pipeline Error Types
//!
//! Every stage of the recommendation pipeline returns
//! `Result<_, RecommendationError>`. All variants are terminal for the request:
//! the pipeline is a pure function of its inputs and the loaded artifacts, so a
//! retry with the same input fails the same way.

use super::ErrorCode;
use crate::models::CategoricalField;
use serde_json::json;
use thiserror::Error;

/// Errors produced while turning a profile into a recommendation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendationError {
    /// A required profile field is missing or malformed
    #[error("invalid field '{field}': {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Categorical value outside the field's vocabulary
    #[error("unknown {field} value '{value}'")]
    UnknownCategory {
        /// Field whose vocabulary was consulted
        field: CategoricalField,
        /// Rejected label
        value: String,
    },

    /// Code outside `[0, vocabulary_size)`
    #[error("code {code} is out of range for {field} (vocabulary size {vocabulary_size})")]
    InvalidCode {
        /// Field whose vocabulary was consulted
        field: CategoricalField,
        /// Rejected code
        code: i64,
        /// Number of known labels
        vocabulary_size: usize,
    },

    /// Feature vector length differs from the scaler's fitted width
    #[error("feature vector has {actual} values, scaler expects {expected}")]
    Scaling {
        /// Width the scaler was fitted on
        expected: usize,
        /// Width of the vector handed in
        actual: usize,
    },

    /// The regression model itself failed
    #[error("model inference failed: {0}")]
    ModelInference(String),

    /// The regression model returned an unusable output vector
    #[error("model returned {actual} outputs, expected {expected}")]
    ModelOutput {
        /// Length required by the configured output mode
        expected: usize,
        /// Length actually returned
        actual: usize,
    },

    /// Neither the resolved nor the fallback restriction has catalog entries
    #[error("no meal plans available for '{restriction}' or fallback '{fallback}'")]
    NoMealsAvailable {
        /// Restriction resolved for the request
        restriction: String,
        /// Default restriction tried afterwards
        fallback: String,
    },
}

impl RecommendationError {
    /// Create a "missing field" validation error
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "field is required".to_owned(),
        }
    }

    /// Create a "malformed field" validation error
    #[must_use]
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Stable error code for this failure category
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::ValidationFailed,
            Self::UnknownCategory { .. } => ErrorCode::UnknownCategory,
            Self::InvalidCode { .. } => ErrorCode::InvalidCode,
            Self::Scaling { .. } => ErrorCode::ScalingFailed,
            Self::ModelInference(_) => ErrorCode::ModelInferenceFailed,
            Self::ModelOutput { .. } => ErrorCode::ModelOutputInvalid,
            Self::NoMealsAvailable { .. } => ErrorCode::NoMealsAvailable,
        }
    }

    /// True when the caller sent a bad request (4xx) rather than the pipeline failing
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Structured context for error responses
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Validation { field, .. } => Some(json!({ "field": field })),
            Self::UnknownCategory { field, value } => Some(json!({
                "field": field.artifact_key(),
                "value": value,
            })),
            Self::InvalidCode {
                field,
                code,
                vocabulary_size,
            } => Some(json!({
                "field": field.artifact_key(),
                "code": code,
                "vocabulary_size": vocabulary_size,
            })),
            Self::Scaling { expected, actual } | Self::ModelOutput { expected, actual } => {
                Some(json!({ "expected": expected, "actual": actual }))
            }
            Self::NoMealsAvailable {
                restriction,
                fallback,
            } => Some(json!({ "restriction": restriction, "fallback": fallback })),
            Self::ModelInference(_) => None,
        }
    }
}

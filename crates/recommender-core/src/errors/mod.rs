// ABOUTME: Unified error handling with standard error codes and HTTP status mapping
// ABOUTME: Defines ErrorCode, AppError, ErrorResponse and re-exports the pipeline error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Two layers:
//! - [`RecommendationError`] is the discriminated error result of the
//!   recommendation pipeline, one variant per failure category.
//! - [`AppError`] is the boundary error a transport or CLI surfaces, carrying a
//!   stable [`ErrorCode`], a message and an optional request id.

mod pipeline;

pub use pipeline::RecommendationError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Request validation (3000-3999)
    /// A required profile field is missing or malformed
    #[serde(rename = "VALIDATION_FAILED")]
    ValidationFailed = 3000,

    // Catalog lookups (4000-4999)
    /// No meals exist for the resolved or fallback restriction
    #[serde(rename = "NO_MEALS_AVAILABLE")]
    NoMealsAvailable = 4000,

    // Inference pipeline (7000-7999)
    /// Categorical value outside the trained vocabulary
    #[serde(rename = "UNKNOWN_CATEGORY")]
    UnknownCategory = 7000,
    /// Decode of a code outside the vocabulary range
    #[serde(rename = "INVALID_CODE")]
    InvalidCode = 7001,
    /// Feature vector dimensionality does not match the scaler
    #[serde(rename = "SCALING_FAILED")]
    ScalingFailed = 7002,
    /// Underlying regression model failed
    #[serde(rename = "MODEL_INFERENCE_FAILED")]
    ModelInferenceFailed = 7003,
    /// Regression model returned the wrong number of outputs
    #[serde(rename = "MODEL_OUTPUT_INVALID")]
    ModelOutputInvalid = 7004,

    // Configuration and startup (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,
    /// Model, scaler, encoder or catalog artifacts could not be loaded
    #[serde(rename = "ARTIFACT_LOAD_FAILED")]
    ArtifactLoadFailed = 6001,

    // Internal errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::ValidationFailed => 400,

            // 404 Not Found
            Self::NoMealsAvailable => 404,

            // 500 Internal Server Error
            Self::UnknownCategory
            | Self::InvalidCode
            | Self::ScalingFailed
            | Self::ModelInferenceFailed
            | Self::ModelOutputInvalid
            | Self::ConfigInvalid
            | Self::ArtifactLoadFailed
            | Self::InternalError
            | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ValidationFailed => "The request profile is missing a field or has a malformed value",
            Self::NoMealsAvailable => {
                "No meal plans available for your dietary restriction or fallback"
            }
            Self::UnknownCategory => "A categorical value is not part of the trained vocabulary",
            Self::InvalidCode => "A category code is outside the trained vocabulary",
            Self::ScalingFailed => "The feature vector does not match the scaler dimensions",
            Self::ModelInferenceFailed => "The prediction model failed",
            Self::ModelOutputInvalid => "Unexpected output size from model",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::ArtifactLoadFailed => "Model artifacts could not be loaded",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Serialized names double as the display form
        let name = match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::NoMealsAvailable => "NO_MEALS_AVAILABLE",
            Self::UnknownCategory => "UNKNOWN_CATEGORY",
            Self::InvalidCode => "INVALID_CODE",
            Self::ScalingFailed => "SCALING_FAILED",
            Self::ModelInferenceFailed => "MODEL_INFERENCE_FAILED",
            Self::ModelOutputInvalid => "MODEL_OUTPUT_INVALID",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::ArtifactLoadFailed => "ARTIFACT_LOAD_FAILED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
        };
        f.write_str(name)
    }
}

/// Unified error type for the application boundary
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for tracing
    pub request_id: Option<String>,
    /// Additional structured context
    pub details: Option<serde_json::Value>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
            details: None,
            source: None,
        }
    }

    /// Add a request ID to the error
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Artifact loading failure
    #[must_use]
    pub fn artifact(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArtifactLoadFailed, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<RecommendationError> for AppError {
    fn from(error: RecommendationError) -> Self {
        let code = error.code();
        let details = error.details();
        let mut app_error = Self::new(code, error.to_string());
        if let Some(details) = details {
            app_error = app_error.with_details(details);
        }
        app_error
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP-style error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Request ID for correlation with logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Structured context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.request_id,
                details: error.details,
            },
        }
    }
}

// ABOUTME: Artifact bundle loading and startup consistency checks
// ABOUTME: Parses encoders, scaler, model and meal catalog from JSON and builds the Recommender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Artifact Bundle
//!
//! The pre-trained encoders, scaler, regression model and meal catalog ship as
//! one JSON document. Loading happens once, before any request is served;
//! [`ArtifactBundle::into_recommender`] is the initialization barrier that
//! rejects inconsistent artifacts so the pipeline never sees them.

use crate::constants::dietary;
use crate::constants::features::{FEATURE_COUNT, FEATURE_NAMES};
use crate::errors::{AppError, RecommendationError};
use crate::intelligence::{
    CategoricalEncoder, LabelVocabulary, LinearMultiOutputModel, MealCatalog,
    MultiOutputPredictor, OutputMode, Predictor, Recommender, StandardScaler, VocabularyError,
};
use crate::models::{CategoricalField, MealCatalogEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Artifact loading failures
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The bundle file could not be read
    #[error("failed to read artifact bundle {path}: {source}")]
    Io {
        /// Bundle path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The bundle is not valid JSON for the expected shape
    #[error("failed to parse artifact bundle: {0}")]
    Parse(#[from] serde_json::Error),

    /// An encoder vocabulary is missing or malformed
    #[error("invalid encoder artifact: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// Scaler width differs from the feature vector width
    #[error("scaler is fitted on {actual} features, expected {expected}")]
    ScalerDimension {
        /// Feature vector width
        expected: usize,
        /// Scaler width
        actual: usize,
    },

    /// Model input width differs from the feature vector width
    #[error("model expects {actual} input features, expected {expected}")]
    ModelInput {
        /// Feature vector width
        expected: usize,
        /// Model input width
        actual: usize,
    },

    /// Model output count does not match the configured mode
    #[error("model produces {actual} outputs, {mode} requires {expected}")]
    ModelOutput {
        /// Configured output mode
        mode: OutputMode,
        /// Outputs required by the mode
        expected: usize,
        /// Outputs the model produces
        actual: usize,
    },

    /// A scaler or model artifact is internally inconsistent
    #[error("invalid model artifact: {0}")]
    Model(#[from] RecommendationError),
}

impl From<ArtifactError> for AppError {
    fn from(error: ArtifactError) -> Self {
        Self::artifact(error.to_string())
    }
}

/// Scaler statistics as stored in the bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    /// Per-feature mean
    pub mean: Vec<f64>,
    /// Per-feature standard deviation
    pub scale: Vec<f64>,
}

/// Multi-output linear model as stored in the bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// One coefficient row per output
    pub coefficients: Vec<Vec<f64>>,
    /// One intercept per output
    pub intercepts: Vec<f64>,
}

/// Everything the pipeline needs, as loaded from storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactBundle {
    /// Label vocabulary per categorical field
    pub encoders: BTreeMap<CategoricalField, LabelVocabulary>,
    /// Fitted standardization statistics
    pub scaler: ScalerArtifact,
    /// Regression model parameters
    pub model: ModelArtifact,
    /// Meal catalog keyed by restriction label
    pub meal_catalog: Vec<MealCatalogEntry>,
}

impl ArtifactBundle {
    /// Read and parse a bundle file
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Io` or `ArtifactError::Parse`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let body = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle = Self::from_json_str(&body)?;
        info!(
            artifacts.path = %path.display(),
            artifacts.catalog_entries = bundle.meal_catalog.len(),
            "Artifact bundle loaded"
        );
        Ok(bundle)
    }

    /// Parse a bundle from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Parse` if the JSON does not match the bundle shape
    pub fn from_json_str(body: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check consistency and build the shared, read-only recommender
    ///
    /// # Errors
    ///
    /// Returns an `ArtifactError` describing the first inconsistency found
    pub fn into_recommender(self, mode: OutputMode) -> Result<Recommender, ArtifactError> {
        let encoder = CategoricalEncoder::new(self.encoders)?;

        let scaler = StandardScaler::new(self.scaler.mean, self.scaler.scale)?;
        if scaler.dimension() != FEATURE_COUNT {
            return Err(ArtifactError::ScalerDimension {
                expected: FEATURE_COUNT,
                actual: scaler.dimension(),
            });
        }

        let model = LinearMultiOutputModel::new(self.model.coefficients, self.model.intercepts)?;
        if model.input_len() != FEATURE_COUNT {
            return Err(ArtifactError::ModelInput {
                expected: FEATURE_COUNT,
                actual: model.input_len(),
            });
        }
        if model.output_len() != mode.output_len() {
            return Err(ArtifactError::ModelOutput {
                mode,
                expected: mode.output_len(),
                actual: model.output_len(),
            });
        }

        let restrictions = encoder.vocabulary(CategoricalField::DietaryRestriction);
        for entry in &self.meal_catalog {
            if restrictions.transform(&entry.dietary_restriction).is_none() {
                warn!(
                    restriction = %entry.dietary_restriction,
                    "Meal catalog entry uses a restriction outside the trained vocabulary"
                );
            }
        }
        let default_restriction = restrictions
            .inverse_transform(dietary::DEFAULT_RESTRICTION_CODE)
            .unwrap_or(dietary::DEFAULT_RESTRICTION_LABEL)
            .to_owned();
        let catalog = MealCatalog::new(self.meal_catalog, default_restriction);

        info!(
            mode = %mode,
            features = ?FEATURE_NAMES,
            catalog.entries = catalog.len(),
            catalog.default_restriction = %catalog.default_restriction(),
            "Recommender initialized"
        );
        Ok(Recommender::new(
            encoder,
            scaler,
            Predictor::new(Arc::new(model), mode),
            catalog,
        ))
    }
}

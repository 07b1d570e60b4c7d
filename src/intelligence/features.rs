// ABOUTME: Feature vector assembly and pre-fit standardization for model input
// ABOUTME: Builds the fixed-order numeric vector from an encoded profile and scales it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feature Vector Builder
//!
//! Input order is fixed at training time:
//! `[age, gender_code, weight_kg, height_cm, activity_code, health_code]`.
//! Dietary restriction is never a model input.

use crate::constants::features::FEATURE_COUNT;
use crate::errors::RecommendationError;
use crate::models::EncodedProfile;

/// Assemble the model input vector
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: vocabulary codes are tiny
pub fn build(encoded: &EncodedProfile) -> [f64; FEATURE_COUNT] {
    [
        f64::from(encoded.age),
        encoded.gender_code as f64,
        encoded.weight_kg,
        encoded.height_cm,
        encoded.activity_code as f64,
        encoded.health_code as f64,
    ]
}

/// Pre-fit per-feature standardization: `(x - mean) / scale`
///
/// Statistics are never recomputed at request time.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Build a scaler from fitted statistics
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::Scaling` if `mean` and `scale` differ in length
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, RecommendationError> {
        if mean.len() != scale.len() {
            return Err(RecommendationError::Scaling {
                expected: mean.len(),
                actual: scale.len(),
            });
        }
        Ok(Self { mean, scale })
    }

    /// Number of features the scaler was fitted on
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.mean.len()
    }

    /// Standardize a feature vector
    ///
    /// A zero scale leaves the centered value unscaled, mirroring how
    /// constant training features are fitted.
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::Scaling` if `features` has the wrong dimensionality
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, RecommendationError> {
        if features.len() != self.dimension() {
            return Err(RecommendationError::Scaling {
                expected: self.dimension(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(value, (mean, scale))| {
                let centered = value - mean;
                if *scale == 0.0 {
                    centered
                } else {
                    centered / scale
                }
            })
            .collect())
    }
}

// ABOUTME: Multi-output regression predictor wrapper with output arity validation
// ABOUTME: Defines the MultiOutputPredictor trait, a linear model artifact, and RawPrediction unpacking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Multi-Output Predictor
//!
//! The regression model is a black box behind [`MultiOutputPredictor`]. The
//! [`Predictor`] wrapper invokes it once per request and checks the output
//! length against the configured [`OutputMode`], failing fast on mismatch.

use crate::errors::RecommendationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which outputs the deployed model produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Six outputs: the model also predicts the dietary restriction code
    #[default]
    PredictedRestriction,
    /// Five outputs: the caller supplies the dietary restriction
    SuppliedRestriction,
}

impl OutputMode {
    /// Number of model outputs in this mode
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::PredictedRestriction => 6,
            Self::SuppliedRestriction => 5,
        }
    }

    /// Parse from a configuration string
    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "6" | "predicted" | "predicted_restriction" => Some(Self::PredictedRestriction),
            "5" | "supplied" | "supplied_restriction" => Some(Self::SuppliedRestriction),
            _ => None,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PredictedRestriction => write!(f, "6-output (predicted restriction)"),
            Self::SuppliedRestriction => write!(f, "5-output (supplied restriction)"),
        }
    }
}

/// A regression model producing a fixed-length vector of continuous outputs
pub trait MultiOutputPredictor: Send + Sync {
    /// Number of input features the model expects
    fn input_len(&self) -> usize;

    /// Number of outputs the model produces
    fn output_len(&self) -> usize;

    /// Run inference on one scaled feature vector
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::ModelInference` if the model fails
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, RecommendationError>;
}

/// Multi-output linear regressor: `y[j] = intercepts[j] + coefficients[j] · x`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearMultiOutputModel {
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearMultiOutputModel {
    /// Build a model from per-output coefficient rows and intercepts
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::ModelInference` if the rows are ragged or
    /// the intercept count differs from the row count
    pub fn new(
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    ) -> Result<Self, RecommendationError> {
        let model = Self {
            coefficients,
            intercepts,
        };
        model.check_shape()?;
        Ok(model)
    }

    fn check_shape(&self) -> Result<(), RecommendationError> {
        if self.coefficients.len() != self.intercepts.len() {
            return Err(RecommendationError::ModelInference(format!(
                "{} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        let width = self.input_len();
        if self.coefficients.iter().any(|row| row.len() != width) {
            return Err(RecommendationError::ModelInference(
                "coefficient rows have different widths".to_owned(),
            ));
        }
        Ok(())
    }
}

impl MultiOutputPredictor for LinearMultiOutputModel {
    fn input_len(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    fn output_len(&self) -> usize {
        self.intercepts.len()
    }

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, RecommendationError> {
        if features.len() != self.input_len() {
            return Err(RecommendationError::ModelInference(format!(
                "model expects {} features, got {}",
                self.input_len(),
                features.len()
            )));
        }

        Ok(self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter()
                    .zip(features)
                    .fold(*intercept, |acc, (weight, value)| weight.mul_add(*value, acc))
            })
            .collect())
    }
}

/// Unpacked model outputs, in model order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPrediction {
    /// Estimated calories burned (kcal)
    pub calories_burned: f64,
    /// Unadjusted calorie target (kcal)
    pub target_calories: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbs: f64,
    /// Fat (grams)
    pub fat: f64,
    /// Continuous restriction code, present only in 6-output mode
    pub dietary_restriction_raw: Option<f64>,
}

impl RawPrediction {
    /// Unpack a model output vector according to `mode`
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::ModelOutput` if the length does not match
    /// the mode, or `RecommendationError::ModelInference` if a value is not finite
    pub fn unpack(values: &[f64], mode: OutputMode) -> Result<Self, RecommendationError> {
        let expected = mode.output_len();
        if values.len() != expected {
            return Err(RecommendationError::ModelOutput {
                expected,
                actual: values.len(),
            });
        }
        if let Some(position) = values.iter().position(|value| !value.is_finite()) {
            return Err(RecommendationError::ModelInference(format!(
                "output {position} is not a finite number"
            )));
        }

        let restriction = match mode {
            OutputMode::PredictedRestriction => values.get(5).copied(),
            OutputMode::SuppliedRestriction => None,
        };
        Ok(Self {
            calories_burned: values[0],
            target_calories: values[1],
            protein: values[2],
            carbs: values[3],
            fat: values[4],
            dietary_restriction_raw: restriction,
        })
    }
}

/// Shared model handle bound to an output mode
#[derive(Clone)]
pub struct Predictor {
    model: Arc<dyn MultiOutputPredictor>,
    mode: OutputMode,
}

impl Predictor {
    /// Bind a model to the configured output mode
    #[must_use]
    pub fn new(model: Arc<dyn MultiOutputPredictor>, mode: OutputMode) -> Self {
        Self { model, mode }
    }

    /// Configured output mode
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Underlying model
    #[must_use]
    pub fn model(&self) -> &dyn MultiOutputPredictor {
        self.model.as_ref()
    }

    /// Predict and unpack for one scaled feature vector
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::ModelInference` if the model fails, or
    /// `RecommendationError::ModelOutput` if it returns the wrong number of values
    pub fn predict(&self, scaled: &[f64]) -> Result<RawPrediction, RecommendationError> {
        let values = self.model.predict(scaled)?;
        RawPrediction::unpack(&values, self.mode)
    }
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("mode", &self.mode)
            .field("input_len", &self.model.input_len())
            .field("output_len", &self.model.output_len())
            .finish()
    }
}

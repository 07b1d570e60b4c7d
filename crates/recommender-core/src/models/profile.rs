// ABOUTME: User profile models for the recommendation pipeline input boundary
// ABOUTME: ProfileRequest (wire shape), validated UserProfile, EncodedProfile and categorical fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::RecommendationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical features with a trained label vocabulary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoricalField {
    /// Gender of the user
    #[serde(rename = "Gender")]
    Gender,
    /// Self-reported activity level
    #[serde(rename = "Activity_Level")]
    ActivityLevel,
    /// Health condition
    #[serde(rename = "Health_Condition")]
    HealthCondition,
    /// Dietary restriction (model output or catalog filter key, never a model input)
    #[serde(rename = "Dietary_Restriction")]
    DietaryRestriction,
}

impl CategoricalField {
    /// All fields, in artifact order
    pub const ALL: [Self; 4] = [
        Self::Gender,
        Self::ActivityLevel,
        Self::HealthCondition,
        Self::DietaryRestriction,
    ];

    /// Key under which the field's vocabulary is stored in the artifact bundle
    #[must_use]
    pub const fn artifact_key(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::ActivityLevel => "Activity_Level",
            Self::HealthCondition => "Health_Condition",
            Self::DietaryRestriction => "Dietary_Restriction",
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.artifact_key())
    }
}

/// Validated user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Gender label
    pub gender: String,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level label
    pub activity_level: String,
    /// Health condition label
    pub health_condition: String,
    /// Free-form goal, matched case-insensitively
    pub goal: String,
    /// Requested dietary restriction, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restriction: Option<String>,
}

/// Profile as received on the wire, before validation
///
/// Every field is optional so that a missing field is reported as a
/// validation failure naming the field instead of a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRequest {
    /// Age in years
    pub age: Option<f64>,
    /// Gender label
    pub gender: Option<String>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Activity level label
    pub activity_level: Option<String>,
    /// Health condition label
    pub health_condition: Option<String>,
    /// Free-form goal
    pub goal: Option<String>,
    /// Requested dietary restriction
    pub dietary_restriction: Option<String>,
}

impl ProfileRequest {
    /// Parse a request body
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::Validation` if the body is not a JSON
    /// object with correctly typed fields
    pub fn from_json_str(body: &str) -> Result<Self, RecommendationError> {
        serde_json::from_str(body)
            .map_err(|e| RecommendationError::invalid_field("request", e.to_string()))
    }

    /// Check required fields and value ranges
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::Validation` naming the first missing or
    /// malformed field
    pub fn validate(self) -> Result<UserProfile, RecommendationError> {
        let age = self.age.ok_or_else(|| RecommendationError::missing_field("age"))?;
        if !age.is_finite() || age.fract() != 0.0 || age < 1.0 || age > f64::from(u32::MAX) {
            return Err(RecommendationError::invalid_field(
                "age",
                "must be a positive integer",
            ));
        }

        let gender = self
            .gender
            .ok_or_else(|| RecommendationError::missing_field("gender"))?;
        let weight_kg = positive_real("weight_kg", self.weight_kg)?;
        let height_cm = positive_real("height_cm", self.height_cm)?;
        let activity_level = self
            .activity_level
            .ok_or_else(|| RecommendationError::missing_field("activity_level"))?;
        let health_condition = self
            .health_condition
            .ok_or_else(|| RecommendationError::missing_field("health_condition"))?;
        let goal = self
            .goal
            .ok_or_else(|| RecommendationError::missing_field("goal"))?;

        Ok(UserProfile {
            // Safe: checked integral and within u32 range above
            age: age as u32,
            gender,
            weight_kg,
            height_cm,
            activity_level,
            health_condition,
            goal,
            dietary_restriction: self.dietary_restriction,
        })
    }
}

fn positive_real(field: &'static str, value: Option<f64>) -> Result<f64, RecommendationError> {
    let value = value.ok_or_else(|| RecommendationError::missing_field(field))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RecommendationError::invalid_field(
            field,
            "must be a positive number",
        ))
    }
}

/// Profile with categorical inputs replaced by vocabulary codes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedProfile {
    /// Age in years
    pub age: u32,
    /// Gender code
    pub gender_code: usize,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level code
    pub activity_code: usize,
    /// Health condition code
    pub health_code: usize,
}

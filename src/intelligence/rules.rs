// ABOUTME: Recommendation rules turning raw regression outputs into bounded recommendations
// ABOUTME: Goal calorie adjustment, exercise-time heuristic, restriction clamping and rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Rules Engine
//!
//! Rules are applied in a fixed order:
//!
//! 1. Unpack the raw prediction (done by [`RawPrediction::unpack`])
//! 2. Resolve the dietary restriction (clamped model code, or caller label)
//! 3. Adjust the calorie target by goal (flat +/-500 kcal)
//! 4. Compute exercise minutes from activity, health and calorie surplus
//! 5. Round calories and macros to two decimals
//!
//! The goal offset and exercise tables are product heuristics, not a
//! physiological model. Both floors in the exercise formula are part of the
//! contract: clients compare minutes as integers.
#![allow(clippy::cast_possible_wrap)] // Safe: vocabulary codes are tiny

use super::encoder::CategoricalEncoder;
use super::predictor::RawPrediction;
use crate::constants::{dietary, exercise, goals, rounding};
use crate::errors::RecommendationError;
use crate::models::{CategoricalField, NutritionPlan, UserProfile};
use tracing::debug;

/// Coarse user goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Calorie deficit
    LoseWeight,
    /// Calorie surplus
    GainWeight,
    /// Anything else, including "maintain" and unrecognized strings
    Other,
}

impl Goal {
    /// Parse a free-form goal, case-insensitively
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            goals::LOSE_WEIGHT => Self::LoseWeight,
            goals::GAIN_WEIGHT => Self::GainWeight,
            _ => Self::Other,
        }
    }

    /// Calorie offset applied to the predicted target
    #[must_use]
    pub const fn calorie_offset(self) -> f64 {
        match self {
            Self::LoseWeight => -goals::CALORIE_OFFSET,
            Self::GainWeight => goals::CALORIE_OFFSET,
            Self::Other => 0.0,
        }
    }
}

/// Apply the goal offset to a predicted calorie target
#[must_use]
pub fn adjust_target_calories(target_calories: f64, goal: &str) -> f64 {
    target_calories + Goal::from_str_lossy(goal).calorie_offset()
}

/// Base exercise minutes for an activity level label
#[must_use]
pub fn base_exercise_minutes(activity_level: &str) -> u32 {
    exercise::BASE_MINUTES
        .iter()
        .find(|(label, _)| *label == activity_level)
        .map_or(exercise::DEFAULT_BASE_MINUTES, |(_, minutes)| *minutes)
}

/// Exercise multiplier for a health condition label
#[must_use]
pub fn health_modifier(health_condition: &str) -> f64 {
    exercise::HEALTH_MODIFIERS
        .iter()
        .find(|(label, _)| *label == health_condition)
        .map_or(exercise::DEFAULT_HEALTH_MODIFIER, |(_, modifier)| *modifier)
}

/// Recommended daily exercise minutes
///
/// `floor(base * modifier + max(0, floor((target - burned) / 50)))`
#[must_use]
#[allow(clippy::suboptimal_flops)] // mul_add moves results across floor boundaries
pub fn exercise_time_minutes(
    activity_level: &str,
    health_condition: &str,
    target_calories: f64,
    calories_burned: f64,
) -> u32 {
    let base = f64::from(base_exercise_minutes(activity_level));
    let modifier = health_modifier(health_condition);
    let surplus_minutes = ((target_calories - calories_burned) / exercise::KCAL_PER_EXTRA_MINUTE)
        .floor()
        .max(0.0);

    // Saturating cast: never negative, clamps absurd surpluses
    (base * modifier + surplus_minutes).floor() as u32
}

/// Map a continuous restriction output onto a valid vocabulary code
///
/// Rounds half to even, then clamps into `[0, vocabulary_size - 1]`.
#[must_use]
pub fn clamp_restriction_code(raw: f64, vocabulary_size: usize) -> i64 {
    let max_code = vocabulary_size.saturating_sub(1) as f64;
    let rounded = if raw.is_nan() { 0.0 } else { raw.round_ties_even() };
    rounded.clamp(0.0, max_code) as i64
}

/// Dietary restriction chosen for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRestriction {
    /// Vocabulary code
    pub code: usize,
    /// Decoded label
    pub label: String,
}

/// Resolve the request's dietary restriction
///
/// With a predicted code the caller's request is ignored; otherwise a
/// recognized caller label is used and anything else falls back to the
/// default class.
///
/// # Errors
///
/// Returns `RecommendationError::InvalidCode` only if the vocabulary is empty
pub fn resolve_dietary_restriction(
    encoder: &CategoricalEncoder,
    predicted_raw: Option<f64>,
    requested: Option<&str>,
) -> Result<ResolvedRestriction, RecommendationError> {
    let field = CategoricalField::DietaryRestriction;
    let code = match predicted_raw {
        Some(raw) => clamp_restriction_code(raw, encoder.vocabulary_size(field)),
        None => requested
            .and_then(|label| encoder.vocabulary(field).transform(label))
            .map_or(dietary::DEFAULT_RESTRICTION_CODE as i64, |code| code as i64),
    };

    let label = encoder.decode(field, code)?.to_owned();
    debug!(
        restriction.raw = ?predicted_raw,
        restriction.requested = ?requested,
        restriction.code = code,
        restriction.label = %label,
        "Resolved dietary restriction"
    );

    Ok(ResolvedRestriction {
        // Safe: decode succeeded, so the code is a valid non-negative index
        code: code as usize,
        label,
    })
}

/// Round to the response precision (two decimals, ties to even)
///
/// Values too large to carry a fractional part are returned unchanged, so
/// scaling never overflows a finite prediction to infinity.
#[must_use]
pub fn round_to_2(value: f64) -> f64 {
    if value.abs() >= rounding::MAX_FRACTIONAL_MAGNITUDE {
        return value;
    }
    let factor = 10_f64.powi(rounding::DECIMAL_PLACES);
    (value * factor).round_ties_even() / factor
}

/// Apply all rules to one raw prediction
///
/// # Errors
///
/// Returns `RecommendationError::InvalidCode` if the restriction cannot be decoded
pub fn build_nutrition_plan(
    profile: &UserProfile,
    raw: &RawPrediction,
    encoder: &CategoricalEncoder,
) -> Result<NutritionPlan, RecommendationError> {
    let restriction = resolve_dietary_restriction(
        encoder,
        raw.dietary_restriction_raw,
        profile.dietary_restriction.as_deref(),
    )?;

    let target_calories = adjust_target_calories(raw.target_calories, &profile.goal);

    let exercise_time_minutes = exercise_time_minutes(
        &profile.activity_level,
        &profile.health_condition,
        target_calories,
        raw.calories_burned,
    );

    Ok(NutritionPlan {
        calories_burned: round_to_2(raw.calories_burned),
        target_calories: round_to_2(target_calories),
        protein_g: round_to_2(raw.protein),
        carbs_g: round_to_2(raw.carbs),
        fat_g: round_to_2(raw.fat),
        exercise_time_minutes,
        dietary_restriction: restriction.label,
    })
}

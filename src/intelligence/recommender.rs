// ABOUTME: End-to-end recommendation pipeline over immutable, process-wide artifacts
// ABOUTME: Encodes, scales, predicts, applies rules and samples the weekly meal plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation pipeline
//!
//! A [`Recommender`] owns the loaded encoder, scaler, model and meal catalog.
//! It is built once at startup and then only read, so it can be shared
//! across threads behind an `Arc` without locking. Every call is all-or-nothing:
//! either a full [`Recommendation`] or the first error encountered.

use super::encoder::CategoricalEncoder;
use super::features::{self, StandardScaler};
use super::meal_plan::{sample_week, MealCatalog};
use super::predictor::{OutputMode, Predictor};
use super::rules;
use crate::errors::RecommendationError;
use crate::models::{
    CategoricalField, EncodedProfile, NutritionPlan, ProfileRequest, Recommendation, UserProfile,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

/// Loaded artifacts plus the pipeline that runs over them
#[derive(Debug, Clone)]
pub struct Recommender {
    encoder: CategoricalEncoder,
    scaler: StandardScaler,
    predictor: Predictor,
    catalog: MealCatalog,
}

impl Recommender {
    /// Assemble a recommender from already-validated artifacts
    #[must_use]
    pub const fn new(
        encoder: CategoricalEncoder,
        scaler: StandardScaler,
        predictor: Predictor,
        catalog: MealCatalog,
    ) -> Self {
        Self {
            encoder,
            scaler,
            predictor,
            catalog,
        }
    }

    /// Categorical encoder
    #[must_use]
    pub const fn encoder(&self) -> &CategoricalEncoder {
        &self.encoder
    }

    /// Meal catalog
    #[must_use]
    pub const fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    /// Configured model output mode
    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        self.predictor.mode()
    }

    /// Replace categorical inputs with their vocabulary codes
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::UnknownCategory` for an unrecognized
    /// gender, activity level or health condition
    pub fn encode_profile(&self, profile: &UserProfile) -> Result<EncodedProfile, RecommendationError> {
        Ok(EncodedProfile {
            age: profile.age,
            gender_code: self.encoder.encode(CategoricalField::Gender, &profile.gender)?,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            activity_code: self
                .encoder
                .encode(CategoricalField::ActivityLevel, &profile.activity_level)?,
            health_code: self
                .encoder
                .encode(CategoricalField::HealthCondition, &profile.health_condition)?,
        })
    }

    /// Deterministic part of the pipeline: everything except meal sampling
    ///
    /// # Errors
    ///
    /// Returns the first encoder, scaler, predictor or rules failure
    pub fn nutrition_plan(&self, profile: &UserProfile) -> Result<NutritionPlan, RecommendationError> {
        let encoded = self.encode_profile(profile)?;
        let scaled = self.scaler.transform(&features::build(&encoded))?;
        let raw = self.predictor.predict(&scaled)?;
        debug!(
            calories_burned = raw.calories_burned,
            target_calories = raw.target_calories,
            protein = raw.protein,
            carbs = raw.carbs,
            fat = raw.fat,
            dietary_restriction_raw = ?raw.dietary_restriction_raw,
            "Raw model prediction"
        );
        rules::build_nutrition_plan(profile, &raw, &self.encoder)
    }

    /// Full recommendation with an injected random source for meal sampling
    ///
    /// # Errors
    ///
    /// Returns any pipeline failure, including `NoMealsAvailable`
    #[instrument(skip_all, fields(mode = ?self.predictor.mode()))]
    pub fn recommend_with_rng<R>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> Result<Recommendation, RecommendationError>
    where
        R: Rng + ?Sized,
    {
        let plan = self.nutrition_plan(profile)?;
        let weekly_meal_plan = sample_week(&self.catalog, &plan.dietary_restriction, rng)?;

        info!(
            target_calories = plan.target_calories,
            exercise_time_minutes = plan.exercise_time_minutes,
            dietary_restriction = %plan.dietary_restriction,
            "Recommendation generated"
        );
        Ok(Recommendation {
            plan,
            weekly_meal_plan,
        })
    }

    /// Full recommendation using the thread-local random source
    ///
    /// # Errors
    ///
    /// Returns any pipeline failure, including `NoMealsAvailable`
    pub fn recommend(&self, profile: &UserProfile) -> Result<Recommendation, RecommendationError> {
        self.recommend_with_rng(profile, &mut rand::thread_rng())
    }

    /// Full recommendation with reproducible meal sampling
    ///
    /// # Errors
    ///
    /// Returns any pipeline failure, including `NoMealsAvailable`
    pub fn recommend_seeded(
        &self,
        profile: &UserProfile,
        seed: u64,
    ) -> Result<Recommendation, RecommendationError> {
        self.recommend_with_rng(profile, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Validate a wire request, then recommend
    ///
    /// Every log line of the request carries `request_id`, so callers can put
    /// the same id on their error responses.
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::Validation` for a missing or malformed
    /// field, otherwise any pipeline failure
    #[instrument(skip_all, fields(request_id = %request_id))]
    pub fn recommend_request<R>(
        &self,
        request: ProfileRequest,
        request_id: &str,
        rng: &mut R,
    ) -> Result<Recommendation, RecommendationError>
    where
        R: Rng + ?Sized,
    {
        let profile = request.validate()?;
        self.recommend_with_rng(&profile, rng)
    }
}

// ABOUTME: Prediction-to-recommendation pipeline components
// ABOUTME: Encoder, feature builder, predictor, rules engine, meal sampler and orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Data flow, leaves first:
//!
//! `UserProfile` -> [`encoder`] -> `EncodedProfile` -> [`features`] -> scaled
//! vector -> [`predictor`] -> `RawPrediction` -> [`rules`] -> `NutritionPlan`
//! -> [`meal_plan`] -> `WeeklyMealPlan` -> `Recommendation`.

/// Categorical label encoding and decoding
pub mod encoder;
/// Feature vector assembly and standardization
pub mod features;
/// Weekly meal plan sampling
pub mod meal_plan;
/// Multi-output regression model wrapper
pub mod predictor;
/// End-to-end pipeline over loaded artifacts
pub mod recommender;
/// Business rules applied to raw predictions
pub mod rules;

pub use encoder::{CategoricalEncoder, LabelVocabulary, VocabularyError};
pub use features::StandardScaler;
pub use meal_plan::{sample_week, MealCatalog};
pub use predictor::{LinearMultiOutputModel, MultiOutputPredictor, OutputMode, Predictor, RawPrediction};
pub use recommender::Recommender;
pub use rules::{build_nutrition_plan, exercise_time_minutes, Goal, ResolvedRestriction};

// ABOUTME: Core data models for the recommendation pipeline
// ABOUTME: Re-exports profile, nutrition plan and meal plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrition plan, meal catalog and weekly plan models
pub mod nutrition;

/// User profile input models
pub mod profile;

pub use nutrition::{DayMealPlan, MealCatalogEntry, NutritionPlan, Recommendation, WeeklyMealPlan};
pub use profile::{CategoricalField, EncodedProfile, ProfileRequest, UserProfile};

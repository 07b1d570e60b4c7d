// ABOUTME: Nutrition plan, meal catalog and weekly meal plan models
// ABOUTME: NutritionPlan, MealCatalogEntry, DayMealPlan, WeeklyMealPlan and Recommendation definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Daily nutrition and exercise targets derived from one prediction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionPlan {
    /// Estimated calories burned per day (kcal)
    pub calories_burned: f64,
    /// Goal-adjusted calorie target (kcal)
    pub target_calories: f64,
    /// Recommended daily protein (grams)
    pub protein_g: f64,
    /// Recommended daily carbohydrates (grams)
    pub carbs_g: f64,
    /// Recommended daily fat (grams)
    pub fat_g: f64,
    /// Recommended daily exercise duration
    pub exercise_time_minutes: u32,
    /// Decoded dietary restriction label
    pub dietary_restriction: String,
}

/// One row of the meal catalog
///
/// The restriction column holds the decoded label, never the integer code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealCatalogEntry {
    /// Restriction label this meal set satisfies
    pub dietary_restriction: String,
    /// Breakfast description
    pub breakfast: String,
    /// Lunch description
    pub lunch: String,
    /// Dinner description
    pub dinner: String,
    /// Snacks description
    pub snacks: String,
}

/// Meals for one day of the weekly plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayMealPlan {
    /// Day label ("Day 1".."Day 7")
    pub day: String,
    /// Breakfast description
    pub breakfast: String,
    /// Lunch description
    pub lunch: String,
    /// Dinner description
    pub dinner: String,
    /// Snacks description
    pub snacks: String,
}

impl DayMealPlan {
    /// Label a sampled catalog entry with its day
    #[must_use]
    pub fn from_entry(day: String, entry: &MealCatalogEntry) -> Self {
        Self {
            day,
            breakfast: entry.breakfast.clone(),
            lunch: entry.lunch.clone(),
            dinner: entry.dinner.clone(),
            snacks: entry.snacks.clone(),
        }
    }
}

/// Seven days of meals, in day order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct WeeklyMealPlan {
    days: Vec<DayMealPlan>,
}

impl WeeklyMealPlan {
    /// Wrap already-labelled days
    #[must_use]
    pub const fn new(days: Vec<DayMealPlan>) -> Self {
        Self { days }
    }

    /// Days in order
    #[must_use]
    pub fn days(&self) -> &[DayMealPlan] {
        &self.days
    }

    /// Number of days in the plan
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when the plan has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Full response aggregate for one request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Nutrition and exercise targets
    #[serde(flatten)]
    pub plan: NutritionPlan,
    /// Sampled weekly meal plan
    pub weekly_meal_plan: WeeklyMealPlan,
}

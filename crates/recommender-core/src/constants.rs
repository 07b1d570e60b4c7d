// ABOUTME: Fixed business-rule constants for the recommendation rules engine
// ABOUTME: Goal offsets, exercise-time lookup tables, plan length and rounding precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Business-rule constants.
//!
//! Product-level heuristics, not physiological models. None of them are
//! read from configuration.

/// Goal-based calorie adjustment
pub mod goals {
    /// Recognized goal: subtract [`CALORIE_OFFSET`] from the target
    pub const LOSE_WEIGHT: &str = "lose weight";
    /// Recognized goal: add [`CALORIE_OFFSET`] to the target
    pub const GAIN_WEIGHT: &str = "gain weight";
    /// Flat calorie offset (kcal) applied for a recognized goal
    pub const CALORIE_OFFSET: f64 = 500.0;
}

/// Exercise-time heuristic
pub mod exercise {
    /// Base daily exercise minutes per activity level label
    pub const BASE_MINUTES: [(&str, u32); 4] = [
        ("Sedentary", 30),
        ("Lightly Active", 45),
        ("Moderately Active", 60),
        ("Very Active", 90),
    ];

    /// Base minutes for an activity level missing from [`BASE_MINUTES`]
    pub const DEFAULT_BASE_MINUTES: u32 = 45;

    /// Multiplier per health condition label
    pub const HEALTH_MODIFIERS: [(&str, f64); 4] = [
        ("None", 1.0),
        ("Diabetes", 1.2),
        ("Hypertension", 1.1),
        ("Obesity", 1.5),
    ];

    /// Multiplier for a health condition missing from [`HEALTH_MODIFIERS`]
    pub const DEFAULT_HEALTH_MODIFIER: f64 = 1.0;

    /// One extra minute per this many kcal of target surplus over calories burned
    pub const KCAL_PER_EXTRA_MINUTE: f64 = 50.0;
}

/// Dietary restriction handling
pub mod dietary {
    /// Code of the default restriction class in the trained vocabulary
    pub const DEFAULT_RESTRICTION_CODE: usize = 0;
    /// Conventional label of the default restriction class
    pub const DEFAULT_RESTRICTION_LABEL: &str = "General";
}

/// Weekly meal plan shape
pub mod meal_plan {
    /// Number of days in a plan
    pub const DAYS_PER_WEEK: usize = 7;
    /// Prefix of the per-day label ("Day 1".."Day 7")
    pub const DAY_LABEL_PREFIX: &str = "Day";
}

/// Feature vector layout
pub mod features {
    /// Width of the model input vector
    pub const FEATURE_COUNT: usize = 6;
    /// Feature names in model input order
    pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
        "Age",
        "Gender",
        "Weight_kg",
        "Height_cm",
        "Activity_Level",
        "Health_Condition",
    ];
}

/// Response formatting
pub mod rounding {
    /// Decimal places kept for calorie and macro values
    pub const DECIMAL_PLACES: i32 = 2;
    /// 2^52: at or above this magnitude an `f64` carries no fractional digits
    pub const MAX_FRACTIONAL_MAGNITUDE: f64 = 4_503_599_627_370_496.0;
}

/// Service identification for logging
pub mod service_names {
    /// Service name reported in structured logs
    pub const NUTRITION_RECOMMENDER: &str = "nutrition-recommender";
}

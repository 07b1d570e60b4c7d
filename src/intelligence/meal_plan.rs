// ABOUTME: Weekly meal plan sampling from a restriction-filtered meal catalog
// ABOUTME: Equality filter with default-class fallback and uniform sampling with replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Plan Sampler
//!
//! The catalog's restriction column holds decoded labels. Filtering compares
//! labels exactly; there is no code-based filtering anywhere in the crate.

use crate::constants::meal_plan::{DAYS_PER_WEEK, DAY_LABEL_PREFIX};
use crate::errors::RecommendationError;
use crate::models::{DayMealPlan, MealCatalogEntry, WeeklyMealPlan};
use rand::Rng;
use tracing::{debug, warn};

/// Read-only meal catalog, loaded once per process
#[derive(Debug, Clone)]
pub struct MealCatalog {
    entries: Vec<MealCatalogEntry>,
    default_restriction: String,
}

impl MealCatalog {
    /// Build a catalog with the label used when a restriction has no meals
    #[must_use]
    pub fn new(entries: Vec<MealCatalogEntry>, default_restriction: impl Into<String>) -> Self {
        Self {
            entries,
            default_restriction: default_restriction.into(),
        }
    }

    /// All entries
    #[must_use]
    pub fn entries(&self) -> &[MealCatalogEntry] {
        &self.entries
    }

    /// Label of the fallback restriction class
    #[must_use]
    pub fn default_restriction(&self) -> &str {
        &self.default_restriction
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose restriction equals `restriction`
    #[must_use]
    pub fn filter(&self, restriction: &str) -> Vec<&MealCatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.dietary_restriction == restriction)
            .collect()
    }

    /// Entries for `restriction`, or for the default class if there are none
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::NoMealsAvailable` if both sets are empty
    pub fn eligible(&self, restriction: &str) -> Result<Vec<&MealCatalogEntry>, RecommendationError> {
        let matching = self.filter(restriction);
        if !matching.is_empty() {
            return Ok(matching);
        }

        warn!(
            restriction = %restriction,
            fallback = %self.default_restriction,
            "No meals for dietary restriction, falling back to default class"
        );
        let fallback = self.filter(&self.default_restriction);
        if fallback.is_empty() {
            return Err(RecommendationError::NoMealsAvailable {
                restriction: restriction.to_owned(),
                fallback: self.default_restriction.clone(),
            });
        }
        Ok(fallback)
    }
}

/// Sample a seven-day plan for `restriction`
///
/// Each day is an independent uniform draw with replacement, so a
/// restriction with fewer than seven meals still yields a full week.
///
/// # Errors
///
/// Returns `RecommendationError::NoMealsAvailable` if neither the restriction
/// nor the default class has catalog entries
pub fn sample_week<R>(
    catalog: &MealCatalog,
    restriction: &str,
    rng: &mut R,
) -> Result<WeeklyMealPlan, RecommendationError>
where
    R: Rng + ?Sized,
{
    let eligible = catalog.eligible(restriction)?;
    debug!(
        restriction = %restriction,
        eligible = eligible.len(),
        "Sampling weekly meal plan"
    );

    let days = (1..=DAYS_PER_WEEK)
        .map(|day| {
            let entry = eligible[rng.gen_range(0..eligible.len())];
            DayMealPlan::from_entry(format!("{DAY_LABEL_PREFIX} {day}"), entry)
        })
        .collect();

    Ok(WeeklyMealPlan::new(days))
}

// ABOUTME: Tests for weekly meal plan sampling over the meal catalog
// ABOUTME: Covers day labelling, sampling with replacement, fallback and injected random sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{catalog, catalog_entries};
use nutrition_recommender::errors::RecommendationError;
use nutrition_recommender::intelligence::{sample_week, MealCatalog};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn test_week_is_labelled_in_order() {
    common::init_test_logging();
    let plan = sample_week(&catalog(), "General", &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

    assert_eq!(plan.len(), 7);
    for (index, day) in plan.days().iter().enumerate() {
        assert_eq!(day.day, format!("Day {}", index + 1));
    }
}

#[test]
fn test_samples_with_replacement() {
    // Three General entries cannot fill seven days without repeats
    let plan = sample_week(&catalog(), "General", &mut ChaCha8Rng::seed_from_u64(2)).unwrap();

    let distinct: HashSet<&str> = plan.days().iter().map(|day| day.breakfast.as_str()).collect();
    assert!(distinct.len() <= 3);
    assert_eq!(plan.len(), 7);
}

#[test]
fn test_days_only_use_matching_entries() {
    let plan = sample_week(&catalog(), "Vegan", &mut ChaCha8Rng::seed_from_u64(3)).unwrap();

    let vegan: Vec<String> = catalog_entries()
        .into_iter()
        .filter(|entry| entry.dietary_restriction == "Vegan")
        .map(|entry| entry.dinner)
        .collect();
    assert!(plan.days().iter().all(|day| vegan.contains(&day.dinner)));
}

#[test]
fn test_day_keeps_all_meals_of_one_entry() {
    let plan = sample_week(&catalog(), "General", &mut ChaCha8Rng::seed_from_u64(4)).unwrap();

    for day in plan.days() {
        let tag = day.breakfast.trim_end_matches(" breakfast");
        assert_eq!(day.lunch, format!("{tag} lunch"));
        assert_eq!(day.dinner, format!("{tag} dinner"));
        assert_eq!(day.snacks, format!("{tag} snacks"));
    }
}

#[test]
fn test_same_seed_same_week() {
    let first = sample_week(&catalog(), "General", &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    let second = sample_week(&catalog(), "General", &mut ChaCha8Rng::seed_from_u64(99)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_vary_the_week() {
    let weeks: HashSet<Vec<String>> = (0..16)
        .map(|seed| {
            sample_week(&catalog(), "General", &mut ChaCha8Rng::seed_from_u64(seed))
                .unwrap()
                .days()
                .iter()
                .map(|day| day.breakfast.clone())
                .collect()
        })
        .collect();

    assert!(weeks.len() > 1);
}

#[test]
fn test_injected_constant_source_picks_first_entry() {
    let mut rng = StepRng::new(0, 0);

    let plan = sample_week(&catalog(), "General", &mut rng).unwrap();

    assert!(plan
        .days()
        .iter()
        .all(|day| day.breakfast == "oats breakfast"));
}

#[test]
fn test_fallback_to_default_class() {
    common::init_test_logging();
    let plan = sample_week(&catalog(), "Low-Carb", &mut ChaCha8Rng::seed_from_u64(5)).unwrap();

    let general: Vec<String> = catalog_entries()
        .into_iter()
        .filter(|entry| entry.dietary_restriction == "General")
        .map(|entry| entry.breakfast)
        .collect();
    assert!(plan.days().iter().all(|day| general.contains(&day.breakfast)));
}

#[test]
fn test_empty_catalog_has_no_meals() {
    let empty = MealCatalog::new(Vec::new(), "General");

    let error = sample_week(&empty, "Vegan", &mut ChaCha8Rng::seed_from_u64(6)).unwrap_err();

    assert_eq!(
        error,
        RecommendationError::NoMealsAvailable {
            restriction: "Vegan".to_owned(),
            fallback: "General".to_owned(),
        }
    );
}

#[test]
fn test_weekly_plan_serializes_as_array() {
    let plan = sample_week(&catalog(), "Vegan", &mut ChaCha8Rng::seed_from_u64(8)).unwrap();

    let body = serde_json::to_value(&plan).unwrap();

    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 7);
    for key in ["day", "breakfast", "lunch", "dinner", "snacks"] {
        assert!(days[0].get(key).is_some(), "missing {key}");
    }
}

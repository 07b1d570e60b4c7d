// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, vocabularies, fake predictors, catalogs and artifact bundles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrition_recommender`
//!
//! Fixtures mirror a small trained deployment: label vocabularies sorted the
//! way the training pipeline sorts them, and a predictor that returns a fixed
//! output vector so rules can be checked against hand-computed values.

use nutrition_recommender::errors::RecommendationError;
use nutrition_recommender::intelligence::{
    CategoricalEncoder, LabelVocabulary, MealCatalog, MultiOutputPredictor, OutputMode,
    Predictor, Recommender, StandardScaler,
};
use nutrition_recommender::models::{CategoricalField, MealCatalogEntry, UserProfile};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; tests stay quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const GENDERS: [&str; 2] = ["Female", "Male"];
pub const ACTIVITY_LEVELS: [&str; 4] = [
    "Lightly Active",
    "Moderately Active",
    "Sedentary",
    "Very Active",
];
pub const HEALTH_CONDITIONS: [&str; 4] = ["Diabetes", "Hypertension", "None", "Obesity"];
pub const DIETARY_RESTRICTIONS: [&str; 4] = ["General", "Low-Carb", "Vegan", "Vegetarian"];

/// Trained label vocabularies for every categorical field
pub fn vocabularies() -> BTreeMap<CategoricalField, LabelVocabulary> {
    BTreeMap::from([
        (CategoricalField::Gender, LabelVocabulary::new(GENDERS)),
        (
            CategoricalField::ActivityLevel,
            LabelVocabulary::new(ACTIVITY_LEVELS),
        ),
        (
            CategoricalField::HealthCondition,
            LabelVocabulary::new(HEALTH_CONDITIONS),
        ),
        (
            CategoricalField::DietaryRestriction,
            LabelVocabulary::new(DIETARY_RESTRICTIONS),
        ),
    ])
}

pub fn encoder() -> CategoricalEncoder {
    CategoricalEncoder::new(vocabularies()).unwrap()
}

/// Scaler that leaves features unchanged
pub fn identity_scaler() -> StandardScaler {
    StandardScaler::new(vec![0.0; 6], vec![1.0; 6]).unwrap()
}

fn entry(restriction: &str, tag: &str) -> MealCatalogEntry {
    MealCatalogEntry {
        dietary_restriction: restriction.to_owned(),
        breakfast: format!("{tag} breakfast"),
        lunch: format!("{tag} lunch"),
        dinner: format!("{tag} dinner"),
        snacks: format!("{tag} snacks"),
    }
}

/// Catalog with General and Vegan meals only
///
/// Low-Carb and Vegetarian have no entries, so they exercise the fallback.
pub fn catalog_entries() -> Vec<MealCatalogEntry> {
    vec![
        entry("General", "oats"),
        entry("General", "eggs"),
        entry("General", "toast"),
        entry("Vegan", "tofu"),
        entry("Vegan", "lentil"),
    ]
}

pub fn catalog() -> MealCatalog {
    MealCatalog::new(catalog_entries(), "General")
}

/// Predictor returning the same output vector for every input
#[derive(Debug, Clone)]
pub struct FixedPredictor {
    pub outputs: Vec<f64>,
}

impl MultiOutputPredictor for FixedPredictor {
    fn input_len(&self) -> usize {
        6
    }

    fn output_len(&self) -> usize {
        self.outputs.len()
    }

    fn predict(&self, _features: &[f64]) -> Result<Vec<f64>, RecommendationError> {
        Ok(self.outputs.clone())
    }
}

/// Predictor whose inference always fails
#[derive(Debug, Clone, Copy)]
pub struct FailingPredictor;

impl MultiOutputPredictor for FailingPredictor {
    fn input_len(&self) -> usize {
        6
    }

    fn output_len(&self) -> usize {
        6
    }

    fn predict(&self, _features: &[f64]) -> Result<Vec<f64>, RecommendationError> {
        Err(RecommendationError::ModelInference(
            "model backend unavailable".to_owned(),
        ))
    }
}

pub fn recommender_with_predictor(
    model: Arc<dyn MultiOutputPredictor>,
    mode: OutputMode,
    catalog: MealCatalog,
) -> Recommender {
    init_test_logging();
    Recommender::new(
        encoder(),
        identity_scaler(),
        Predictor::new(model, mode),
        catalog,
    )
}

/// Recommender whose model always returns `outputs`
pub fn recommender_with_outputs(outputs: &[f64], mode: OutputMode) -> Recommender {
    recommender_with_predictor(
        Arc::new(FixedPredictor {
            outputs: outputs.to_vec(),
        }),
        mode,
        catalog(),
    )
}

/// Six model outputs: burned, target, protein, carbs, fat, restriction code
pub const SIX_OUTPUTS: [f64; 6] = [2200.0, 2500.0, 150.0, 200.0, 70.0, 0.0];

/// Five model outputs: burned, target, protein, carbs, fat
pub const FIVE_OUTPUTS: [f64; 5] = [2200.0, 2500.0, 150.0, 200.0, 70.0];

pub fn sample_profile() -> UserProfile {
    UserProfile {
        age: 30,
        gender: "Male".to_owned(),
        weight_kg: 80.0,
        height_cm: 180.0,
        activity_level: "Moderately Active".to_owned(),
        health_condition: "None".to_owned(),
        goal: "Lose Weight".to_owned(),
        dietary_restriction: None,
    }
}

pub fn sample_request_json() -> Value {
    json!({
        "age": 30,
        "gender": "Male",
        "weight_kg": 80.0,
        "height_cm": 180.0,
        "activity_level": "Moderately Active",
        "health_condition": "None",
        "goal": "Lose Weight"
    })
}

/// Artifact bundle whose linear model ignores its inputs and returns `intercepts`
pub fn bundle_json(intercepts: &[f64]) -> Value {
    let coefficients: Vec<Vec<f64>> = intercepts.iter().map(|_| vec![0.0; 6]).collect();
    json!({
        "encoders": {
            "Gender": GENDERS,
            "Activity_Level": ACTIVITY_LEVELS,
            "Health_Condition": HEALTH_CONDITIONS,
            "Dietary_Restriction": DIETARY_RESTRICTIONS
        },
        "scaler": {
            "mean": [35.0, 0.5, 70.0, 170.0, 1.5, 1.5],
            "scale": [10.0, 0.5, 15.0, 10.0, 1.1, 1.1]
        },
        "model": {
            "coefficients": coefficients,
            "intercepts": intercepts
        },
        "meal_catalog": catalog_entries()
    })
}

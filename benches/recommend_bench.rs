// ABOUTME: Criterion benchmarks for the recommendation pipeline
// ABOUTME: Measures the deterministic plan, meal sampling and the full end-to-end call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recommendation pipeline.
//!
//! Artifacts are built in memory so only request-time work is measured.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrition_recommender::artifacts::ArtifactBundle;
use nutrition_recommender::intelligence::{sample_week, OutputMode, Recommender};
use nutrition_recommender::models::UserProfile;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};

const RESTRICTIONS: [&str; 4] = ["General", "Low-Carb", "Vegan", "Vegetarian"];

/// Catalog sizes per restriction
const CATALOG_SIZES: [usize; 3] = [10, 100, 1000];

fn catalog(per_restriction: usize) -> Vec<Value> {
    RESTRICTIONS
        .iter()
        .flat_map(|restriction| {
            (0..per_restriction).map(move |index| {
                json!({
                    "dietary_restriction": restriction,
                    "breakfast": format!("{restriction} breakfast {index}"),
                    "lunch": format!("{restriction} lunch {index}"),
                    "dinner": format!("{restriction} dinner {index}"),
                    "snacks": format!("{restriction} snacks {index}")
                })
            })
        })
        .collect()
}

fn recommender(per_restriction: usize) -> Recommender {
    let body = json!({
        "encoders": {
            "Gender": ["Female", "Male"],
            "Activity_Level": ["Lightly Active", "Moderately Active", "Sedentary", "Very Active"],
            "Health_Condition": ["Diabetes", "Hypertension", "None", "Obesity"],
            "Dietary_Restriction": RESTRICTIONS
        },
        "scaler": {
            "mean": [35.0, 0.5, 70.0, 170.0, 1.5, 1.5],
            "scale": [10.0, 0.5, 15.0, 10.0, 1.1, 1.1]
        },
        "model": {
            "coefficients": [
                [-4.0, 60.0, 120.0, 35.0, 90.0, -10.0],
                [-6.0, 80.0, 140.0, 40.0, 70.0, -15.0],
                [-0.5, 12.0, 20.0, 3.0, 6.0, -1.0],
                [-1.5, 15.0, 25.0, 6.0, 20.0, -4.0],
                [-0.3, 5.0, 9.0, 1.5, 3.0, -0.5],
                [0.05, 0.1, -0.2, 0.1, 0.3, 0.4]
            ],
            "intercepts": [2300.0, 2400.0, 140.0, 260.0, 70.0, 1.2]
        },
        "meal_catalog": catalog(per_restriction)
    });
    ArtifactBundle::from_json_str(&body.to_string())
        .unwrap()
        .into_recommender(OutputMode::PredictedRestriction)
        .unwrap()
}

fn profile() -> UserProfile {
    UserProfile {
        age: 42,
        gender: "Female".to_owned(),
        weight_kg: 68.5,
        height_cm: 167.0,
        activity_level: "Lightly Active".to_owned(),
        health_condition: "Hypertension".to_owned(),
        goal: "lose weight".to_owned(),
        dietary_restriction: None,
    }
}

fn bench_nutrition_plan(c: &mut Criterion) {
    let recommender = recommender(CATALOG_SIZES[0]);
    let profile = profile();

    c.bench_function("nutrition_plan", |b| {
        b.iter(|| recommender.nutrition_plan(black_box(&profile)).unwrap());
    });
}

fn bench_meal_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_week");

    for size in CATALOG_SIZES {
        let recommender = recommender(size);
        group.throughput(Throughput::Elements(recommender.catalog().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| sample_week(recommender.catalog(), black_box("Vegan"), &mut rng).unwrap());
        });
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let profile = profile();

    for size in CATALOG_SIZES {
        let recommender = recommender(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                recommender
                    .recommend_with_rng(black_box(&profile), &mut rng)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_nutrition_plan,
    bench_meal_sampling,
    bench_recommend,
);
criterion_main!(benches);

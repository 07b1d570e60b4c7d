// ABOUTME: Command-line entry point that turns one profile JSON into a recommendation JSON
// ABOUTME: Loads artifacts once, runs the pipeline and prints the result or a structured error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Recommender Binary
//!
//! Usage:
//! ```bash
//! # Recommend for a profile file with the bundle from RECOMMENDER_ARTIFACTS
//! nutrition-recommender --profile profile.json
//!
//! # Read the profile from stdin, reproducible meal plan, 5-output model
//! cat profile.json | nutrition-recommender --artifacts bundle.json --seed 42 --mode 5 --pretty
//! ```
//!
//! The recommendation is printed on stdout. On failure an error document is
//! printed instead and the exit status is 2 for bad input, 1 otherwise.

use clap::Parser;
use nutrition_recommender::{
    artifacts::ArtifactBundle,
    config::RecommenderConfig,
    errors::{AppError, AppResult, ErrorCode, ErrorResponse},
    intelligence::OutputMode,
    logging::{self, RecommendationLogger},
    models::ProfileRequest,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

const STDIN_MARKER: &str = "-";

#[derive(Parser)]
#[command(
    name = "nutrition-recommender",
    about = "Nutrition, exercise and weekly meal plan recommendations from a user profile",
    long_about = "Runs the pre-trained recommendation model over one user profile. Settings come from RECOMMENDER_* environment variables; flags override them."
)]
struct Args {
    /// Artifact bundle path (overrides `RECOMMENDER_ARTIFACTS`)
    #[arg(long)]
    artifacts: Option<PathBuf>,

    /// Profile JSON file, or `-` to read stdin
    #[arg(long, default_value = STDIN_MARKER)]
    profile: String,

    /// Seed for a reproducible meal plan (overrides `RECOMMENDER_SEED`)
    #[arg(long)]
    seed: Option<u64>,

    /// Model output mode: 6 (predicted restriction) or 5 (supplied restriction)
    #[arg(long, value_parser = parse_mode)]
    mode: Option<OutputMode>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn parse_mode(value: &str) -> Result<OutputMode, String> {
    OutputMode::from_str_opt(value).ok_or_else(|| format!("unknown output mode '{value}'"))
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_from_env() {
        eprintln!("Logging initialization failed: {e}");
    }

    let request_id = Uuid::new_v4().to_string();
    match run(&args, &request_id) {
        Ok(body) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(app_error) => {
            error!(
                request_id = %request_id,
                error.code = %app_error.code,
                error.message = %app_error.message,
                "Recommendation failed"
            );
            let status = app_error.http_status();
            let response = ErrorResponse::from(app_error.with_request_id(request_id));
            match to_json(&response, args.pretty) {
                Ok(body) => println!("{body}"),
                Err(e) => eprintln!("Failed to serialize error response: {e}"),
            }
            if (400..500).contains(&status) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(args: &Args, request_id: &str) -> AppResult<String> {
    let mut config = RecommenderConfig::from_env()?;
    if let Some(path) = &args.artifacts {
        config.artifacts_path.clone_from(path);
    }
    if let Some(mode) = args.mode {
        config.output_mode = mode;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    info!("{}", config.summary());

    let recommender =
        ArtifactBundle::from_path(&config.artifacts_path)?.into_recommender(config.output_mode)?;
    let request = ProfileRequest::from_json_str(&read_profile(&args.profile)?)?;

    let mut rng: Box<dyn RngCore> = match config.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let started = Instant::now();
    let recommendation = recommender.recommend_request(request, request_id, rng.as_mut())?;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    RecommendationLogger::log_recommendation(&recommendation, elapsed_ms);

    to_json(&recommendation, args.pretty)
}

fn read_profile(source: &str) -> AppResult<String> {
    let body = if source == STDIN_MARKER {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(source)
    };
    body.map_err(|e| {
        AppError::new(
            ErrorCode::ValidationFailed,
            format!("failed to read profile from '{source}': {e}"),
        )
        .with_source(e)
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<String> {
    let body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(body)
}

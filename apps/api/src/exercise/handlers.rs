//! Axum route handlers for the exercise recommendation API.

use axum::{extract::State, Json};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::exercise::bodypart::map_body_part;
use crate::exercise::recommender::{recommend, RecommendParams};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendExerciseRequest {
    #[serde(default)]
    pub id: String,
    /// Coarse body-part word ("shoulders", "legs", "random", ...).
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub level: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendExerciseResponse {
    pub exercises: Vec<String>,
}

/// POST /recommendExercise
///
/// Maps the user's body-part word to catalog categories, picks one at
/// random, and returns up to 3 similar exercises adjusted for goal/level.
pub async fn handle_recommend_exercise(
    State(state): State<AppState>,
    Json(request): Json<RecommendExerciseRequest>,
) -> Result<Json<RecommendExerciseResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    info!(
        "Exercise request: user_id={}, part={}, goal={}, level={}",
        request.id, request.message, request.goal, request.level
    );

    let catalog_parts = state.engine.distinct_body_parts();
    let categories = map_body_part(&request.message, &catalog_parts);
    let selected = categories
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No exercise category for body part '{}'",
                request.message
            ))
        })?;
    info!("Selected category: {selected}");

    let exercises = recommend(
        &state.engine,
        &selected,
        &request.goal,
        &request.level,
        &RecommendParams::default(),
    )?;
    info!("Recommended exercises: {}", exercises.join(", "));

    Ok(Json(RecommendExerciseResponse { exercises }))
}

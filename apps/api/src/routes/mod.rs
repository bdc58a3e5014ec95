pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::exercise::handlers::handle_recommend_exercise;
use crate::nutrient::handlers::handle_recommend_nutrient;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/recommendExercise", post(handle_recommend_exercise))
        .route("/recommendNutrient", post(handle_recommend_nutrient))
        .with_state(state)
}

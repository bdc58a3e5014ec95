use std::sync::Arc;

use crate::catalog::FoodCatalog;
use crate::config::Config;
use crate::exercise::engine::ExerciseEngine;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The exercise engine (corpus + TF-IDF matrix + similarity index) is built
/// once in `main` and never mutated afterwards, so handlers share it
/// lock-free through the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ExerciseEngine>,
    /// Pluggable food catalog source. Default: HttpFoodCatalog against FOOD_API_URL.
    pub catalog: Arc<dyn FoodCatalog>,
    pub config: Config,
}

//! Axum route handlers for the nutrient recommendation API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::food::ScoredFood;
use crate::nutrient::scoring::{rank_foods, UserIntake};
use crate::state::AppState;

/// Nutrient fields are `Option` so that a missing field reaches `validate()`
/// and comes back as the documented validation error envelope instead of
/// dying in the `Json` extractor.
#[derive(Debug, Deserialize)]
pub struct RecommendNutrientRequest {
    pub carb: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub sodium: Option<f64>,
    pub chol: Option<f64>,
    #[serde(default)]
    pub familiar_ingredients: Vec<String>,
}

impl RecommendNutrientRequest {
    fn validate(&self) -> Result<UserIntake, AppError> {
        let fields = [
            ("carb", self.carb),
            ("protein", self.protein),
            ("fat", self.fat),
            ("sodium", self.sodium),
            ("chol", self.chol),
        ];
        let mut values = [0.0_f64; 5];
        for (slot, (name, value)) in values.iter_mut().zip(fields) {
            let value = value
                .ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
            if !value.is_finite() {
                return Err(AppError::Validation(format!(
                    "{name} must be a finite number"
                )));
            }
            if value < 0.0 {
                return Err(AppError::Validation(format!(
                    "{name} must not be negative"
                )));
            }
            *slot = value;
        }
        let [carb, protein, fat, sodium, chol] = values;
        Ok(UserIntake {
            carb,
            protein,
            fat,
            sodium,
            chol,
        })
    }
}

/// POST /recommendNutrient
///
/// Fetches the food catalog, scores every record against the user's
/// remaining nutrient need and familiar ingredients, and returns the top 10.
/// An empty catalog is a valid empty result, not an error.
pub async fn handle_recommend_nutrient(
    State(state): State<AppState>,
    Json(request): Json<RecommendNutrientRequest>,
) -> Result<Json<Vec<ScoredFood>>, AppError> {
    let intake = request.validate()?;

    let catalog = state.catalog.fetch_all().await?;
    info!("Fetched {} foods from catalog", catalog.len());

    let ranked = rank_foods(&intake, &request.familiar_ingredients, &catalog);
    info!("Returning {} scored foods", ranked.len());

    Ok(Json(ranked))
}

//! Nutrient scoring — gap from ideal intake plus ingredient familiarity.
//!
//! The gap score is a weighted sum of absolute differences between the
//! user's remaining need (ideal − current intake) and the food's own
//! content; lower is better and unbounded above. It is folded into a
//! bounded goodness term `1/(gap+1)` before blending with the ingredient
//! overlap, so both contributions live in [0, 1].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::food::{FoodRecord, ScoredFood};

/// The user's current intake snapshot, supplied per request.
/// Grams for carb/protein/fat, mg for sodium/cholesterol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIntake {
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
    pub sodium: f64,
    pub chol: f64,
}

/// Ideal daily targets. Service-wide defaults today; per-user targets are a
/// possible later refinement.
#[derive(Debug, Clone)]
pub struct NutrientTargets {
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
    pub sodium: f64,
    pub chol: f64,
}

impl Default for NutrientTargets {
    fn default() -> Self {
        Self {
            carb: 250.0,
            protein: 70.0,
            fat: 60.0,
            sodium: 1500.0,
            chol: 300.0,
        }
    }
}

/// Per-nutrient deviation weights.
#[derive(Debug, Clone)]
pub struct NutrientWeights {
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
    pub sodium: f64,
    pub chol: f64,
}

impl Default for NutrientWeights {
    fn default() -> Self {
        Self {
            carb: 1.2,
            protein: 1.0,
            fat: 1.5,
            sodium: 2.0,
            chol: 1.3,
        }
    }
}

/// Number of ranked foods returned to the caller.
pub const TOP_K: usize = 10;

/// Weighted absolute deviation between the user's remaining need and the
/// food's content. Total over all finite inputs; never negative.
pub fn nutrient_gap_score(
    user: &UserIntake,
    food: &FoodRecord,
    targets: &NutrientTargets,
    weights: &NutrientWeights,
) -> f64 {
    weights.carb * ((targets.carb - user.carb) - food.carbohydrate).abs()
        + weights.protein * ((targets.protein - user.protein) - food.protein).abs()
        + weights.fat * ((targets.fat - user.fat) - food.fat).abs()
        + weights.sodium * ((targets.sodium - user.sodium) - food.sodium).abs()
        + weights.chol * ((targets.chol - user.chol) - food.cholesterol).abs()
}

/// Fraction of the food's ingredient list the user already knows, in [0, 1].
/// Exactly 0 for an empty familiar set. The overlap is counted over distinct
/// ingredients while the denominator is the raw list length, so duplicate
/// entries dilute the score.
pub fn ingredient_score(familiar: &[String], food: &FoodRecord) -> f64 {
    if familiar.is_empty() {
        return 0.0;
    }
    let familiar: HashSet<&str> = familiar.iter().map(|s| s.as_str()).collect();
    let food_ingredients: HashSet<&str> = food.ingredients.iter().map(|s| s.as_str()).collect();
    let matched = food_ingredients.intersection(&familiar).count();
    matched as f64 / food.ingredients.len().max(1) as f64
}

/// Scores the whole catalog and returns the top ranked foods, descending by
/// final score. Equal scores keep catalog insertion order (stable sort).
/// An empty catalog yields an empty list.
pub fn rank_foods(user: &UserIntake, familiar: &[String], catalog: &[FoodRecord]) -> Vec<ScoredFood> {
    let targets = NutrientTargets::default();
    let weights = NutrientWeights::default();

    let mut scored: Vec<ScoredFood> = catalog
        .iter()
        .map(|food| {
            let nutrient_score = nutrient_gap_score(user, food, &targets, &weights);
            let ingredient_score = ingredient_score(familiar, food);
            // Flip lower-is-better into a bounded higher-is-better term.
            let final_score = 1.0 / (nutrient_score + 1.0) + ingredient_score;
            ScoredFood {
                id: food.id.clone(),
                foodname: food.foodname.clone(),
                nutrient_score,
                ingredient_score,
                final_score,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(TOP_K);
    scored
}

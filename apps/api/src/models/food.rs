use serde::{Deserialize, Serialize};

/// One food record from the external catalog store. Read-only for this
/// service; nutrient amounts are grams (carb/protein/fat) and mg
/// (sodium/cholesterol) per serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Catalog code of the food.
    pub id: String,
    /// Display name; unique within the catalog.
    pub foodname: String,
    #[serde(default)]
    pub calories: f64,
    pub carbohydrate: f64,
    pub protein: f64,
    pub fat: f64,
    pub sodium: f64,
    pub cholesterol: f64,
    /// Ingredient names associated with the food.
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// A ranked catalog entry returned to the caller. Transient — produced and
/// discarded within a single request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredFood {
    pub id: String,
    pub foodname: String,
    /// Raw weighted nutrient gap; lower is better, unbounded above.
    pub nutrient_score: f64,
    /// Ingredient familiarity overlap in [0, 1].
    pub ingredient_score: f64,
    /// 1/(gap+1) + ingredient_score; higher is better.
    pub final_score: f64,
}

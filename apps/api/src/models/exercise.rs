use serde::{Deserialize, Serialize};

/// One exercise record from the corpus CSV (megaGym dataset layout).
/// Immutable once loaded; the row's position in the corpus is its identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRow {
    #[serde(rename = "Title")]
    pub title: String,
    /// Free-text description; may be missing in the dataset → zero vector.
    #[serde(rename = "Desc")]
    pub description: Option<String>,
    #[serde(rename = "BodyPart")]
    pub body_part: String,
    #[serde(rename = "Difficulty")]
    pub difficulty: String,
}

impl ExerciseRow {
    /// Description text used for TF-IDF fitting; empty when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

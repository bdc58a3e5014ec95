//! Exercise engine — the process-wide, immutable similarity state.
//!
//! Built once in `main` from the corpus CSV and injected into handlers via
//! `AppState` (never a module-level global). Holds the exercise rows, the
//! fitted TF-IDF model, and the precomputed cosine index.

use anyhow::{bail, Result};
use tracing::info;

use crate::models::exercise::ExerciseRow;
use crate::text::similarity::SimilarityIndex;
use crate::text::tfidf::TfidfModel;
use crate::text::tokenize::tokenize;

pub struct ExerciseEngine {
    exercises: Vec<ExerciseRow>,
    index: SimilarityIndex,
}

impl ExerciseEngine {
    /// Fits TF-IDF over the exercise descriptions and precomputes the
    /// similarity matrix. Fails when fewer than 2 documents survive
    /// preprocessing — a degenerate index would serve malformed
    /// recommendations, so the process must refuse to start instead.
    pub fn build(exercises: Vec<ExerciseRow>) -> Result<Self> {
        let corpus: Vec<String> = exercises
            .iter()
            .map(|e| e.description_text().to_string())
            .collect();

        let usable = corpus.iter().filter(|d| !tokenize(d).is_empty()).count();
        if usable < 2 {
            bail!(
                "Corpus has {usable} usable documents after preprocessing; \
                 at least 2 are required for similarity ranking"
            );
        }

        let model = TfidfModel::fit(&corpus);
        info!(
            "Fitted TF-IDF: {} documents, {} terms",
            model.num_docs(),
            model.vocab.len()
        );

        let index = SimilarityIndex::build(&model);
        info!("Precomputed {}x{} similarity matrix", index.len(), index.len());

        Ok(ExerciseEngine { exercises, index })
    }

    pub fn exercises(&self) -> &[ExerciseRow] {
        &self.exercises
    }

    pub fn exercise(&self, i: usize) -> &ExerciseRow {
        &self.exercises[i]
    }

    /// Index of the first exercise whose body-part label equals `category`.
    pub fn reference_for(&self, category: &str) -> Option<usize> {
        self.exercises.iter().position(|e| e.body_part == category)
    }

    /// Distinct body-part labels in corpus order (for the "random" mapping).
    pub fn distinct_body_parts(&self) -> Vec<String> {
        let mut parts: Vec<String> = Vec::new();
        for e in &self.exercises {
            if !parts.contains(&e.body_part) {
                parts.push(e.body_part.clone());
            }
        }
        parts
    }

    /// Neighbors of document `i`, descending by similarity, self excluded.
    pub fn neighbors(&self, i: usize) -> Vec<(usize, f64)> {
        self.index.top_neighbors(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, desc: &str, body_part: &str, difficulty: &str) -> ExerciseRow {
        ExerciseRow {
            title: title.to_string(),
            description: Some(desc.to_string()),
            body_part: body_part.to_string(),
            difficulty: difficulty.to_string(),
        }
    }

    #[test]
    fn test_build_rejects_degenerate_corpus() {
        let rows = vec![
            row("A", "bench press chest", "Chest", "Beginner"),
            row("B", "", "Chest", "Beginner"),
            row("C", "the and of", "Chest", "Beginner"),
        ];
        assert!(ExerciseEngine::build(rows).is_err());
    }

    #[test]
    fn test_build_accepts_two_usable_documents() {
        let rows = vec![
            row("A", "bench press chest", "Chest", "Beginner"),
            row("B", "squat for legs", "Quadriceps", "Expert"),
        ];
        assert!(ExerciseEngine::build(rows).is_ok());
    }

    #[test]
    fn test_reference_for_picks_first_matching_row() {
        let rows = vec![
            row("A", "bench press chest", "Chest", "Beginner"),
            row("B", "incline press chest", "Chest", "Expert"),
            row("C", "squat for legs", "Quadriceps", "Beginner"),
        ];
        let engine = ExerciseEngine::build(rows).unwrap();
        assert_eq!(engine.reference_for("Chest"), Some(0));
        assert_eq!(engine.reference_for("Quadriceps"), Some(2));
        assert_eq!(engine.reference_for("Lats"), None);
    }

    #[test]
    fn test_distinct_body_parts_keeps_corpus_order() {
        let rows = vec![
            row("A", "bench press", "Chest", "Beginner"),
            row("B", "squat", "Quadriceps", "Beginner"),
            row("C", "incline press", "Chest", "Expert"),
        ];
        let engine = ExerciseEngine::build(rows).unwrap();
        assert_eq!(engine.distinct_body_parts(), vec!["Chest", "Quadriceps"]);
    }
}

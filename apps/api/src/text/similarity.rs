//! Similarity Index — precomputed pairwise cosine similarity over the
//! fitted TF-IDF matrix.
//!
//! Rows are already unit-length, so cosine reduces to a plain dot product.
//! The full N×N matrix is computed once at startup and shared read-only;
//! queries are O(N log N) for the sort and touch no floating-point math.

use crate::text::tfidf::TfidfModel;

#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    matrix: Vec<Vec<f64>>,
}

impl SimilarityIndex {
    /// Precomputes the symmetric cosine matrix from a fitted model.
    /// The diagonal is pinned to exactly 1.0 for non-zero rows so the
    /// self-similarity invariant holds without float tolerance.
    pub fn build(model: &TfidfModel) -> Self {
        let n = model.num_docs();
        let mut matrix = vec![vec![0.0_f64; n]; n];
        for i in 0..n {
            matrix[i][i] = if model.is_zero_row(i) { 0.0 } else { 1.0 };
            for j in (i + 1)..n {
                let dot = dot(&model.rows[i], &model.rows[j]);
                matrix[i][j] = dot;
                matrix[j][i] = dot;
            }
        }
        SimilarityIndex { matrix }
    }

    /// Cosine similarity between documents `i` and `j`.
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        self.matrix[i][j]
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// All neighbors of `i` (excluding `i` itself) ordered descending by
    /// similarity; equal scores keep original corpus order.
    pub fn top_neighbors(&self, i: usize) -> Vec<(usize, f64)> {
        let mut neighbors: Vec<(usize, f64)> = self.matrix[i]
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(j, &score)| (j, score))
            .collect();
        // Stable sort: ties stay in ascending index order.
        neighbors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        neighbors
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

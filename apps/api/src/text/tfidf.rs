//! TF-IDF Vectorizer — fits a dense, L2-row-normalized weight matrix over a
//! fixed corpus.
//!
//! Deterministic by construction: the vocabulary is the sorted set of all
//! distinct tokens, so column order (and therefore the whole matrix) is
//! bit-identical across refits of the same corpus.

use std::collections::{BTreeSet, HashMap};

use crate::text::tokenize::tokenize;

/// Fitted TF-IDF model: vocabulary plus one normalized weight row per
/// corpus document.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    /// Sorted distinct tokens; index = matrix column.
    pub vocab: Vec<String>,
    /// rows[i][j] = L2-normalized tf-idf weight of vocab[j] in document i.
    /// Documents with no usable tokens are all-zero rows.
    pub rows: Vec<Vec<f64>>,
}

impl TfidfModel {
    /// Fits the model over `corpus`. One pass to tokenize, one to count
    /// document frequencies, one to fill and normalize the matrix.
    pub fn fit(corpus: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

        // Sorted set → deterministic column ordering.
        let vocab: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        let vocab_index: HashMap<&str, usize> = vocab
            .iter()
            .enumerate()
            .map(|(j, w)| (w.as_str(), j))
            .collect();

        // df(w) = number of documents containing w at least once.
        let mut df = vec![0usize; vocab.len()];
        for doc in &tokenized {
            for word in doc.iter().collect::<BTreeSet<_>>() {
                df[vocab_index[word.as_str()]] += 1;
            }
        }

        let n_docs = tokenized.len();
        let mut rows = Vec::with_capacity(n_docs);
        for doc in &tokenized {
            let mut row = vec![0.0_f64; vocab.len()];
            if !doc.is_empty() {
                let mut counts: HashMap<&str, usize> = HashMap::new();
                for word in doc {
                    *counts.entry(word.as_str()).or_insert(0) += 1;
                }
                for (word, count) in counts {
                    let j = vocab_index[word];
                    let tf = count as f64 / doc.len() as f64;
                    // Smoothed idf: strictly positive even for terms present
                    // in every document.
                    let idf = ((n_docs as f64 + 1.0) / (df[j] as f64 + 1.0)).ln() + 1.0;
                    row[j] = tf * idf;
                }
                l2_normalize(&mut row);
            }
            rows.push(row);
        }

        TfidfModel { vocab, rows }
    }

    /// Number of documents the model was fitted over.
    pub fn num_docs(&self) -> usize {
        self.rows.len()
    }

    /// True when document `i` produced no usable tokens (all-zero row).
    pub fn is_zero_row(&self, i: usize) -> bool {
        self.rows[i].iter().all(|&w| w == 0.0)
    }
}

/// Divides `row` by its Euclidean norm; zero rows are left untouched.
fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in row.iter_mut() {
            *w /= norm;
        }
    }
}

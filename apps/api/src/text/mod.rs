// Text similarity engine: tokenization → TF-IDF fit → cosine index.
// Built once at startup over the static exercise corpus; read-only afterwards.

pub mod similarity;
pub mod tfidf;
pub mod tokenize;

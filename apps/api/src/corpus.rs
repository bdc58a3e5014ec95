//! Exercise corpus loading — reads the static CSV dataset once at startup.
//!
//! Schema violations (missing column, unreadable file or encoding) are fatal
//! here rather than surfacing later as malformed recommendations.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::exercise::ExerciseRow;

/// Loads all exercise rows from the CSV at `path`.
pub fn load_corpus(path: &Path) -> Result<Vec<ExerciseRow>> {
    info!("Loading exercise corpus from {}", path.display());

    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open corpus file {}", path.display()))?;
    let rows = read_corpus(file)
        .with_context(|| format!("Failed to parse corpus file {}", path.display()))?;

    info!("Loaded {} exercise records", rows.len());
    Ok(rows)
}

/// Parses exercise rows from any CSV reader. Split from `load_corpus` so
/// tests can feed in-memory data.
pub fn read_corpus<R: Read>(reader: R) -> Result<Vec<ExerciseRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        let row: ExerciseRow = record.context("Corpus row does not match expected schema")?;
        rows.push(row);
    }
    Ok(rows)
}

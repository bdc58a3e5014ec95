//! Body-part mapping — coarse user words to catalog category labels.
//!
//! A static lookup table rather than a chain of string comparisons. Unmapped
//! words pass through unchanged as a single-element set, and "random" expands
//! to every distinct label present in the catalog.

/// Coarse body-part word → catalog categories it covers.
const BODY_PART_TABLE: &[(&str, &[&str])] = &[
    ("shoulders", &["Shoulders", "Traps"]),
    ("arms", &["Biceps", "Forearms", "Triceps"]),
    ("legs", &["Calves", "Adductors", "Quadriceps", "Hamstrings"]),
    ("back", &["Lats", "Lower Back", "Middle Back"]),
    ("chest", &["Chest"]),
];

/// Maps a (case-insensitive) body-part word to candidate catalog categories.
/// `catalog_parts` supplies the full label set for the "random" word.
pub fn map_body_part(message: &str, catalog_parts: &[String]) -> Vec<String> {
    let normalized = message.trim().to_lowercase();

    if normalized == "random" {
        return catalog_parts.to_vec();
    }

    for (word, categories) in BODY_PART_TABLE {
        if *word == normalized {
            return categories.iter().map(|c| c.to_string()).collect();
        }
    }

    // Unmapped words are used as-is (a user may name a category directly).
    vec![message.trim().to_string()]
}

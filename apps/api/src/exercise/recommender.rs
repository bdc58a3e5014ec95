//! Exercise Recommender — candidate gathering and goal/level score
//! adjustment over the precomputed similarity index.

use crate::errors::AppError;
use crate::exercise::engine::ExerciseEngine;

/// Tunable ranking parameters. Defaults preserve the service's original
/// behavior: a 14-neighbor candidate window (similarity ranks 2–15),
/// +0.1 per matched goal/level signal, 3 returned titles.
#[derive(Debug, Clone)]
pub struct RecommendParams {
    pub candidate_window: usize,
    pub goal_bonus: f64,
    pub level_bonus: f64,
    pub top_k: usize,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            candidate_window: 14,
            goal_bonus: 0.1,
            level_bonus: 0.1,
            top_k: 3,
        }
    }
}

/// Training goal → description keywords that earn the goal bonus.
const GOAL_KEYWORDS: &[(&str, &[&str])] = &[
    ("muscle_gain", &["strength", "mass", "build"]),
    ("fat_loss", &["burn", "cardio", "fat"]),
    ("rehabilitation", &["stretch", "rehab", "recovery"]),
];

/// Requested level → difficulty labels counted as a match.
const LEVEL_SYNONYMS: &[(&str, &[&str])] = &[
    ("beginner", &["beginner", "easy"]),
    ("intermediate", &["middle", "intermediate"]),
    ("expert", &["hard", "expert"]),
];

/// Recommends up to `params.top_k` exercise titles for a catalog category.
///
/// Pipeline: reference lookup → nearest-neighbor window → additive
/// goal/level adjustment → stable re-rank. An unknown category is a
/// `NotFound` failure, never a silent default.
pub fn recommend(
    engine: &ExerciseEngine,
    category: &str,
    goal: &str,
    level: &str,
    params: &RecommendParams,
) -> Result<Vec<String>, AppError> {
    let reference = engine
        .reference_for(category)
        .ok_or_else(|| AppError::NotFound(format!("No exercise found for body part '{category}'")))?;

    // Candidates in descending similarity order; their position here is the
    // tie-break rank for the final sort.
    let mut scored: Vec<(usize, f64)> = engine
        .neighbors(reference)
        .into_iter()
        .take(params.candidate_window)
        .map(|(idx, base)| {
            let row = engine.exercise(idx);
            let score = adjusted_score(
                base,
                row.description_text(),
                &row.difficulty,
                goal,
                level,
                params,
            );
            (idx, score)
        })
        .collect();

    // Stable sort: equal adjusted scores keep their similarity rank.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    Ok(scored
        .into_iter()
        .take(params.top_k)
        .map(|(idx, _)| engine.exercise(idx).title.clone())
        .collect())
}

/// Adds the goal and level bonuses to a base similarity score. The two
/// adjustments are independent; a candidate gains 0, one bonus, or both.
pub fn adjusted_score(
    base: f64,
    description: &str,
    difficulty: &str,
    goal: &str,
    level: &str,
    params: &RecommendParams,
) -> f64 {
    let mut score = base;
    if goal_matches(goal, description) {
        score += params.goal_bonus;
    }
    if level_matches(level, difficulty) {
        score += params.level_bonus;
    }
    score
}

fn goal_matches(goal: &str, description: &str) -> bool {
    let goal = goal.to_lowercase();
    let description = description.to_lowercase();
    GOAL_KEYWORDS
        .iter()
        .find(|(g, _)| *g == goal)
        .map(|(_, keywords)| keywords.iter().any(|k| description.contains(k)))
        .unwrap_or(false)
}

fn level_matches(level: &str, difficulty: &str) -> bool {
    let level = level.to_lowercase();
    let difficulty = difficulty.to_lowercase();
    LEVEL_SYNONYMS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, synonyms)| synonyms.contains(&difficulty.as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exercise::ExerciseRow;

    fn row(title: &str, desc: &str, body_part: &str, difficulty: &str) -> ExerciseRow {
        ExerciseRow {
            title: title.to_string(),
            description: Some(desc.to_string()),
            body_part: body_part.to_string(),
            difficulty: difficulty.to_string(),
        }
    }

    fn params() -> RecommendParams {
        RecommendParams::default()
    }

    #[test]
    fn test_goal_keyword_adds_exactly_one_tenth() {
        let p = params();
        let without = adjusted_score(0.5, "slow press", "Expert", "fat_loss", "", &p);
        let with = adjusted_score(0.5, "slow cardio press", "Expert", "fat_loss", "", &p);
        assert!((with - without - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_level_synonyms_match_case_insensitively() {
        let p = params();
        for (difficulty, level) in [("easy", "Beginner"), ("Middle", "intermediate"), ("hard", "EXPERT")] {
            let score = adjusted_score(0.5, "x", difficulty, "", level, &p);
            assert!((score - 0.6).abs() < 1e-12, "{level}/{difficulty} scored {score}");
        }
    }

    #[test]
    fn test_bonuses_are_independent_and_additive() {
        let p = params();
        let both = adjusted_score(0.5, "build mass fast", "beginner", "muscle_gain", "beginner", &p);
        assert!((both - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_goal_and_level_add_nothing() {
        let p = params();
        assert_eq!(adjusted_score(0.5, "burn fat", "easy", "bulking", "novice", &p), 0.5);
    }

    #[test]
    fn test_unknown_category_is_not_found() {
        let engine = ExerciseEngine::build(vec![
            row("A", "bench press chest", "Chest", "Beginner"),
            row("B", "squat legs", "Quadriceps", "Beginner"),
        ])
        .unwrap();
        let result = recommend(&engine, "Lats", "", "", &params());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_reference_never_recommends_itself() {
        let engine = ExerciseEngine::build(vec![
            row("Reference", "bench press chest strength", "Chest", "Beginner"),
            row("Close", "incline bench press chest", "Chest", "Beginner"),
            row("Far", "running cardio", "Quadriceps", "Beginner"),
        ])
        .unwrap();
        let titles = recommend(&engine, "Chest", "", "", &params()).unwrap();
        assert!(!titles.contains(&"Reference".to_string()));
    }

    #[test]
    fn test_returns_at_most_top_k_titles() {
        let rows: Vec<ExerciseRow> = (0..20)
            .map(|i| {
                row(
                    &format!("Exercise {i}"),
                    "press the weight up slowly",
                    if i == 0 { "Chest" } else { "Quadriceps" },
                    "Beginner",
                )
            })
            .collect();
        let engine = ExerciseEngine::build(rows).unwrap();
        let titles = recommend(&engine, "Chest", "", "", &params()).unwrap();
        assert_eq!(titles.len(), 3);
    }

    #[test]
    fn test_fat_loss_bonus_outranks_close_base_similarity() {
        // Three-document scenario: the reference shares little with either
        // candidate, so their base similarities sit within 0.1 of each
        // other; the fat_loss keyword bonus must promote the cardio doc.
        let engine = ExerciseEngine::build(vec![
            row("Reference", "push the chest up with strength", "Chest", "Beginner"),
            row("Rehab", "stretch for rehab recovery", "Chest", "Beginner"),
            row("Cardio", "run for cardio burn fat", "Chest", "Beginner"),
        ])
        .unwrap();
        let titles = recommend(&engine, "Chest", "fat_loss", "", &params()).unwrap();
        assert_eq!(titles[0], "Cardio");
    }

    #[test]
    fn test_candidate_window_excludes_rank_sixteen_even_with_bonuses() {
        // Reference plus 14 weakly-similar candidates fill the window
        // (similarity ranks 2-15). One more document sits at rank 16 with
        // zero similarity but would earn both bonuses (+0.2), beating every
        // windowed candidate's adjusted score — it must still be excluded.
        let mut rows = vec![row(
            "Reference",
            "alpha beta",
            "Chest",
            "Expert",
        )];
        for i in 0..14u8 {
            let l = (b'a' + i) as char;
            let filler: Vec<String> = (2..7).map(|n| l.to_string().repeat(n)).collect();
            rows.push(row(
                &format!("Window {i}"),
                &format!("alpha {}", filler.join(" ")),
                "Quadriceps",
                "Expert",
            ));
        }
        rows.push(row(
            "Fat Burner Run",
            "run for cardio burn fat",
            "Quadriceps",
            "easy",
        ));
        let engine = ExerciseEngine::build(rows).unwrap();

        let titles = recommend(&engine, "Chest", "fat_loss", "beginner", &params()).unwrap();
        assert_eq!(titles.len(), 3);
        assert!(!titles.contains(&"Fat Burner Run".to_string()));
        assert!(titles.iter().all(|t| t.starts_with("Window")));
    }

    #[test]
    fn test_tied_scores_keep_similarity_rank() {
        // Identical descriptions and no bonuses: the nearer neighbor (by
        // corpus order on exact ties) must come first.
        let engine = ExerciseEngine::build(vec![
            row("Reference", "press chest", "Chest", "Beginner"),
            row("First", "press chest slowly", "Quadriceps", "Beginner"),
            row("Second", "press chest slowly", "Quadriceps", "Beginner"),
        ])
        .unwrap();
        let titles = recommend(&engine, "Chest", "", "", &params()).unwrap();
        assert_eq!(titles[0], "First");
        assert_eq!(titles[1], "Second");
    }
}

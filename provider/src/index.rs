//! The question index: parse, filter, and pick one at random.

use crate::{Difficulty, ProviderError};
use rand::rngs::SmallRng;
use rand::Rng;
use serde::Deserialize;

/// One selectable question from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSummary {
    /// URL slug of the question page.
    pub slug: String,
    /// Human-readable title.
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct ProblemIndex {
    stat_status_pairs: Vec<StatStatusPair>,
}

#[derive(Debug, Deserialize)]
struct StatStatusPair {
    stat: Stat,
    difficulty: Level,
    paid_only: bool,
}

#[derive(Debug, Deserialize)]
struct Stat {
    #[serde(rename = "question__title_slug")]
    title_slug: String,
    #[serde(rename = "question__title")]
    title: String,
}

#[derive(Debug, Deserialize)]
struct Level {
    level: u8,
}

/// Pick a uniformly random free question of the given difficulty.
///
/// The candidate pool contains exactly the index entries whose numeric level
/// matches `difficulty` and that are not paid-only. An empty pool is
/// [`ProviderError::NoQuestions`], never an out-of-bounds pick.
pub fn select_random(
    index_json: &str,
    difficulty: Difficulty,
    rng: &mut SmallRng,
) -> Result<QuestionSummary, ProviderError> {
    let index: ProblemIndex = serde_json::from_str(index_json)?;

    let mut candidates: Vec<QuestionSummary> = index
        .stat_status_pairs
        .into_iter()
        .filter(|pair| pair.difficulty.level == difficulty.level() && !pair.paid_only)
        .map(|pair| QuestionSummary {
            slug: pair.stat.title_slug,
            title: pair.stat.title,
        })
        .collect();

    if candidates.is_empty() {
        return Err(ProviderError::NoQuestions(difficulty));
    }

    let pick = rng.gen_range(0..candidates.len());
    Ok(candidates.swap_remove(pick))
}

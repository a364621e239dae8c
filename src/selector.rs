//! Serve-time item selection
//!
//! Draws one item from a candidate pool under difficulty, skill, and
//! anti-repetition constraints. Constraints relax in stages when the
//! pool can't satisfy them; total exhaustion is a normal outcome
//! (`None`) and the caller falls back to the procedural generator.
//!
//! The caller owns the recent-id and recent-skill windows (see
//! [`crate::session::SessionHistory`]) and supplies the candidate pool
//! from whatever storage backs the compiled bank.

use ahash::AHashSet;

use crate::bank::item::BankItem;
use crate::core::config::SelectorConfig;
use crate::core::types::{Difficulty, League, MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::rng::RandomSource;

/// Per-call selection constraints. No persistent identity; build one
/// from learner state for each draw.
#[derive(Debug, Clone, Default)]
pub struct SelectionCriteria {
    /// Target difficulty; the candidate band is this ±1
    pub global_difficulty: Difficulty,
    /// Pin selection to one skill
    pub skill_tag: Option<String>,
    /// Skills the learner is weakest at, steered toward 40% of the time
    pub weak_skills: Vec<String>,
    /// Recently served item ids, excluded from selection (window ≤ 100)
    pub recent_ids: Vec<String>,
    /// Recently served skill tags (window ≤ 5)
    pub recent_skill_tags: Vec<String>,
}

/// Select the next item with default tuning
pub fn select_next<'a, R: RandomSource>(
    criteria: &SelectionCriteria,
    pool: &'a [BankItem],
    rng: &mut R,
) -> Option<&'a BankItem> {
    select_next_with(&SelectorConfig::default(), criteria, pool, rng)
}

/// Select the next item.
///
/// Relaxation ladder: full constraints → drop skill match → drop the
/// difficulty band (recent-id exclusion always holds) → `None`.
pub fn select_next_with<'a, R: RandomSource>(
    config: &SelectorConfig,
    criteria: &SelectionCriteria,
    pool: &'a [BankItem],
    rng: &mut R,
) -> Option<&'a BankItem> {
    // Resolve the target skill
    let mut target_skill = criteria.skill_tag.clone();
    if target_skill.is_none()
        && !criteria.weak_skills.is_empty()
        && rng.next_f64() < config.weak_skill_bias
    {
        target_skill = Some(rng.pick(&criteria.weak_skills).clone());
    }

    // Anti-repetition: don't serve the same skill 3+ times running
    if let Some(ref t) = target_skill {
        let tags = &criteria.recent_skill_tags;
        if tags.len() >= 2 && tags[tags.len() - 2..].iter().all(|s| s == t) {
            target_skill = None;
        }
    }

    let min_diff = criteria.global_difficulty.saturating_sub(1).max(MIN_DIFFICULTY);
    let max_diff = (criteria.global_difficulty + 1).min(MAX_DIFFICULTY);
    let excluded: AHashSet<&str> = criteria.recent_ids.iter().map(String::as_str).collect();

    let in_band =
        |item: &BankItem| item.global_difficulty >= min_diff && item.global_difficulty <= max_diff;
    let fresh = |item: &BankItem| !excluded.contains(item.id.as_str());

    let mut candidates: Vec<&BankItem> = pool
        .iter()
        .filter(|item| {
            in_band(item)
                && fresh(item)
                && target_skill
                    .as_ref()
                    .map_or(true, |t| &item.skill_tag == t)
        })
        .take(config.pool_cap)
        .collect();

    if candidates.is_empty() && target_skill.is_some() {
        tracing::debug!("no candidates for target skill, relaxing skill match");
        candidates = pool
            .iter()
            .filter(|item| in_band(item) && fresh(item))
            .take(config.pool_cap)
            .collect();
    }

    if candidates.is_empty() {
        tracing::debug!("no candidates in difficulty band, relaxing band");
        candidates = pool.iter().filter(|item| fresh(item)).take(config.pool_cap).collect();
    }

    if candidates.is_empty() {
        tracing::warn!(
            difficulty = criteria.global_difficulty,
            "selection exhausted after full relaxation"
        );
        return None;
    }

    Some(pick_weighted(config, &candidates, criteria.global_difficulty, rng))
}

/// Roulette-wheel draw; exact difficulty matches carry extra weight
fn pick_weighted<'a, R: RandomSource>(
    config: &SelectorConfig,
    candidates: &[&'a BankItem],
    target_diff: Difficulty,
    rng: &mut R,
) -> &'a BankItem {
    let weight = |item: &BankItem| -> u32 {
        if item.global_difficulty == target_diff {
            config.exact_difficulty_weight
        } else {
            1
        }
    };
    let total: u32 = candidates.iter().map(|i| weight(i)).sum();
    let mut roll = rng.next_f64() * total as f64;
    for &item in candidates {
        roll -= weight(item) as f64;
        if roll <= 0.0 {
            return item;
        }
    }
    candidates[0]
}

/// Difficulty band a league's content is drawn from
pub fn league_difficulty_band(league: League) -> (Difficulty, Difficulty) {
    match league {
        League::U8 => (1, 2),
        League::U10 => (2, 3),
        League::U12 => (3, 4),
        League::U14 => (4, 5),
        League::HS => (5, 5),
        League::College => (6, 6),
    }
}

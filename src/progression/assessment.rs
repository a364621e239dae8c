//! One-shot placement assessment scoring
//!
//! A fixed batch of attempts maps to a starting difficulty and league.
//! Fast average response times earn a small bonus on top of raw
//! accuracy, capped at 100.

use ahash::AHashMap;

use crate::core::types::{Difficulty, League};

/// One assessment answer with its response time
#[derive(Debug, Clone)]
pub struct AssessmentAttempt {
    pub skill_tag: String,
    pub correct: bool,
    pub response_time_ms: u32,
}

/// Placement result for a scored assessment
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentScore {
    /// Percent correct plus speed bonus, capped at 100
    pub overall_score: u32,
    /// Percent correct per skill tag seen in the batch
    pub per_skill_scores: AHashMap<String, u32>,
    pub starting_difficulty: Difficulty,
    pub starting_league: League,
}

/// Score a completed assessment batch.
///
/// The batch must be non-empty; scoring an empty batch is a caller
/// error and the result is meaningless.
pub fn score_assessment(attempts: &[AssessmentAttempt]) -> AssessmentScore {
    debug_assert!(!attempts.is_empty(), "assessment batch must be non-empty");

    let total = attempts.len();
    let total_correct = attempts.iter().filter(|a| a.correct).count();
    let overall_score = (total_correct as f64 / total as f64 * 100.0).round() as u32;

    // Per-skill accuracy
    let mut buckets: AHashMap<&str, (u32, u32)> = AHashMap::new();
    for a in attempts {
        let bucket = buckets.entry(a.skill_tag.as_str()).or_insert((0, 0));
        bucket.1 += 1;
        if a.correct {
            bucket.0 += 1;
        }
    }
    let per_skill_scores: AHashMap<String, u32> = buckets
        .into_iter()
        .map(|(skill, (correct, count))| {
            (
                skill.to_string(),
                (correct as f64 / count as f64 * 100.0).round() as u32,
            )
        })
        .collect();

    // Speed bonus: fast correct answers bump score slightly
    let avg_time = attempts
        .iter()
        .map(|a| a.response_time_ms as f64)
        .sum::<f64>()
        / total as f64;
    let speed_bonus = if avg_time < 5000.0 {
        5
    } else if avg_time < 8000.0 {
        2
    } else {
        0
    };
    let adjusted = (overall_score + speed_bonus).min(100);

    AssessmentScore {
        overall_score: adjusted,
        per_skill_scores,
        starting_difficulty: score_to_difficulty(adjusted),
        starting_league: score_to_league(adjusted),
    }
}

fn score_to_difficulty(score: u32) -> Difficulty {
    if score >= 90 {
        5
    } else if score >= 75 {
        4
    } else if score >= 60 {
        3
    } else if score >= 40 {
        2
    } else {
        1
    }
}

fn score_to_league(score: u32) -> League {
    if score >= 90 {
        League::HS
    } else if score >= 75 {
        League::U14
    } else if score >= 60 {
        League::U12
    } else if score >= 40 {
        League::U10
    } else {
        League::U8
    }
}

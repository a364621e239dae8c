//! XP, coin, streak, and badge rewards per answered question

use ahash::AHashSet;

use crate::core::types::Difficulty;
use crate::progression::skill_model::SkillModel;

/// Derived reward deltas for one answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerReward {
    pub xp_gain: u32,
    pub coin_gain: u32,
    pub new_streak: u32,
}

/// Compute the reward for an answer at the given difficulty.
///
/// Correct answers earn xp scaled by difficulty plus coins, with a
/// small coin bonus once a streak reaches 3. Wrong answers still earn
/// consolation xp but reset the streak.
pub fn answer_rewards(correct: bool, difficulty: Difficulty, streak: u32) -> AnswerReward {
    let new_streak = if correct { streak + 1 } else { 0 };
    let xp_gain = if correct { 10 + difficulty as u32 * 2 } else { 2 };
    let coin_gain = if correct {
        5 + if new_streak >= 3 { 3 } else { 0 }
    } else {
        0
    };
    AnswerReward {
        xp_gain,
        coin_gain,
        new_streak,
    }
}

/// One mastery-gated badge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeRule {
    pub id: &'static str,
    pub skill: &'static str,
    pub threshold: f64,
}

/// All badge rules, checked after every skill-model update
pub const BADGE_RULES: [BadgeRule; 5] = [
    BadgeRule { id: "multiplication_master", skill: "multiplication", threshold: 0.85 },
    BadgeRule { id: "fraction_pro", skill: "fractions", threshold: 0.8 },
    BadgeRule { id: "pattern_genius", skill: "patterns", threshold: 0.8 },
    BadgeRule { id: "word_problem_wizard", skill: "word_problems", threshold: 0.8 },
    BadgeRule { id: "division_champ", skill: "division", threshold: 0.8 },
];

/// Badges newly earned by the current skill model, excluding ones the
/// learner already owns
pub fn badge_unlocks(model: &SkillModel, owned: &AHashSet<String>) -> Vec<&'static BadgeRule> {
    BADGE_RULES
        .iter()
        .filter(|rule| {
            !owned.contains(rule.id)
                && model
                    .get(rule.skill)
                    .is_some_and(|&mastery| mastery >= rule.threshold)
        })
        .collect()
}

//! Learner progression engine
//!
//! Pure functions over explicit inputs: attempt outcomes go in, a
//! skill model, difficulty signal, league decision, and rewards come
//! out. Persisting the results is the caller's job.

pub mod accuracy;
pub mod assessment;
pub mod league;
pub mod rewards;
pub mod skill_model;

pub use accuracy::{adjust_difficulty, rolling_accuracy, should_adjust_difficulty, AttemptOutcome};
pub use assessment::{score_assessment, AssessmentAttempt, AssessmentScore};
pub use league::{check_league_promotion, league_threshold, LeagueThreshold};
pub use rewards::{answer_rewards, badge_unlocks, AnswerReward, BadgeRule, BADGE_RULES};
pub use skill_model::{
    average_mastery, get_weak_skills, update_skill_model, SkillModel, WEAK_SKILL_THRESHOLD,
};

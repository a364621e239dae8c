//! Integration tests driving the progression engine the way a serve
//! loop would: answers stream in, the skill model / difficulty /
//! league / rewards evolve together

use math_striker::core::types::League;
use math_striker::progression::{
    adjust_difficulty, answer_rewards, check_league_promotion, get_weak_skills, rolling_accuracy,
    score_assessment, should_adjust_difficulty, update_skill_model, AssessmentAttempt,
    AttemptOutcome, SkillModel, WEAK_SKILL_THRESHOLD,
};

/// A strong learner climbs: mastery rises, difficulty ratchets up,
/// and leagues unlock as xp accumulates
#[test]
fn test_strong_learner_climbs() {
    let mut model = SkillModel::default();
    let mut difficulty = 1u8;
    let mut league = League::U8;
    let mut xp = 0u32;
    let mut streak = 0u32;
    let mut window: Vec<AttemptOutcome> = Vec::new();
    let mut since_adjust = 0u32;

    let skills = ["mult_facts", "div_facts", "frac_compare"];
    for q in 0..200usize {
        let skill = skills[q % skills.len()];
        let correct = true;

        update_skill_model(&mut model, skill, correct);
        let reward = answer_rewards(correct, difficulty, streak);
        streak = reward.new_streak;
        xp += reward.xp_gain;

        window.push(AttemptOutcome {
            correct,
            skill_tag: skill.to_string(),
        });
        if window.len() > 20 {
            window.remove(0);
        }

        since_adjust += 1;
        if should_adjust_difficulty(since_adjust) {
            difficulty = adjust_difficulty(difficulty, rolling_accuracy(&window));
            since_adjust = 0;
        }

        if let Some(next) = check_league_promotion(league, xp, &model) {
            assert_eq!(next, league.next().unwrap(), "promotion skipped a step");
            league = next;
        }
    }

    assert_eq!(difficulty, 6, "perfect play should reach the cap");
    assert!(league.outranks(&League::U10));
    assert!(get_weak_skills(&model, WEAK_SKILL_THRESHOLD).is_empty());
}

/// A struggling learner sinks to the floor and stays promotable-free
#[test]
fn test_struggling_learner_floors() {
    let mut model = SkillModel::default();
    let mut difficulty = 3u8;
    let mut window: Vec<AttemptOutcome> = Vec::new();

    for q in 1..=50u32 {
        update_skill_model(&mut model, "mult_facts", false);
        window.push(AttemptOutcome {
            correct: false,
            skill_tag: "mult_facts".to_string(),
        });
        if window.len() > 20 {
            window.remove(0);
        }
        if q % 5 == 0 {
            difficulty = adjust_difficulty(difficulty, rolling_accuracy(&window));
        }
    }

    assert_eq!(difficulty, 1);
    let weak = get_weak_skills(&model, WEAK_SKILL_THRESHOLD);
    assert_eq!(weak, vec!["mult_facts"]);
    assert_eq!(check_league_promotion(League::U8, 0, &model), None);
}

/// Mixed performance in the 60-85% band leaves difficulty alone
#[test]
fn test_stable_band_holds_difficulty() {
    let window: Vec<AttemptOutcome> = (0..20)
        .map(|i| AttemptOutcome {
            correct: i % 4 != 0, // 75%
            skill_tag: "s".to_string(),
        })
        .collect();
    assert_eq!(adjust_difficulty(3, rolling_accuracy(&window)), 3);
}

/// Assessment placement feeds a coherent starting state
#[test]
fn test_assessment_to_starting_state() {
    let attempts: Vec<AssessmentAttempt> = (0..15)
        .map(|i| AssessmentAttempt {
            skill_tag: ["multiplication", "division", "fractions"][i % 3].to_string(),
            correct: i < 12,
            response_time_ms: 4000,
        })
        .collect();
    let score = score_assessment(&attempts);
    assert_eq!(score.overall_score, 85);
    assert_eq!(score.starting_difficulty, 4);
    assert_eq!(score.starting_league, League::U14);

    // Placement difficulty is a valid selection target immediately.
    assert!((1..=6).contains(&score.starting_difficulty));
}

/// The documented EMA fixed point
#[test]
fn test_ema_fixed_point() {
    let mut model = SkillModel::default();
    let v = update_skill_model(&mut model, "multiplication", true);
    assert_eq!(v, 0.575);
}

/// Terminal league never promotes regardless of stats
#[test]
fn test_terminal_league() {
    let mut model = SkillModel::default();
    for skill in ["a", "b", "c"] {
        model.insert(skill.to_string(), 1.0);
    }
    assert_eq!(check_league_promotion(League::College, 1_000_000, &model), None);
}

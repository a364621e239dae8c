//! Per-skill mastery tracking
//!
//! Mastery is an exponential moving average over attempt outcomes.
//! Unseen skills start at the neutral prior and exist implicitly; the
//! first attempt materializes the entry, and entries are never removed.

use ahash::AHashMap;

/// Mastery estimate per skill tag, each in [0, 1]
pub type SkillModel = AHashMap<String, f64>;

/// EMA smoothing factor. A correct answer moves an unseen skill from
/// 0.50 to 0.575; roughly 15 consistent answers dominate the estimate.
pub const EMA_ALPHA: f64 = 0.15;

/// Prior mastery assumed for a skill with no attempts
pub const UNSEEN_MASTERY: f64 = 0.5;

/// Mastery below this marks a skill as weak
pub const WEAK_SKILL_THRESHOLD: f64 = 0.6;

/// Fold one attempt outcome into the model and return the new mastery.
///
/// `new = old * (1 - α) + outcome * α`, rounded to 3 decimal places.
pub fn update_skill_model(model: &mut SkillModel, skill_tag: &str, correct: bool) -> f64 {
    let current = model.get(skill_tag).copied().unwrap_or(UNSEEN_MASTERY);
    let outcome = if correct { 1.0 } else { 0.0 };
    let updated = current * (1.0 - EMA_ALPHA) + outcome * EMA_ALPHA;
    let rounded = (updated * 1000.0).round() / 1000.0;
    model.insert(skill_tag.to_string(), rounded);
    rounded
}

/// All skills below `threshold`, weakest first
pub fn get_weak_skills(model: &SkillModel, threshold: f64) -> Vec<String> {
    let mut weak: Vec<(&String, f64)> = model
        .iter()
        .filter(|(_, &mastery)| mastery < threshold)
        .map(|(tag, &mastery)| (tag, mastery))
        .collect();
    weak.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    weak.into_iter().map(|(tag, _)| tag.clone()).collect()
}

/// Mean mastery across all known skills; 0 when none are known
pub fn average_mastery(model: &SkillModel) -> f64 {
    if model.is_empty() {
        return 0.0;
    }
    model.values().sum::<f64>() / model.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_correct_from_prior() {
        let mut model = SkillModel::default();
        let v = update_skill_model(&mut model, "multiplication", true);
        // 0.5 * 0.85 + 1 * 0.15
        assert_eq!(v, 0.575);
        assert_eq!(model["multiplication"], 0.575);
    }

    #[test]
    fn test_first_incorrect_from_prior() {
        let mut model = SkillModel::default();
        let v = update_skill_model(&mut model, "div_facts", false);
        assert_eq!(v, 0.425);
    }

    #[test]
    fn test_converges_upward() {
        let mut model = SkillModel::default();
        for _ in 0..60 {
            update_skill_model(&mut model, "frac_compare", true);
        }
        assert!(model["frac_compare"] > 0.99);
    }

    #[test]
    fn test_rounding_to_three_places() {
        let mut model = SkillModel::default();
        update_skill_model(&mut model, "s", true);
        update_skill_model(&mut model, "s", false);
        let v = model["s"];
        assert_eq!(v, (v * 1000.0).round() / 1000.0);
    }

    #[test]
    fn test_weak_skills_sorted_ascending() {
        let mut model = SkillModel::default();
        model.insert("a".to_string(), 0.55);
        model.insert("b".to_string(), 0.2);
        model.insert("c".to_string(), 0.9);
        model.insert("d".to_string(), 0.4);
        let weak = get_weak_skills(&model, WEAK_SKILL_THRESHOLD);
        assert_eq!(weak, vec!["b", "d", "a"]);
    }

    #[test]
    fn test_weak_skills_threshold_exclusive() {
        let mut model = SkillModel::default();
        model.insert("edge".to_string(), 0.6);
        assert!(get_weak_skills(&model, 0.6).is_empty());
    }

    #[test]
    fn test_average_mastery_empty() {
        assert_eq!(average_mastery(&SkillModel::default()), 0.0);
    }
}

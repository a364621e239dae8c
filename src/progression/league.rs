//! League promotion
//!
//! Each league above the first is gated by a minimum xp and a minimum
//! average mastery across every known skill. Promotion moves exactly
//! one step per check; the terminal league never promotes.

use crate::core::types::League;
use crate::progression::skill_model::{average_mastery, SkillModel};

/// Entry requirements for a league
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeagueThreshold {
    pub xp: u32,
    pub avg_mastery: f64,
}

/// Requirements to enter the given league
pub fn league_threshold(league: League) -> LeagueThreshold {
    match league {
        League::U8 => LeagueThreshold { xp: 0, avg_mastery: 0.0 },
        League::U10 => LeagueThreshold { xp: 200, avg_mastery: 0.4 },
        League::U12 => LeagueThreshold { xp: 600, avg_mastery: 0.55 },
        League::U14 => LeagueThreshold { xp: 1200, avg_mastery: 0.65 },
        League::HS => LeagueThreshold { xp: 2500, avg_mastery: 0.75 },
        League::College => LeagueThreshold { xp: 5000, avg_mastery: 0.85 },
    }
}

/// Check whether the learner qualifies for the next league.
///
/// Returns the new league on promotion, None otherwise (including at
/// the terminal league).
pub fn check_league_promotion(
    current: League,
    xp: u32,
    skill_model: &SkillModel,
) -> Option<League> {
    let next = current.next()?;
    let req = league_threshold(next);
    let avg = average_mastery(skill_model);
    if xp >= req.xp && avg >= req.avg_mastery {
        Some(next)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(mastery: f64) -> SkillModel {
        let mut m = SkillModel::default();
        m.insert("mult_facts".to_string(), mastery);
        m.insert("div_facts".to_string(), mastery);
        m
    }

    #[test]
    fn test_promotes_one_step() {
        let m = model_with(0.9);
        assert_eq!(check_league_promotion(League::U8, 10_000, &m), Some(League::U10));
    }

    #[test]
    fn test_xp_gate() {
        let m = model_with(0.9);
        assert_eq!(check_league_promotion(League::U8, 199, &m), None);
        assert_eq!(check_league_promotion(League::U8, 200, &m), Some(League::U10));
    }

    #[test]
    fn test_mastery_gate() {
        assert_eq!(check_league_promotion(League::U10, 5_000, &model_with(0.5)), None);
        assert_eq!(
            check_league_promotion(League::U10, 5_000, &model_with(0.56)),
            Some(League::U12)
        );
    }

    #[test]
    fn test_terminal_league_never_promotes() {
        let m = model_with(1.0);
        assert_eq!(check_league_promotion(League::College, u32::MAX, &m), None);
    }

    #[test]
    fn test_empty_model_counts_as_zero_mastery() {
        let m = SkillModel::default();
        // xp is plenty but average mastery is 0 < 0.4
        assert_eq!(check_league_promotion(League::U8, 10_000, &m), None);
    }
}

//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Difficulty tier (1-6) used for cross-domain comparison
pub type Difficulty = u8;

/// Lowest difficulty tier
pub const MIN_DIFFICULTY: Difficulty = 1;

/// Highest difficulty tier
pub const MAX_DIFFICULTY: Difficulty = 6;

/// Clamp an arbitrary tier value into the valid difficulty range
pub fn clamp_difficulty(d: i32) -> Difficulty {
    d.clamp(MIN_DIFFICULTY as i32, MAX_DIFFICULTY as i32) as Difficulty
}

/// Content domain enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Multiplication,
    Division,
    Fractions,
    Patterns,
    WordProblems,
}

impl Domain {
    /// Get all domains, in bank compilation order
    pub fn all() -> &'static [Domain] {
        &[
            Domain::Multiplication,
            Domain::Division,
            Domain::Fractions,
            Domain::Patterns,
            Domain::WordProblems,
        ]
    }

    /// Wire name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Multiplication => "multiplication",
            Domain::Division => "division",
            Domain::Fractions => "fractions",
            Domain::Patterns => "patterns",
            Domain::WordProblems => "word_problems",
        }
    }
}

/// Question presentation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    McqSingle,
    McqMulti,
    Visual,
    Word,
}

impl QuestionType {
    pub fn name(&self) -> &'static str {
        match self {
            QuestionType::McqSingle => "mcq_single",
            QuestionType::McqMulti => "mcq_multi",
            QuestionType::Visual => "visual",
            QuestionType::Word => "word",
        }
    }
}

/// Progression league (age-bracket tier, lowest to highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum League {
    U8 = 0,
    U10 = 1,
    U12 = 2,
    U14 = 3,
    HS = 4,
    College = 5,
}

impl League {
    /// Get all leagues in promotion order
    pub fn all() -> &'static [League] {
        &[
            League::U8,
            League::U10,
            League::U12,
            League::U14,
            League::HS,
            League::College,
        ]
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            League::U8 => "U8",
            League::U10 => "U10",
            League::U12 => "U12",
            League::U14 => "U14",
            League::HS => "HS",
            League::College => "College",
        }
    }

    /// The league one step above this one, or None at the terminal league
    pub fn next(&self) -> Option<League> {
        match self {
            League::U8 => Some(League::U10),
            League::U10 => Some(League::U12),
            League::U12 => Some(League::U14),
            League::U14 => Some(League::HS),
            League::HS => Some(League::College),
            League::College => None,
        }
    }

    /// Returns true if this league outranks the other
    pub fn outranks(&self, other: &League) -> bool {
        (*self as u8) > (*other as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_domains() {
        assert_eq!(Domain::all().len(), 5);
    }

    #[test]
    fn test_domain_names() {
        assert_eq!(Domain::Multiplication.name(), "multiplication");
        assert_eq!(Domain::WordProblems.name(), "word_problems");
    }

    #[test]
    fn test_domain_serde_roundtrip() {
        let json = serde_json::to_string(&Domain::WordProblems).unwrap();
        assert_eq!(json, "\"word_problems\"");
        let back: Domain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Domain::WordProblems);
    }

    #[test]
    fn test_question_type_names() {
        assert_eq!(QuestionType::McqSingle.name(), "mcq_single");
        assert_eq!(QuestionType::Word.name(), "word");
    }

    #[test]
    fn test_clamp_difficulty() {
        assert_eq!(clamp_difficulty(0), 1);
        assert_eq!(clamp_difficulty(3), 3);
        assert_eq!(clamp_difficulty(9), 6);
    }

    #[test]
    fn test_league_ordering() {
        assert!(League::College.outranks(&League::HS));
        assert!(League::U10.outranks(&League::U8));
        assert!(!League::U8.outranks(&League::U8));
    }

    #[test]
    fn test_league_next_chain() {
        assert_eq!(League::U8.next(), Some(League::U10));
        assert_eq!(League::HS.next(), Some(League::College));
        assert_eq!(League::College.next(), None);
    }

    #[test]
    fn test_league_serde_names() {
        assert_eq!(serde_json::to_string(&League::HS).unwrap(), "\"HS\"");
        assert_eq!(serde_json::to_string(&League::U14).unwrap(), "\"U14\"");
    }
}

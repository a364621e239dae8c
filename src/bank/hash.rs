//! Content fingerprinting for dedup and persistence identity
//!
//! The hash covers the semantic fields of an item in a canonical form:
//! fixed key order, prompt whitespace collapsed, absent fields
//! serialized as explicit nulls. Items that render the same question
//! hash identically; anything else differing is a different question.
//! Collisions between distinct content are accepted risk.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::bank::item::{Answer, Visual};
use crate::core::types::{Domain, QuestionType};

/// Canonical structural form fed to the digest. Key order is part of
/// the identity contract; do not reorder fields.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HashInput<'a> {
    domain: &'a str,
    skill_tag: &'a str,
    question_type: &'a str,
    prompt: String,
    choices: Option<&'a [String]>,
    correct_answer: Option<&'a Answer>,
    visual: Option<&'a Visual>,
}

/// Stable SHA-256 hex digest of the normalized question fields.
pub fn compute_hash(
    domain: Domain,
    skill_tag: &str,
    question_type: QuestionType,
    prompt: &str,
    choices: Option<&[String]>,
    correct_answer: Option<&Answer>,
    visual: Option<&Visual>,
) -> String {
    let input = HashInput {
        domain: domain.name(),
        skill_tag,
        question_type: question_type.name(),
        prompt: normalize_prompt(prompt),
        choices,
        correct_answer,
        visual,
    };
    // Serialization of this closed struct cannot fail.
    let normalized = serde_json::to_string(&input).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Trim and collapse internal whitespace runs to single spaces
fn normalize_prompt(prompt: &str) -> String {
    prompt.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        vec!["42".into(), "36".into(), "48".into(), "35".into()]
    }

    #[test]
    fn test_whitespace_insensitive() {
        let c = choices();
        let answer = Answer::from("42");
        let a = compute_hash(
            Domain::Multiplication,
            "mult_facts",
            QuestionType::McqSingle,
            "  What is   6 × 7?  ",
            Some(c.as_slice()),
            Some(&answer),
            None,
        );
        let b = compute_hash(
            Domain::Multiplication,
            "mult_facts",
            QuestionType::McqSingle,
            "What is 6 × 7?",
            Some(c.as_slice()),
            Some(&answer),
            None,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_answer_changes_hash() {
        let c = choices();
        let a = compute_hash(
            Domain::Multiplication,
            "mult_facts",
            QuestionType::McqSingle,
            "What is 6 × 7?",
            Some(c.as_slice()),
            Some(&Answer::from("42")),
            None,
        );
        let b = compute_hash(
            Domain::Multiplication,
            "mult_facts",
            QuestionType::McqSingle,
            "What is 6 × 7?",
            Some(c.as_slice()),
            Some(&Answer::from("36")),
            None,
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_visual_changes_hash() {
        let a = compute_hash(
            Domain::Fractions,
            "frac_identify",
            QuestionType::Visual,
            "What fraction of the bar is shaded?",
            None,
            Some(&Answer::from("1/4")),
            Some(&Visual::FractionBars { parts: 4, shaded: 1 }),
        );
        let b = compute_hash(
            Domain::Fractions,
            "frac_identify",
            QuestionType::Visual,
            "What fraction of the bar is shaded?",
            None,
            Some(&Answer::from("1/4")),
            Some(&Visual::FractionBars { parts: 4, shaded: 2 }),
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_hex_shape() {
        let h = compute_hash(
            Domain::Division,
            "div_facts",
            QuestionType::McqSingle,
            "What is 12 ÷ 3?",
            None,
            None,
            None,
        );
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_question_type_changes_hash() {
        let answer = Answer::from("12");
        let a = compute_hash(
            Domain::Patterns,
            "pattern_number",
            QuestionType::McqSingle,
            "What comes next? 2, 4, 6, 8, 10, ?",
            None,
            Some(&answer),
            None,
        );
        let b = compute_hash(
            Domain::Patterns,
            "pattern_number",
            QuestionType::Word,
            "What comes next? 2, 4, 6, 8, 10, ?",
            None,
            Some(&answer),
            None,
        );
        assert_ne!(a, b);
    }
}

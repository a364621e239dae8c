//! Compiled question-bank record types
//!
//! Field order and serialized names match the persisted ndjson format;
//! the content hash depends on a subset of these fields (see
//! [`crate::bank::hash`]), so renames here are format changes.

use serde::{Deserialize, Serialize};

use crate::core::types::{Difficulty, Domain, QuestionType};

/// One generated question record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankItem {
    /// Stable identifier, unique within a version
    pub id: String,
    /// Content-bank version tag
    pub version: String,
    pub domain: Domain,
    /// Fine-grained skill within the domain (e.g. "mult_facts")
    pub skill_tag: String,
    /// Finer labels under the skill tag
    pub subskill_tags: Vec<String>,
    /// Human-facing grade descriptor derived from difficulty
    pub grade_band: String,
    pub question_type: QuestionType,
    pub global_difficulty: Difficulty,
    /// Currently always equal to global_difficulty
    pub skill_difficulty: Difficulty,
    pub prompt: String,
    /// Answer options for choice-based types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    pub correct_answer: Answer,
    /// Renderable diagram payload for visual questions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual: Option<Visual>,
    pub explanation: String,
    pub source: Source,
    /// Content fingerprint; the dedup and persistence identity key
    pub hash: String,
}

/// Correct answer: one string, or a set of strings for multi-select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    One(String),
    Many(Vec<String>),
}

impl Answer {
    /// True if `candidate` is the answer or one of the answers
    pub fn accepts(&self, candidate: &str) -> bool {
        match self {
            Answer::One(s) => s == candidate,
            Answer::Many(set) => set.iter().any(|s| s == candidate),
        }
    }

    /// Every answer string, regardless of arity
    pub fn values(&self) -> Vec<&str> {
        match self {
            Answer::One(s) => vec![s.as_str()],
            Answer::Many(set) => set.iter().map(String::as_str).collect(),
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::One(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::One(s.to_string())
    }
}

impl From<Vec<String>> for Answer {
    fn from(set: Vec<String>) -> Self {
        Answer::Many(set)
    }
}

/// Structured diagram payload, discriminated by its shape tag.
///
/// The engine treats these as opaque data beyond the tag; rendering
/// belongs to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Visual {
    #[serde(rename_all = "camelCase")]
    ArraysMultiplication { rows: u32, cols: u32 },
    #[serde(rename_all = "camelCase")]
    FractionBars { parts: u32, shaded: u32 },
    #[serde(rename_all = "camelCase")]
    FractionCircle { parts: u32, shaded: u32 },
    #[serde(rename_all = "camelCase")]
    NumberLine {
        min: u32,
        max: u32,
        divisions: u32,
        marked: u32,
    },
    #[serde(rename_all = "camelCase")]
    FunctionMachine {
        operation: FunctionOp,
        n: i64,
        examples: Vec<FunctionExample>,
    },
}

/// Operation applied by a function-machine visual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionOp {
    Add,
    Multiply,
    TwoOp,
}

/// One worked input/output row of a function machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionExample {
    pub input: i64,
    pub output: i64,
}

/// Provenance tag, constant per version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub kind: String,
    pub origin: String,
    pub license: String,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            kind: "generated".to_string(),
            origin: "math_striker_templates".to_string(),
            license: "proprietary_generated".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_accepts_single() {
        let a = Answer::from("42");
        assert!(a.accepts("42"));
        assert!(!a.accepts("41"));
    }

    #[test]
    fn test_answer_accepts_multi() {
        let a = Answer::Many(vec!["x".to_string(), "y".to_string()]);
        assert!(a.accepts("x"));
        assert!(a.accepts("y"));
        assert!(!a.accepts("z"));
    }

    #[test]
    fn test_answer_serde_shapes() {
        assert_eq!(
            serde_json::to_string(&Answer::from("12")).unwrap(),
            "\"12\""
        );
        assert_eq!(
            serde_json::to_string(&Answer::Many(vec!["a".into(), "b".into()])).unwrap(),
            "[\"a\",\"b\"]"
        );
    }

    #[test]
    fn test_visual_tagging() {
        let v = Visual::ArraysMultiplication { rows: 3, cols: 4 };
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            "{\"type\":\"arraysMultiplication\",\"rows\":3,\"cols\":4}"
        );

        let v = Visual::NumberLine {
            min: 0,
            max: 1,
            divisions: 4,
            marked: 3,
        };
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            "{\"type\":\"numberLine\",\"min\":0,\"max\":1,\"divisions\":4,\"marked\":3}"
        );
    }

    #[test]
    fn test_function_machine_serde() {
        let v = Visual::FunctionMachine {
            operation: FunctionOp::TwoOp,
            n: 4,
            examples: vec![FunctionExample { input: 1, output: 6 }],
        };
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"operation\":\"two_op\""));
        assert!(json.contains("{\"input\":1,\"output\":6}"));
    }

    #[test]
    fn test_item_roundtrip_omits_absent_fields() {
        let item = BankItem {
            id: "div_facts_d2_v1_0001".to_string(),
            version: "v1".to_string(),
            domain: Domain::Division,
            skill_tag: "div_facts".to_string(),
            subskill_tags: vec!["facts_within_100".to_string()],
            grade_band: "2-3".to_string(),
            question_type: QuestionType::McqSingle,
            global_difficulty: 2,
            skill_difficulty: 2,
            prompt: "What is 12 ÷ 3?".to_string(),
            choices: Some(vec!["4".into(), "5".into(), "3".into(), "6".into()]),
            correct_answer: Answer::from("4"),
            visual: None,
            explanation: "12 ÷ 3 = 4.".to_string(),
            source: Source::default(),
            hash: "abc".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("\"visual\""));
        assert!(json.contains("\"skillTag\":\"div_facts\""));
        let back: BankItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, item.id);
        assert!(back.visual.is_none());
    }
}

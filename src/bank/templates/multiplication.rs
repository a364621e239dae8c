//! Multiplication item generator
//!
//! Covers fact recall, missing-factor inversion, array-model visuals,
//! the commutative property, and product comparison.

use crate::bank::hash::compute_hash;
use crate::bank::item::{Answer, BankItem, Source, Visual};
use crate::bank::templates::{choices4, format_id, grade_band, pad4};
use crate::core::types::{clamp_difficulty, Domain, QuestionType};
use crate::rng::{Mulberry32, RandomSource};

const DOMAIN_SEED: u32 = 0x51f1_c0de;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Skill {
    Facts,
    MissingFactor,
    Arrays,
    Properties,
    Compare,
}

const SKILLS: [Skill; 5] = [
    Skill::Facts,
    Skill::MissingFactor,
    Skill::Arrays,
    Skill::Properties,
    Skill::Compare,
];

impl Skill {
    fn tag(self) -> &'static str {
        match self {
            Skill::Facts => "mult_facts",
            Skill::MissingFactor => "mult_missing_factor",
            Skill::Arrays => "mult_arrays",
            Skill::Properties => "mult_properties",
            Skill::Compare => "mult_compare",
        }
    }

    fn subskills(self) -> &'static [&'static str] {
        match self {
            Skill::Facts => &["facts_0_12"],
            Skill::MissingFactor => &["missing_factor"],
            Skill::Arrays => &["arrays_visual"],
            Skill::Properties => &["commutative", "distributive"],
            Skill::Compare => &["greater_less"],
        }
    }
}

pub fn generate(version: &str, seed: u32, count: usize) -> Vec<BankItem> {
    let mut rng = Mulberry32::new(seed ^ DOMAIN_SEED);
    let mut items = Vec::with_capacity(count);

    for i in 0..count {
        let sk = *rng.pick(&SKILLS);
        let diff = clamp_difficulty(rng.int(1, 6) as i32);
        let max = if diff <= 2 {
            10
        } else if diff <= 4 {
            12
        } else {
            15
        };
        let a = rng.int(1, max);
        let b = rng.int(1, max);
        let correct = a * b;

        let (prompt, choices, answer, qtype, visual, explanation) = match sk {
            Skill::Facts => {
                let prompt = format!("What is {} × {}?", a, b);
                let choices = choices4(&mut rng, correct, &[(a + 1) * b, a * (b + 1), (a - 1) * b]);
                let explanation = format!(
                    "{} × {} means {} groups of {}. That equals {}.",
                    a, b, a, b, correct
                );
                (
                    prompt,
                    choices,
                    Answer::from(correct.to_string()),
                    QuestionType::McqSingle,
                    None,
                    explanation,
                )
            }
            Skill::MissingFactor => {
                let left = rng.next_f64() < 0.5;
                let missing = if left { a } else { b };
                let known = if left { b } else { a };
                let prompt = if left {
                    format!("□ × {} = {}. What goes in the box?", known, correct)
                } else {
                    format!("{} × □ = {}. What goes in the box?", known, correct)
                };
                let choices = choices4(&mut rng, missing, &[missing + 1, missing - 1, missing + 2]);
                let explanation = format!("{} ÷ {} = {}.", correct, known, missing);
                (
                    prompt,
                    choices,
                    Answer::from(missing.to_string()),
                    QuestionType::McqSingle,
                    None,
                    explanation,
                )
            }
            Skill::Arrays => {
                let rows = a.min(10);
                let cols = b.min(10);
                let total = rows * cols;
                let prompt = format!(
                    "This array has {} rows and {} columns. How many dots total?",
                    rows, cols
                );
                let visual = Visual::ArraysMultiplication {
                    rows: rows as u32,
                    cols: cols as u32,
                };
                let choices = choices4(&mut rng, total, &[(rows + 1) * cols, rows * (cols + 1)]);
                let explanation = format!("{} rows × {} columns = {}.", rows, cols, total);
                (
                    prompt,
                    choices,
                    Answer::from(total.to_string()),
                    QuestionType::Visual,
                    Some(visual),
                    explanation,
                )
            }
            Skill::Properties => {
                // commutative: a×b = b×a confirmation
                let prompt = format!("Is {} × {} the same as {} × {}?", a, b, b, a);
                let mut opts = vec![
                    "Yes, they are equal".to_string(),
                    format!("No, {} × {} is bigger", a, b),
                    format!("No, {} × {} is bigger", b, a),
                ];
                rng.shuffle(&mut opts);
                let explanation = format!(
                    "Multiplication is commutative: {} × {} = {} × {} = {}.",
                    a, b, b, a, correct
                );
                (
                    prompt,
                    opts,
                    Answer::from("Yes, they are equal"),
                    QuestionType::McqSingle,
                    None,
                    explanation,
                )
            }
            Skill::Compare => {
                let a2 = rng.int(1, max);
                let b2 = rng.int(1, max);
                let p2 = a2 * b2;
                if correct == p2 {
                    continue;
                }
                let left = format!("{} × {}", a, b);
                let right = format!("{} × {}", a2, b2);
                let bigger = if correct > p2 { left.clone() } else { right.clone() };
                let prompt = format!("Which is greater: {} or {}?", left, right);
                let mut opts = vec![left.clone(), right.clone(), "They are equal".to_string()];
                rng.shuffle(&mut opts);
                let explanation = format!(
                    "{} = {}. {} = {}. {} is greater.",
                    left, correct, right, p2, bigger
                );
                (
                    prompt,
                    opts,
                    Answer::from(bigger),
                    QuestionType::McqSingle,
                    None,
                    explanation,
                )
            }
        };

        let id = format_id(&[sk.tag(), &format!("d{}", diff), version, &pad4(i + 1)]);
        let hash = compute_hash(
            Domain::Multiplication,
            sk.tag(),
            qtype,
            &prompt,
            Some(choices.as_slice()),
            Some(&answer),
            visual.as_ref(),
        );

        items.push(BankItem {
            id,
            version: version.to_string(),
            domain: Domain::Multiplication,
            skill_tag: sk.tag().to_string(),
            subskill_tags: sk.subskills().iter().map(|s| s.to_string()).collect(),
            grade_band: grade_band(diff).to_string(),
            question_type: qtype,
            global_difficulty: diff,
            skill_difficulty: diff,
            prompt,
            choices: Some(choices),
            correct_answer: answer,
            visual,
            explanation,
            source: Source::default(),
            hash,
        });
    }

    items
}

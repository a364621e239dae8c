//! Patterns item generator
//!
//! Arithmetic sequences (next term / missing term), multi-select rule
//! identification, and one- or two-operation function machines.

use crate::bank::hash::compute_hash;
use crate::bank::item::{Answer, BankItem, FunctionExample, FunctionOp, Source, Visual};
use crate::bank::templates::{choices4, format_id, grade_band, pad4};
use crate::core::types::{clamp_difficulty, Domain, QuestionType};
use crate::rng::{Mulberry32, RandomSource};

const DOMAIN_SEED: u32 = 0x6caa_9f11;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Skill {
    Number,
    Rule,
    FunctionMachine,
}

const SKILLS: [Skill; 3] = [Skill::Number, Skill::Rule, Skill::FunctionMachine];

impl Skill {
    fn tag(self) -> &'static str {
        match self {
            Skill::Number => "pattern_number",
            Skill::Rule => "pattern_rule",
            Skill::FunctionMachine => "function_machine",
        }
    }

    fn subskills(self) -> &'static [&'static str] {
        match self {
            Skill::Number => &["skip_counting", "growing"],
            Skill::Rule => &["find_rule"],
            Skill::FunctionMachine => &["input_output"],
        }
    }
}

pub fn generate(version: &str, seed: u32, count: usize) -> Vec<BankItem> {
    let mut rng = Mulberry32::new(seed ^ DOMAIN_SEED);
    let mut items = Vec::with_capacity(count);

    for i in 0..count {
        let sk = *rng.pick(&SKILLS);
        let diff = clamp_difficulty(rng.int(1, 6) as i32);

        let (prompt, choices, answer, qtype, visual, explanation) = match sk {
            Skill::Number => {
                let step = if diff <= 2 {
                    *rng.pick(&[2, 3, 5, 10])
                } else {
                    *rng.pick(&[3, 4, 6, 7, 8])
                };
                let start = if diff <= 3 {
                    *rng.pick(&[0, 1, 2, 3])
                } else {
                    *rng.pick(&[5, 6, 7, 8, 10])
                };
                let decreasing = diff >= 4 && rng.next_f64() < 0.3;
                let term = |j: i64| {
                    if decreasing {
                        start * step - step * j
                    } else {
                        start + step * j
                    }
                };
                let seq: Vec<i64> = (0..5).map(term).collect();
                let next = term(5);

                if rng.next_f64() < 0.5 {
                    // "what comes next?"
                    let shown: Vec<String> = seq.iter().map(|n| n.to_string()).collect();
                    let prompt = format!("What comes next? {}, ?", shown.join(", "));
                    let choices = choices4(&mut rng, next, &[next + step, next - step, next + 1]);
                    let explanation = if decreasing {
                        format!("Subtract {} each time: {} - {} = {}.", step, seq[4], step, next)
                    } else {
                        format!("Add {} each time: {} + {} = {}.", step, seq[4], step, next)
                    };
                    (
                        prompt,
                        choices,
                        Answer::from(next.to_string()),
                        QuestionType::McqSingle,
                        None,
                        explanation,
                    )
                } else {
                    // "fill in the missing number"
                    let mi = rng.int(2, 3) as usize;
                    let missing = seq[mi];
                    let shown: Vec<String> = seq
                        .iter()
                        .enumerate()
                        .map(|(idx, n)| {
                            if idx == mi {
                                "□".to_string()
                            } else {
                                n.to_string()
                            }
                        })
                        .collect();
                    let prompt = format!("Fill in the missing number: {}", shown.join(", "));
                    let choices =
                        choices4(&mut rng, missing, &[missing + step, missing - step, missing + 1]);
                    let explanation = format!(
                        "The pattern {} {} each time.",
                        if decreasing { "subtracts" } else { "adds" },
                        step
                    );
                    (
                        prompt,
                        choices,
                        Answer::from(missing.to_string()),
                        QuestionType::McqSingle,
                        None,
                        explanation,
                    )
                }
            }
            Skill::Rule => {
                let step = if diff <= 2 {
                    *rng.pick(&[2, 3, 5])
                } else if diff <= 4 {
                    *rng.pick(&[3, 4, 6])
                } else {
                    *rng.pick(&[6, 7, 8])
                };
                let seq: Vec<String> = (1..=5).map(|j| (step * j).to_string()).collect();
                let prompt = format!("Select ALL rules that match: {}", seq.join(", "));
                let correct = vec![
                    format!("Add {} each time", step),
                    format!("Counting by {}s", step),
                ];
                let mut wrong = vec![
                    "Multiply by 2 each time".to_string(),
                    format!("Counting by {}s", step - 1),
                    format!("Add {} each time", step + 1),
                ];
                rng.shuffle(&mut wrong);
                let mut opts = correct.clone();
                opts.extend(wrong.into_iter().take(2));
                rng.shuffle(&mut opts);
                let explanation = format!(
                    "Each number is {} more than the last = counting by {}s.",
                    step, step
                );
                (
                    prompt,
                    opts,
                    Answer::Many(correct),
                    QuestionType::McqMulti,
                    None,
                    explanation,
                )
            }
            Skill::FunctionMachine => {
                let op = if diff <= 2 {
                    FunctionOp::Add
                } else if diff <= 4 {
                    *rng.pick(&[FunctionOp::Add, FunctionOp::Multiply])
                } else {
                    *rng.pick(&[FunctionOp::Add, FunctionOp::Multiply, FunctionOp::TwoOp])
                };
                let n = if diff <= 2 {
                    *rng.pick(&[2, 3, 4])
                } else if diff <= 4 {
                    *rng.pick(&[3, 4, 5])
                } else {
                    *rng.pick(&[4, 5, 6])
                };
                let n2 = *rng.pick(&[1, 2, 3]);

                let compute = |x: i64| match op {
                    FunctionOp::Add => x + n,
                    FunctionOp::Multiply => x * n,
                    FunctionOp::TwoOp => x * n + n2,
                };
                let inputs: [i64; 4] = [1, 2, 3, 4];
                let outputs: Vec<i64> = inputs.iter().map(|&x| compute(x)).collect();
                let test_in = *rng.pick(&[5, 6, 7]);
                let test_out = compute(test_in);

                let pairs: Vec<String> = inputs
                    .iter()
                    .zip(&outputs)
                    .map(|(x, y)| format!("{}→{}", x, y))
                    .collect();
                let prompt = format!(
                    "In → Out: {}. If In = {}, Out = ?",
                    pairs.join(", "),
                    test_in
                );
                let visual = Visual::FunctionMachine {
                    operation: op,
                    n,
                    examples: inputs
                        .iter()
                        .zip(&outputs)
                        .map(|(&input, &output)| FunctionExample { input, output })
                        .collect(),
                };
                let choices =
                    choices4(&mut rng, test_out, &[test_out + 1, test_out - 1, test_out + n]);
                let explanation = match op {
                    FunctionOp::Add => {
                        format!("Add {}: {} + {} = {}.", n, test_in, n, test_out)
                    }
                    FunctionOp::Multiply => {
                        format!("Multiply by {}: {} × {} = {}.", n, test_in, n, test_out)
                    }
                    FunctionOp::TwoOp => format!(
                        "Multiply by {} then add {}: {} × {} + {} = {}.",
                        n, n2, test_in, n, n2, test_out
                    ),
                };
                (
                    prompt,
                    choices,
                    Answer::from(test_out.to_string()),
                    QuestionType::Visual,
                    Some(visual),
                    explanation,
                )
            }
        };

        let id = format_id(&[sk.tag(), &format!("d{}", diff), version, &pad4(i + 1)]);
        let hash = compute_hash(
            Domain::Patterns,
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
            domain: Domain::Patterns,
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

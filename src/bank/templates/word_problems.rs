//! Word-problem item generator
//!
//! Single-step multiplicative and partitive problems, fraction of a
//! quantity, and two-step composites, each wrapped in a named-character
//! narrative. Roughly half the narratives use soccer props; the rest
//! use neutral classroom objects, and the flavor lands in the subskill
//! tags.

use crate::bank::hash::compute_hash;
use crate::bank::item::{Answer, BankItem, Source};
use crate::bank::templates::{choices4, format_id, grade_band, pad4};
use crate::core::types::{clamp_difficulty, Domain, QuestionType};
use crate::rng::{Mulberry32, RandomSource};

const DOMAIN_SEED: u32 = 0x19f0_a8a3;

const NAMES: [&str; 15] = [
    "Alex", "Jordan", "Mia", "Liam", "Addie", "Kai", "Zara", "Noah", "Priya", "Diego", "Amara",
    "Yuki", "Ravi", "Lena", "Omar",
];
const SOCCER_OBJ: [&str; 6] = [
    "cones",
    "balls",
    "shin guards",
    "pennies",
    "water bottles",
    "jerseys",
];
const NEUTRAL_OBJ: [&str; 6] = ["stickers", "pencils", "books", "markers", "snacks", "marbles"];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Skill {
    Mult,
    Div,
    Frac,
    MultiStep,
}

const SKILLS: [Skill; 4] = [Skill::Mult, Skill::Div, Skill::Frac, Skill::MultiStep];

impl Skill {
    fn tag(self) -> &'static str {
        match self {
            Skill::Mult => "wp_mult",
            Skill::Div => "wp_div",
            Skill::Frac => "wp_frac",
            Skill::MultiStep => "wp_multi_step",
        }
    }

    fn subskills(self) -> &'static [&'static str] {
        match self {
            Skill::Mult => &["single_step"],
            Skill::Div => &["single_step"],
            Skill::Frac => &["fraction_of_set"],
            Skill::MultiStep => &["two_step"],
        }
    }
}

pub fn generate(version: &str, seed: u32, count: usize) -> Vec<BankItem> {
    let mut rng = Mulberry32::new(seed ^ DOMAIN_SEED);
    let mut items = Vec::with_capacity(count);

    for i in 0..count {
        let sk = *rng.pick(&SKILLS);
        let diff = clamp_difficulty(rng.int(1, 6) as i32);
        let name = *rng.pick(&NAMES);
        let soccer = rng.next_f64() < 0.55;
        let obj = if soccer {
            *rng.pick(&SOCCER_OBJ)
        } else {
            *rng.pick(&NEUTRAL_OBJ)
        };

        let (prompt, choices, answer, explanation) = match sk {
            Skill::Mult => {
                let a = if diff <= 2 {
                    *rng.pick(&[2, 3, 4, 5])
                } else {
                    *rng.pick(&[4, 5, 6, 7, 8])
                };
                let b = if diff <= 2 {
                    *rng.pick(&[3, 4, 5, 6])
                } else {
                    *rng.pick(&[5, 6, 7, 8, 9])
                };
                let total = a * b;
                let templates = if soccer {
                    vec![
                        format!(
                            "{} practices {} days. Each day they set up {} {}. How many total?",
                            name, a, b, obj
                        ),
                        format!(
                            "There are {} teams. Each team gets {} {}. How many {} total?",
                            a, b, obj, obj
                        ),
                        format!(
                            "{} scores {} goals in each of {} games. How many goals total?",
                            name, b, a
                        ),
                    ]
                } else {
                    vec![
                        format!("{} has {} bags with {} {} each. How many total?", name, a, b, obj),
                        format!("There are {} boxes with {} {} each. How many total?", a, b, obj),
                        format!("{} reads {} pages for {} days. How many pages total?", name, b, a),
                    ]
                };
                let prompt = rng.pick(&templates).clone();
                let choices = choices4(&mut rng, total, &[total + b, total - b, a + b]);
                let explanation = format!("{} × {} = {}.", a, b, total);
                (prompt, choices, total.to_string(), explanation)
            }
            Skill::Div => {
                let groups = if diff <= 2 {
                    *rng.pick(&[2, 3, 4])
                } else {
                    *rng.pick(&[3, 4, 5, 6])
                };
                let per = if diff <= 2 {
                    *rng.pick(&[3, 4, 5, 6])
                } else {
                    *rng.pick(&[5, 6, 7, 8])
                };
                let total = groups * per;
                let prompt = if soccer {
                    format!(
                        "{} {} are shared equally among {} players. How many does each player get?",
                        total, obj, groups
                    )
                } else {
                    format!(
                        "{} {} shared equally among {} kids. How many each?",
                        total, obj, groups
                    )
                };
                let choices = choices4(&mut rng, per, &[per + 1, per - 1, groups]);
                let explanation = format!("{} ÷ {} = {}.", total, groups, per);
                (prompt, choices, per.to_string(), explanation)
            }
            Skill::Frac => {
                if diff < 2 {
                    continue;
                }
                let den = if diff <= 3 {
                    *rng.pick(&[2, 3, 4])
                } else {
                    *rng.pick(&[4, 5, 6, 8])
                };
                let num = if diff <= 3 { 1 } else { *rng.pick(&[1, 2, 3]) };
                let total = den * *rng.pick(&[2, 3, 4, 5]);
                let ans = total / den * num;
                let prompt = if soccer {
                    format!(
                        "{}/{} of {}'s {} {} are red. How many red {}?",
                        num, den, name, total, obj, obj
                    )
                } else {
                    format!(
                        "{}/{} of {} {} are new. How many new {}?",
                        num, den, total, obj, obj
                    )
                };
                let choices = choices4(&mut rng, ans, &[ans + 1, ans - 1, total / den]);
                let explanation =
                    format!("{} ÷ {} = {}. × {} = {}.", total, den, total / den, num, ans);
                (prompt, choices, ans.to_string(), explanation)
            }
            Skill::MultiStep => {
                // multi-step — D4+
                if diff < 4 {
                    continue;
                }
                let a = *rng.pick(&[3, 4, 5, 6]);
                let b = *rng.pick(&[4, 5, 6, 7]);
                let c = *rng.pick(&[2, 3, 4, 5]);
                let use_add = rng.next_f64() < 0.6;
                let ans = if use_add { a * b + c } else { a * b - c };
                if ans <= 0 {
                    continue;
                }
                let prompt = if use_add {
                    format!(
                        "{} buys {} packs of {} {}, then gets {} more. Total {}?",
                        name, a, b, obj, c, obj
                    )
                } else {
                    format!(
                        "{} has {} bags of {} {} but gives away {}. How many left?",
                        name, a, b, obj, c
                    )
                };
                let choices = choices4(&mut rng, ans, &[a * b, ans + c, ans - c]);
                let explanation = if use_add {
                    format!("{} × {} = {}. + {} = {}.", a, b, a * b, c, ans)
                } else {
                    format!("{} × {} = {}. - {} = {}.", a, b, a * b, c, ans)
                };
                (prompt, choices, ans.to_string(), explanation)
            }
        };

        let mut subskill_tags: Vec<String> =
            sk.subskills().iter().map(|s| s.to_string()).collect();
        subskill_tags.push(if soccer { "soccer" } else { "neutral" }.to_string());

        let id = format_id(&[sk.tag(), &format!("d{}", diff), version, &pad4(i + 1)]);
        let answer = Answer::from(answer);
        let hash = compute_hash(
            Domain::WordProblems,
            sk.tag(),
            QuestionType::Word,
            &prompt,
            Some(choices.as_slice()),
            Some(&answer),
            None,
        );

        items.push(BankItem {
            id,
            version: version.to_string(),
            domain: Domain::WordProblems,
            skill_tag: sk.tag().to_string(),
            subskill_tags,
            grade_band: grade_band(diff).to_string(),
            question_type: QuestionType::Word,
            global_difficulty: diff,
            skill_difficulty: diff,
            prompt,
            choices: Some(choices),
            correct_answer: answer,
            visual: None,
            explanation,
            source: Source::default(),
            hash,
        });
    }

    items
}

//! Fractions item generator
//!
//! Visual identification from partitioned shapes, equivalence by a
//! common scaling factor, same-denominator comparison, number-line
//! position, and fraction-of-a-set (difficulty 3+ only).

use crate::bank::hash::compute_hash;
use crate::bank::item::{Answer, BankItem, Source, Visual};
use crate::bank::templates::{format_id, grade_band, pad4};
use crate::core::types::{clamp_difficulty, Domain, QuestionType};
use crate::rng::{Mulberry32, RandomSource};

const DOMAIN_SEED: u32 = 0x9b77_a1cd;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Skill {
    Identify,
    Equivalent,
    Compare,
    NumberLine,
    OfSet,
}

const SKILLS: [Skill; 5] = [
    Skill::Identify,
    Skill::Equivalent,
    Skill::Compare,
    Skill::NumberLine,
    Skill::OfSet,
];

impl Skill {
    fn tag(self) -> &'static str {
        match self {
            Skill::Identify => "frac_identify",
            Skill::Equivalent => "frac_equivalent",
            Skill::Compare => "frac_compare",
            Skill::NumberLine => "frac_numberline",
            Skill::OfSet => "frac_of_set",
        }
    }

    fn subskills(self) -> &'static [&'static str] {
        match self {
            Skill::Identify => &["fraction_bars"],
            Skill::Equivalent => &["equivalence"],
            Skill::Compare => &["compare"],
            Skill::NumberLine => &["number_line"],
            Skill::OfSet => &["fraction_of_set"],
        }
    }
}

fn frac(n: i64, d: i64) -> String {
    format!("{}/{}", n, d)
}

/// 4 fraction choices containing the correct one: denominators match
/// first, then nearby denominators pad out what repetition couldn't.
fn frac_choices<R: RandomSource>(rng: &mut R, correct: &str, parts: i64) -> Vec<String> {
    let mut set: Vec<String> = vec![correct.to_string()];
    let mut attempts = 0;
    while set.len() < 4 && attempts < 20 {
        let n = rng.int(1, parts - 1);
        let f = frac(n, parts);
        if !set.contains(&f) {
            set.push(f);
        }
        attempts += 1;
    }
    while set.len() < 4 {
        let n = rng.int(0, parts - 1).max(1);
        let d = parts + *rng.pick(&[0, 1, 2]);
        let f = frac(n, d);
        if !set.contains(&f) {
            set.push(f);
        }
    }
    rng.shuffle(&mut set);
    set
}

pub fn generate(version: &str, seed: u32, count: usize) -> Vec<BankItem> {
    let mut rng = Mulberry32::new(seed ^ DOMAIN_SEED);
    let mut items = Vec::with_capacity(count);

    for i in 0..count {
        let sk = *rng.pick(&SKILLS);
        let diff = clamp_difficulty(rng.int(1, 6) as i32);

        let (prompt, choices, answer, qtype, visual, explanation) = match sk {
            Skill::Identify => {
                let parts = if diff <= 2 {
                    *rng.pick(&[2, 3, 4])
                } else if diff <= 4 {
                    *rng.pick(&[4, 5, 6, 8])
                } else {
                    *rng.pick(&[6, 8, 10, 12])
                };
                let shaded = rng.int(1, parts - 1);
                let ans = frac(shaded, parts);
                let bars = rng.next_f64() < 0.5;
                let prompt = format!(
                    "What fraction of the {} is shaded?",
                    if bars { "bar" } else { "circle" }
                );
                let visual = if bars {
                    Visual::FractionBars {
                        parts: parts as u32,
                        shaded: shaded as u32,
                    }
                } else {
                    Visual::FractionCircle {
                        parts: parts as u32,
                        shaded: shaded as u32,
                    }
                };
                let choices = frac_choices(&mut rng, &ans, parts);
                let explanation = format!("{} equal parts, {} shaded = {}.", parts, shaded, ans);
                (
                    prompt,
                    choices,
                    Answer::from(ans),
                    QuestionType::Visual,
                    Some(visual),
                    explanation,
                )
            }
            Skill::Equivalent => {
                let base_den = if diff <= 2 {
                    *rng.pick(&[2, 3, 4])
                } else {
                    *rng.pick(&[3, 4, 5, 6])
                };
                let base_num = rng.int(1, base_den - 1);
                let mult = if diff <= 2 {
                    *rng.pick(&[2, 3])
                } else if diff <= 4 {
                    *rng.pick(&[2, 3, 4])
                } else {
                    *rng.pick(&[3, 4, 5])
                };
                let correct = frac(base_num * mult, base_den * mult);
                let prompt = format!("Which fraction is equivalent to {}?", frac(base_num, base_den));
                let mut dists: Vec<String> = Vec::new();
                let mut at = 0;
                while dists.len() < 3 && at < 20 {
                    let m2 = *rng.pick(&[2, 3, 4, 5]);
                    let n2 = (base_num * m2 + *rng.pick(&[-1, 1, 2, -2]))
                        .min(base_den * m2 - 1)
                        .max(1);
                    let f = frac(n2, base_den * m2);
                    if !dists.contains(&f) {
                        dists.push(f);
                    }
                    at += 1;
                }
                let mut opts = vec![correct.clone()];
                opts.extend(dists);
                opts.truncate(4);
                rng.shuffle(&mut opts);
                let explanation = format!(
                    "Multiply top and bottom by {}: {}×{}/{}×{} = {}.",
                    mult, base_num, mult, base_den, mult, correct
                );
                (
                    prompt,
                    opts,
                    Answer::from(correct),
                    QuestionType::McqSingle,
                    None,
                    explanation,
                )
            }
            Skill::Compare => {
                let d1 = if diff <= 2 {
                    *rng.pick(&[2, 3, 4])
                } else {
                    *rng.pick(&[4, 5, 6, 8])
                };
                let n1 = rng.int(1, d1 - 1);
                let mut n2 = rng.int(1, d1 - 1);
                if n2 == n1 {
                    n2 = (n2 - 1).max(1);
                }
                let f1 = frac(n1, d1);
                let f2 = frac(n2, d1);
                let prompt = format!("Which is greater: {} or {}?", f1, f2);
                let mut opts = vec![f1.clone(), f2.clone(), "They are equal".to_string()];
                rng.shuffle(&mut opts);
                let answer = if n1 > n2 {
                    f1
                } else if n2 > n1 {
                    f2
                } else {
                    "They are equal".to_string()
                };
                let explanation =
                    "Same denominator: bigger numerator = bigger fraction.".to_string();
                (
                    prompt,
                    opts,
                    Answer::from(answer),
                    QuestionType::McqSingle,
                    None,
                    explanation,
                )
            }
            Skill::NumberLine => {
                let den = if diff <= 2 {
                    4
                } else if diff <= 4 {
                    *rng.pick(&[4, 5, 6])
                } else {
                    *rng.pick(&[6, 8])
                };
                let num = rng.int(1, den - 1);
                let ans = frac(num, den);
                let prompt = "What fraction is marked on the number line?".to_string();
                let visual = Visual::NumberLine {
                    min: 0,
                    max: 1,
                    divisions: den as u32,
                    marked: num as u32,
                };
                let choices = frac_choices(&mut rng, &ans, den);
                let explanation = format!(
                    "The line splits into {} parts. The mark is at {} parts = {}.",
                    den, num, ans
                );
                (
                    prompt,
                    choices,
                    Answer::from(ans),
                    QuestionType::Visual,
                    Some(visual),
                    explanation,
                )
            }
            Skill::OfSet => {
                // not appropriate at D1-2
                if diff < 3 {
                    continue;
                }
                let den = *rng.pick(&[2, 3, 4, 5, 8]);
                let num = rng.int(1, (den - 1).min(3));
                let set_size = den * *rng.pick(&[2, 3, 4, 5]);
                let ans = set_size / den * num;
                let prompt = format!("What is {} of {}?", frac(num, den), set_size);
                let mut opts: Vec<i64> = [ans, ans + 1, ans - 1, set_size / den + 1]
                    .into_iter()
                    .filter(|&n| n > 0)
                    .collect();
                rng.shuffle(&mut opts);
                let mut choices: Vec<String> = opts.iter().map(|n| n.to_string()).collect();
                choices.truncate(4);
                let explanation = format!(
                    "{} ÷ {} = {}. Then × {} = {}.",
                    set_size,
                    den,
                    set_size / den,
                    num,
                    ans
                );
                (
                    prompt,
                    choices,
                    Answer::from(ans.to_string()),
                    QuestionType::McqSingle,
                    None,
                    explanation,
                )
            }
        };

        let id = format_id(&[sk.tag(), &format!("d{}", diff), version, &pad4(i + 1)]);
        let hash = compute_hash(
            Domain::Fractions,
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
            domain: Domain::Fractions,
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

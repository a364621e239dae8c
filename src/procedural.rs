//! Procedural fallback generator
//!
//! When selection over the compiled bank comes up empty, the serve
//! layer still owes the learner a question. These quick single-item
//! generators cover one representative skill per domain. Output is
//! ephemeral: no version, no hash, never persisted to a bank.

use crate::bank::item::Visual;
use crate::core::types::{Difficulty, Domain, QuestionType};
use crate::rng::RandomSource;

/// One ephemeral generated question
#[derive(Debug, Clone)]
pub struct GeneratedQuestion {
    pub id: String,
    pub domain: Domain,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
    pub question_type: QuestionType,
    pub visual: Option<Visual>,
    pub explanation: String,
}

/// Inputs for one fallback question
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub difficulty: Difficulty,
    /// Pin the domain; otherwise weak-skill steering applies
    pub domain: Option<Domain>,
    /// Question ordinal within the session, used in the id
    pub index: u32,
    /// Domains the learner is weakest at, steered toward 40% of the time
    pub weak_skills: Vec<Domain>,
}

/// Operand range per difficulty tier.
/// Tier 1-2: single digit, tier 3-4: two digit, tier 5-6: larger.
fn diff_range(difficulty: Difficulty) -> (i64, i64) {
    if difficulty <= 2 {
        (2, 9)
    } else if difficulty <= 4 {
        (3, 12)
    } else {
        (4, 15)
    }
}

const OFFSETS: [i64; 10] = [-2, -1, 1, 2, 3, -3, 5, -5, 10, -10];

/// 3 distinct positive distractors near the correct value
fn distractors<R: RandomSource>(correct: i64, rng: &mut R) -> Vec<i64> {
    let mut out: Vec<i64> = Vec::new();
    let mut attempts = 0;
    while out.len() < 3 && attempts < 50 {
        let val = correct + *rng.pick(&OFFSETS);
        if val > 0 && val != correct && !out.contains(&val) {
            out.push(val);
        }
        attempts += 1;
    }
    while out.len() < 3 {
        let val = correct + rng.int(-10, 10);
        if val > 0 && val != correct && !out.contains(&val) {
            out.push(val);
        }
    }
    out
}

fn numeric_choices<R: RandomSource>(correct: i64, rng: &mut R) -> Vec<String> {
    let mut choices = vec![correct];
    choices.extend(distractors(correct, rng));
    rng.shuffle(&mut choices);
    choices.iter().map(|n| n.to_string()).collect()
}

/// Generate one fallback question.
///
/// With no pinned domain, weak domains are picked with probability 0.4,
/// otherwise any domain uniformly.
pub fn generate_question<R: RandomSource>(opts: &GenerateOptions, rng: &mut R) -> GeneratedQuestion {
    let domain = match opts.domain {
        Some(d) => d,
        None => {
            if !opts.weak_skills.is_empty() && rng.next_f64() < 0.4 {
                *rng.pick(&opts.weak_skills)
            } else {
                *rng.pick(Domain::all())
            }
        }
    };

    match domain {
        Domain::Multiplication => gen_multiplication(opts.difficulty, rng, opts.index),
        Domain::Division => gen_division(opts.difficulty, rng, opts.index),
        Domain::Fractions => gen_fractions(opts.difficulty, rng, opts.index),
        Domain::Patterns => gen_patterns(opts.difficulty, rng, opts.index),
        Domain::WordProblems => gen_word_problem(opts.difficulty, rng, opts.index),
    }
}

fn gen_multiplication<R: RandomSource>(
    difficulty: Difficulty,
    rng: &mut R,
    idx: u32,
) -> GeneratedQuestion {
    let (min, max) = diff_range(difficulty);
    let a = rng.int(min, max);
    let b = rng.int(min, max);
    let correct = a * b;

    GeneratedQuestion {
        id: format!("mult_{}", idx),
        domain: Domain::Multiplication,
        difficulty,
        prompt: format!("What is {} × {}?", a, b),
        choices: numeric_choices(correct, rng),
        correct_answer: correct.to_string(),
        question_type: QuestionType::McqSingle,
        visual: None,
        explanation: format!(
            "{} × {} = {} because {} groups of {} makes {}.",
            a, b, correct, a, b, correct
        ),
    }
}

fn gen_division<R: RandomSource>(
    difficulty: Difficulty,
    rng: &mut R,
    idx: u32,
) -> GeneratedQuestion {
    let (min, max) = diff_range(difficulty);
    let divisor = rng.int(min, max.min(12));
    let quotient = rng.int(min, max);
    let dividend = divisor * quotient;

    GeneratedQuestion {
        id: format!("div_{}", idx),
        domain: Domain::Division,
        difficulty,
        prompt: format!("What is {} ÷ {}?", dividend, divisor),
        choices: numeric_choices(quotient, rng),
        correct_answer: quotient.to_string(),
        question_type: QuestionType::McqSingle,
        visual: None,
        explanation: format!(
            "{} ÷ {} = {} because {} × {} = {}.",
            dividend, divisor, quotient, divisor, quotient, dividend
        ),
    }
}

fn gen_fractions<R: RandomSource>(
    difficulty: Difficulty,
    rng: &mut R,
    idx: u32,
) -> GeneratedQuestion {
    let denoms: &[i64] = if difficulty <= 2 {
        &[2, 3, 4]
    } else if difficulty <= 4 {
        &[3, 4, 5, 6, 8]
    } else {
        &[4, 5, 6, 8, 10, 12]
    };
    let denominator = *rng.pick(denoms);
    let numerator = rng.int(1, denominator - 1);
    let correct = format!("{}/{}", numerator, denominator);

    let mut dists: Vec<String> = Vec::new();
    let mut attempts = 0;
    while dists.len() < 3 && attempts < 30 {
        let n = rng.int(1, denominator - 1);
        let d = *rng.pick(denoms);
        let f = format!("{}/{}", n, d);
        if f != correct && !dists.contains(&f) {
            dists.push(f);
        }
        attempts += 1;
    }
    while dists.len() < 3 {
        let f = format!("{}/{}", rng.int(1, 5), rng.int(2, 8));
        if f != correct && !dists.contains(&f) {
            dists.push(f);
        }
    }

    let mut choices = vec![correct.clone()];
    choices.extend(dists);
    rng.shuffle(&mut choices);

    GeneratedQuestion {
        id: format!("frac_{}", idx),
        domain: Domain::Fractions,
        difficulty,
        prompt: "What fraction is shaded?".to_string(),
        choices,
        correct_answer: correct.clone(),
        question_type: QuestionType::Visual,
        visual: Some(Visual::FractionBars {
            parts: denominator as u32,
            shaded: numerator as u32,
        }),
        explanation: format!(
            "{} out of {} parts are shaded, so the answer is {}.",
            numerator, denominator, correct
        ),
    }
}

fn gen_patterns<R: RandomSource>(
    difficulty: Difficulty,
    rng: &mut R,
    idx: u32,
) -> GeneratedQuestion {
    let start = rng.int(1, if difficulty <= 2 { 5 } else { 10 });
    let step = rng.int(
        if difficulty <= 2 { 2 } else { 3 },
        if difficulty <= 4 { 5 } else { 10 },
    );
    let len = if difficulty <= 2 { 4 } else { 5 };
    let sequence: Vec<i64> = (0..len).map(|i| start + step * i).collect();
    let correct = start + step * len;
    let shown: Vec<String> = sequence.iter().map(|n| n.to_string()).collect();

    GeneratedQuestion {
        id: format!("pat_{}", idx),
        domain: Domain::Patterns,
        difficulty,
        prompt: format!("What comes next? {}, ?", shown.join(", ")),
        choices: numeric_choices(correct, rng),
        correct_answer: correct.to_string(),
        question_type: QuestionType::McqSingle,
        visual: None,
        explanation: format!(
            "The pattern adds {} each time. {} + {} = {}.",
            step,
            sequence[sequence.len() - 1],
            step,
            correct
        ),
    }
}

fn gen_word_problem<R: RandomSource>(
    difficulty: Difficulty,
    rng: &mut R,
    idx: u32,
) -> GeneratedQuestion {
    let (min, max) = diff_range(difficulty);
    let a = rng.int(min, max);
    let b = rng.int(min, max.min(10));

    let variants: [(String, i64, String); 4] = [
        (
            format!(
                "{} soccer teams each have {} players. How many players are there in total?",
                a, b
            ),
            a * b,
            format!("{} teams × {} players = {} players total.", a, b, a * b),
        ),
        (
            format!(
                "You scored {} goals in {} games. How many goals per game on average?",
                a * b,
                a
            ),
            b,
            format!("{} goals ÷ {} games = {} goals per game.", a * b, a, b),
        ),
        (
            format!("A stadium has {} rows with {} seats each. How many seats are there?", a, b),
            a * b,
            format!("{} rows × {} seats = {} seats total.", a, b, a * b),
        ),
        (
            format!(
                "{} fans need to split into {} equal groups. How many in each group?",
                a * b,
                b
            ),
            a,
            format!("{} fans ÷ {} groups = {} fans per group.", a * b, b, a),
        ),
    ];
    let (prompt, correct, explanation) = rng.pick(&variants).clone();

    GeneratedQuestion {
        id: format!("word_{}", idx),
        domain: Domain::WordProblems,
        difficulty,
        prompt,
        choices: numeric_choices(correct, rng),
        correct_answer: correct.to_string(),
        question_type: QuestionType::Word,
        visual: None,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    fn opts(domain: Option<Domain>, difficulty: Difficulty) -> GenerateOptions {
        GenerateOptions {
            difficulty,
            domain,
            index: 7,
            weak_skills: Vec::new(),
        }
    }

    #[test]
    fn test_deterministic_with_seeded_source() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(42);
        let qa = generate_question(&opts(None, 3), &mut a);
        let qb = generate_question(&opts(None, 3), &mut b);
        assert_eq!(qa.prompt, qb.prompt);
        assert_eq!(qa.choices, qb.choices);
        assert_eq!(qa.correct_answer, qb.correct_answer);
    }

    #[test]
    fn test_answer_always_in_choices() {
        let mut rng = Mulberry32::new(11);
        for difficulty in 1..=6u8 {
            for domain in Domain::all() {
                let q = generate_question(&opts(Some(*domain), difficulty), &mut rng);
                assert!(
                    q.choices.contains(&q.correct_answer),
                    "{:?} d{}: {} not in {:?}",
                    domain,
                    difficulty,
                    q.correct_answer,
                    q.choices
                );
                assert_eq!(q.choices.len(), 4);
            }
        }
    }

    #[test]
    fn test_pinned_domain_respected() {
        let mut rng = Mulberry32::new(5);
        let q = generate_question(&opts(Some(Domain::Fractions), 2), &mut rng);
        assert_eq!(q.domain, Domain::Fractions);
        assert!(matches!(q.visual, Some(Visual::FractionBars { .. })));
    }

    #[test]
    fn test_division_is_exact() {
        let mut rng = Mulberry32::new(9);
        for _ in 0..50 {
            let q = generate_question(&opts(Some(Domain::Division), 4), &mut rng);
            let rest = q.prompt.trim_start_matches("What is ").trim_end_matches('?');
            let mut parts = rest.split(" ÷ ");
            let dividend: i64 = parts.next().unwrap().parse().unwrap();
            let divisor: i64 = parts.next().unwrap().parse().unwrap();
            assert_eq!((dividend / divisor).to_string(), q.correct_answer);
        }
    }

    #[test]
    fn test_weak_skill_steering_biases_domains() {
        let mut rng = Mulberry32::new(77);
        let weak = GenerateOptions {
            difficulty: 3,
            domain: None,
            index: 0,
            weak_skills: vec![Domain::Fractions],
        };
        let mut fraction_count = 0;
        let n = 2000;
        for _ in 0..n {
            if generate_question(&weak, &mut rng).domain == Domain::Fractions {
                fraction_count += 1;
            }
        }
        // 40% steered + 1/5 of the remaining 60% ≈ 52%; far above the
        // unbiased 20%.
        assert!(fraction_count > n * 2 / 5, "{}/{}", fraction_count, n);
    }
}

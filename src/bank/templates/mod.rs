//! Deterministic template generators, one module per domain
//!
//! Every generator draws from a mulberry32 stream seeded by
//! `master_seed ^ domain_constant`, so domains are decorrelated but a
//! (version, seed) pair always reproduces the same bank. The order of
//! draws inside an iteration is part of that contract: reordering a
//! pick, or drawing where the original skipped, shifts every later
//! item in the domain.
//!
//! Some (skill variant, difficulty) combinations are infeasible (for
//! example remainder division below difficulty 4). Those iterations
//! are dropped without retry, so a generator may return fewer items
//! than requested.

pub mod division;
pub mod fractions;
pub mod multiplication;
pub mod patterns;
pub mod word_problems;

use crate::core::types::Difficulty;
use crate::rng::RandomSource;

/// Human-facing grade descriptor for a difficulty tier
pub fn grade_band(d: Difficulty) -> &'static str {
    if d <= 1 {
        "2"
    } else if d <= 2 {
        "2-3"
    } else if d <= 4 {
        "3"
    } else {
        "3-4"
    }
}

/// Build a stable item id from parts: lowercased, non-alphanumerics
/// collapsed to single underscores, outer underscores trimmed.
pub fn format_id(parts: &[&str]) -> String {
    let mut joined = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            joined.push('_');
        }
        for c in part.chars() {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                joined.push(c);
            } else {
                joined.push('_');
            }
        }
    }
    let mut out = String::with_capacity(joined.len());
    let mut prev_underscore = false;
    for c in joined.chars() {
        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }
    out.trim_matches('_').to_string()
}

/// Zero-padded 4-digit ordinal used in item ids
pub fn pad4(n: usize) -> String {
    format!("{:04}", n)
}

/// Produce 3 plausible distractors for an integer answer.
///
/// Seeds the pool with the supplied nearby values (positive, distinct
/// from the answer), then extends it with random offsets until six
/// candidates exist, filters to valid ones, shuffles, and keeps three.
/// Two draws per extension round regardless of duplicates.
pub fn distractors<R: RandomSource>(rng: &mut R, correct: i64, nearby: &[i64]) -> Vec<i64> {
    let mut pool: Vec<i64> = Vec::new();
    for &n in nearby {
        if n > 0 && n != correct && !pool.contains(&n) {
            pool.push(n);
        }
    }
    while pool.len() < 6 {
        let offset = *rng.pick(&[-3, -2, -1, 1, 2, 3, 5, 10]);
        let scale = *rng.pick(&[1, 2]);
        let v = correct + offset * scale;
        if !pool.contains(&v) {
            pool.push(v);
        }
    }
    let mut valid: Vec<i64> = pool.into_iter().filter(|&n| n > 0 && n != correct).collect();
    rng.shuffle(&mut valid);
    valid.truncate(3);
    valid
}

/// Build a 4-choice MCQ array: correct + 3 distractors, shuffled
pub fn choices4<R: RandomSource>(rng: &mut R, correct: i64, nearby: &[i64]) -> Vec<String> {
    let mut all = vec![correct];
    all.extend(distractors(rng, correct, nearby));
    rng.shuffle(&mut all);
    all.iter().map(|n| n.to_string()).collect()
}

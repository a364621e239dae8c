//! Bank compilation: generators → ndjson streams + manifest
//!
//! Runs the five domain generators at their configured target counts,
//! serializes each domain to a line-delimited JSON file, and records
//! dedup statistics across the whole combined corpus. Duplicate hashes
//! are counted, never removed; enforcing uniqueness is the persistence
//! layer's job.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::bank::item::BankItem;
use crate::bank::templates;
use crate::core::config::BankConfig;
use crate::core::error::Result;
use crate::core::types::Domain;

/// Summary of one compilation run, persisted as `index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: String,
    pub seed: u32,
    /// Unix seconds; injectable through [`BankConfig::generated_at`]
    pub generated_at: u64,
    pub totals: ManifestTotals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestTotals {
    pub multiplication: usize,
    pub division: usize,
    pub fractions: usize,
    pub patterns: usize,
    pub word_problems: usize,
    /// Combined item count across all domains
    pub all: usize,
    /// Distinct content hashes in the combined corpus
    pub unique_by_hash: usize,
    /// Items whose hash was already seen, including across domains
    pub duplicates: usize,
}

/// File name of the per-version manifest
pub const MANIFEST_FILE: &str = "index.json";

/// Compile a full bank into `out_dir`.
///
/// Identical (version, seed) pairs produce byte-identical domain files;
/// pin `generated_at` to make the manifest byte-identical too.
pub fn compile(config: &BankConfig, out_dir: &Path) -> Result<Manifest> {
    fs::create_dir_all(out_dir)?;

    let version = &config.version;
    let seed = config.seed;

    let multiplication = templates::multiplication::generate(version, seed, config.multiplication_count);
    let division = templates::division::generate(version, seed, config.division_count);
    let fractions = templates::fractions::generate(version, seed, config.fractions_count);
    let patterns = templates::patterns::generate(version, seed, config.patterns_count);
    let word_problems = templates::word_problems::generate(version, seed, config.word_problems_count);

    write_ndjson(&out_dir.join(domain_file(Domain::Multiplication)), &multiplication)?;
    write_ndjson(&out_dir.join(domain_file(Domain::Division)), &division)?;
    write_ndjson(&out_dir.join(domain_file(Domain::Fractions)), &fractions)?;
    write_ndjson(&out_dir.join(domain_file(Domain::Patterns)), &patterns)?;
    write_ndjson(&out_dir.join(domain_file(Domain::WordProblems)), &word_problems)?;

    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut duplicates = 0;
    let all = multiplication
        .iter()
        .chain(&division)
        .chain(&fractions)
        .chain(&patterns)
        .chain(&word_problems);
    let mut all_count = 0;
    for item in all {
        all_count += 1;
        if !seen.insert(item.hash.as_str()) {
            duplicates += 1;
        }
    }

    let manifest = Manifest {
        version: version.clone(),
        seed,
        generated_at: config.generated_at.unwrap_or_else(now_unix_secs),
        totals: ManifestTotals {
            multiplication: multiplication.len(),
            division: division.len(),
            fractions: fractions.len(),
            patterns: patterns.len(),
            word_problems: word_problems.len(),
            all: all_count,
            unique_by_hash: seen.len(),
            duplicates,
        },
    };

    fs::write(
        out_dir.join(MANIFEST_FILE),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    tracing::info!(
        version = %manifest.version,
        seed = manifest.seed,
        all = manifest.totals.all,
        unique = manifest.totals.unique_by_hash,
        duplicates = manifest.totals.duplicates,
        "bank compiled"
    );

    Ok(manifest)
}

/// File name for one domain's record stream
pub fn domain_file(domain: Domain) -> String {
    format!("{}.ndjson", domain.name())
}

fn write_ndjson(path: &Path, rows: &[BankItem]) -> Result<()> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serde_json::to_string(row)?);
        out.push('\n');
    }
    fs::write(path, out)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "wrote record stream");
    Ok(())
}

fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

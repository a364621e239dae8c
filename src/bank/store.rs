//! Reading compiled banks back from disk
//!
//! The serve-time storage layer owns querying; this module gives tests
//! and the CLI a direct way to load record streams and summarize them.

use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::bank::compiler::{domain_file, Manifest, MANIFEST_FILE};
use crate::bank::item::BankItem;
use crate::core::error::{Result, StrikerError};
use crate::core::types::{Difficulty, Domain};

/// Read one domain's ndjson record stream
pub fn read_domain_file(path: &Path) -> Result<Vec<BankItem>> {
    let content = fs::read_to_string(path)?;
    let mut items = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let item: BankItem =
            serde_json::from_str(line).map_err(|e| StrikerError::MalformedRecord {
                file: path.display().to_string(),
                line: idx + 1,
                message: e.to_string(),
            })?;
        items.push(item);
    }
    Ok(items)
}

/// Load every domain file present in a compiled bank directory
pub fn load_bank(dir: &Path) -> Result<Vec<BankItem>> {
    let mut items = Vec::new();
    for domain in Domain::all() {
        let path = dir.join(domain_file(*domain));
        if path.exists() {
            items.extend(read_domain_file(&path)?);
        }
    }
    Ok(items)
}

/// Read a bank's manifest
pub fn read_manifest(dir: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(dir.join(MANIFEST_FILE))?;
    Ok(serde_json::from_str(&content)?)
}

/// Aggregate counts over a loaded bank
#[derive(Debug, Clone, Default)]
pub struct BankStats {
    pub total: usize,
    pub by_domain: AHashMap<Domain, usize>,
    pub by_difficulty: AHashMap<Difficulty, usize>,
}

pub fn bank_stats(items: &[BankItem]) -> BankStats {
    let mut stats = BankStats {
        total: items.len(),
        ..BankStats::default()
    };
    for item in items {
        *stats.by_domain.entry(item.domain).or_insert(0) += 1;
        *stats.by_difficulty.entry(item.global_difficulty).or_insert(0) += 1;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::compiler::compile;
    use crate::core::config::BankConfig;

    fn compiled_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let config = BankConfig {
            multiplication_count: 30,
            division_count: 20,
            fractions_count: 30,
            patterns_count: 10,
            word_problems_count: 20,
            generated_at: Some(0),
            ..BankConfig::default()
        };
        compile(&config, dir.path()).unwrap();
        dir
    }

    #[test]
    fn test_roundtrip_counts_match_manifest() {
        let dir = compiled_dir();
        let items = load_bank(dir.path()).unwrap();
        let manifest = read_manifest(dir.path()).unwrap();
        assert_eq!(items.len(), manifest.totals.all);
    }

    #[test]
    fn test_stats_sum() {
        let dir = compiled_dir();
        let items = load_bank(dir.path()).unwrap();
        let stats = bank_stats(&items);
        assert_eq!(stats.total, items.len());
        assert_eq!(stats.by_domain.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_difficulty.values().sum::<usize>(), stats.total);
        for d in stats.by_difficulty.keys() {
            assert!((1..=6).contains(d));
        }
    }

    #[test]
    fn test_malformed_record_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("multiplication.ndjson");
        fs::write(&path, "not json\n").unwrap();
        let err = read_domain_file(&path).unwrap_err();
        match err {
            StrikerError::MalformedRecord { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

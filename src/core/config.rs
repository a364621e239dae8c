//! Engine configuration with documented constants
//!
//! All tunable numbers are collected here with explanations of their
//! purpose. Target counts and thresholds are configuration, not
//! invariants; the determinism contract only covers (version, seed).

use std::fs;
use std::path::Path;

use crate::core::error::{Result, StrikerError};

/// Configuration for a bank compilation run
#[derive(Debug, Clone)]
pub struct BankConfig {
    /// Content-bank version tag, stamped into every item and the manifest
    pub version: String,

    /// Master seed. Each domain generator decorrelates itself by XORing
    /// this with a fixed per-domain constant.
    pub seed: u32,

    /// Target iteration count per domain. Generators may emit fewer
    /// items than requested: infeasible (variant, difficulty)
    /// combinations are skipped, not retried.
    pub multiplication_count: usize,
    pub division_count: usize,
    pub fractions_count: usize,
    pub patterns_count: usize,
    pub word_problems_count: usize,

    /// Manifest timestamp override (unix seconds). When None the
    /// compiler stamps the current system time. Pin this to make two
    /// runs of the same (version, seed) byte-identical.
    pub generated_at: Option<u64>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            seed: 1337,
            multiplication_count: 1200,
            division_count: 900,
            fractions_count: 1400,
            patterns_count: 700,
            word_problems_count: 900,
            generated_at: None,
        }
    }
}

impl BankConfig {
    /// Load target-count overrides from a TOML file.
    ///
    /// Recognized layout:
    ///
    /// ```toml
    /// version = "v2"
    /// seed = 99
    ///
    /// [counts]
    /// multiplication = 600
    /// division = 450
    /// ```
    ///
    /// Missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let toml: toml::Value = content
            .parse()
            .map_err(|e| StrikerError::ConfigError(format!("invalid TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(version) = toml.get("version").and_then(|v| v.as_str()) {
            config.version = version.to_string();
        }
        if let Some(seed) = toml.get("seed").and_then(|v| v.as_integer()) {
            config.seed = seed as u32;
        }
        if let Some(generated_at) = toml.get("generated_at").and_then(|v| v.as_integer()) {
            config.generated_at = Some(generated_at as u64);
        }

        if let Some(counts) = toml.get("counts").and_then(|v| v.as_table()) {
            let mut read = |key: &str, slot: &mut usize| {
                if let Some(n) = counts.get(key).and_then(|v| v.as_integer()) {
                    *slot = n.max(0) as usize;
                }
            };
            read("multiplication", &mut config.multiplication_count);
            read("division", &mut config.division_count);
            read("fractions", &mut config.fractions_count);
            read("patterns", &mut config.patterns_count);
            read("word_problems", &mut config.word_problems_count);
        }

        Ok(config)
    }
}

/// Configuration for serve-time item selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Maximum candidate pool size per relaxation stage.
    ///
    /// Bounds the work of a selection call; the weighted draw only ever
    /// sees this many candidates.
    pub pool_cap: usize,

    /// Probability of steering toward a weak skill when the caller did
    /// not pin one explicitly.
    pub weak_skill_bias: f64,

    /// Roulette weight for candidates whose difficulty exactly equals
    /// the target. Off-band-by-one candidates get weight 1.
    pub exact_difficulty_weight: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            pool_cap: 50,
            weak_skill_bias: 0.4,
            exact_difficulty_weight: 3,
        }
    }
}

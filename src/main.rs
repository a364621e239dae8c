//! Math Striker - CLI Entry Point
//!
//! Batch front end for the content engine: compile a question bank to
//! a directory, or summarize one that was compiled earlier.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use math_striker::bank::compiler::compile;
use math_striker::bank::store::{bank_stats, load_bank, read_manifest};
use math_striker::core::config::BankConfig;
use math_striker::core::error::Result;
use math_striker::core::types::Domain;

#[derive(Parser)]
#[command(name = "math-striker", about = "Adaptive math content engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a question bank into a directory
    Compile {
        /// Content-bank version tag
        #[arg(long, default_value = "v1")]
        version: String,
        /// Master generation seed
        #[arg(long, default_value_t = 1337)]
        seed: u32,
        /// Output directory for ndjson files and the manifest
        #[arg(long)]
        out: PathBuf,
        /// Optional TOML file with target-count overrides; its version
        /// and seed take precedence over the flags above
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Summarize a compiled bank directory
    Stats {
        /// Directory holding a compiled bank
        #[arg(long)]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "math_striker=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            version,
            seed,
            out,
            config,
        } => {
            let bank_config = match config {
                Some(path) => BankConfig::from_toml_file(&path)?,
                None => BankConfig {
                    version,
                    seed,
                    ..BankConfig::default()
                },
            };

            let manifest = compile(&bank_config, &out)?;

            println!(
                "Compiled bank {} (seed {}) into {}",
                manifest.version,
                manifest.seed,
                out.display()
            );
            println!(
                "  items: {}  unique: {}  duplicates: {}",
                manifest.totals.all, manifest.totals.unique_by_hash, manifest.totals.duplicates
            );
        }
        Command::Stats { dir } => {
            let manifest = read_manifest(&dir)?;
            let items = load_bank(&dir)?;
            let stats = bank_stats(&items);

            println!("Bank {} (seed {})", manifest.version, manifest.seed);
            println!("  total items: {}", stats.total);
            for domain in Domain::all() {
                let count = stats.by_domain.get(domain).copied().unwrap_or(0);
                println!("  {:<16} {}", domain.name(), count);
            }
            for difficulty in 1..=6u8 {
                let count = stats.by_difficulty.get(&difficulty).copied().unwrap_or(0);
                println!("  difficulty {}     {}", difficulty, count);
            }
        }
    }

    Ok(())
}

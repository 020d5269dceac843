// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `fireworks` command-line shell around [`firework_gen`].
//!
//! Everything user-facing is written to the `out` handle passed to [`run`];
//! diagnostics go through `tracing`.

pub mod sink;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use firework_gen::{FireworkGenerator, GeneratorConfig};
use tracing::{debug, info};

pub use sink::write_batch;

/// Batch size and file used when no subcommand is given.
pub const DEFAULT_BATCH: usize = 10;
/// Default batch output file, relative to the working directory.
pub const DEFAULT_OUT: &str = "fireworks.txt";

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "fireworks")]
#[command(version, about = "Generate randomized /summon firework_rocket commands")]
pub struct Cli {
    /// Seed for reproducible output (random when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Generator config JSON file (built-in defaults when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// What to do; omitted = print one command and save a batch of 10
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one command
    One {
        /// Never carry more than one explosion
        #[arg(long)]
        single: bool,
    },
    /// Write a batch of commands to a file, one per line
    Batch {
        /// Number of commands
        #[arg(short = 'n', long, default_value_t = DEFAULT_BATCH)]
        count: usize,
        /// Output file
        #[arg(short, long, default_value = DEFAULT_OUT)]
        out: PathBuf,
        /// Also print every command
        #[arg(long)]
        print: bool,
    },
}

/// Parse process arguments and run.
pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

/// Execute `cli`, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let mut generator = build_generator(cli.config.as_deref(), cli.seed)?;
    match cli.command {
        Some(Commands::One { single }) => {
            writeln!(out, "{}", generator.build_command(!single))?;
        }
        Some(Commands::Batch {
            count,
            out: path,
            print,
        }) => {
            let batch = generator.build_batch(count);
            if print {
                for line in &batch {
                    writeln!(out, "{line}")?;
                }
            }
            save_batch(&path, &batch, out)?;
        }
        None => {
            writeln!(out, "Generated command:")?;
            writeln!(out, "{}", generator.build_command(true))?;
            writeln!(out)?;
            let batch = generator.build_batch(DEFAULT_BATCH);
            save_batch(Path::new(DEFAULT_OUT), &batch, out)?;
        }
    }
    Ok(())
}

fn save_batch(path: &Path, batch: &[String], out: &mut impl Write) -> Result<()> {
    let abs = write_batch(path, batch)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(count = batch.len(), path = %abs.display(), "saved batch");
    writeln!(out, "Saved {} commands to {}", batch.len(), abs.display())?;
    Ok(())
}

/// Explicit JSON file when given, built-in defaults otherwise.
fn load_config(file: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = file else {
        return Ok(GeneratorConfig::default());
    };
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config in {}", path.display()))?;
    debug!(path = %path.display(), "loaded generator config");
    Ok(config)
}

fn build_generator(file: Option<&Path>, seed: Option<u64>) -> Result<FireworkGenerator> {
    let config = load_config(file)?;
    let generator = match seed {
        Some(seed) => FireworkGenerator::seeded(config, seed),
        None => FireworkGenerator::from_entropy(config),
    };
    generator.context("invalid generator config")
}

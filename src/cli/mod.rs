// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. All work is delegated
// to Layer 2 (application); this layer only parses and prints.
//
// Two commands are supported:
//   1. `stats`  — corpus, vocabulary and epoch summary
//   2. `epochs` — drive full epochs of batches, log metrics
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EpochsArgs, StatsArgs};

use crate::application::IterConfig;

#[derive(Parser, Debug)]
#[command(
    name = "word-window",
    version,
    about = "Shuffled next-word window batches, one-hot encoded for sequence models."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Stats(args)  => run_stats(args),
            Commands::Epochs(args) => run_epochs(args),
        }
    }
}

fn run_stats(args: StatsArgs) -> Result<()> {
    use crate::application::stats_use_case::StatsUseCase;

    let stats = StatsUseCase::new(args.corpus.into(), args.samples).execute()?;

    println!("Tokens:            {}", stats.tokens);
    println!("Vocabulary size:   {}", stats.vocabulary_size);
    println!("Example length:    {}", stats.example_length);
    println!("Windows per epoch: {}", stats.windows_per_epoch);
    println!("Batches per epoch: {}", stats.batches_per_epoch);
    if !stats.samples.is_empty() {
        println!("Random tokens:     {}", stats.samples.join(" "));
    }
    Ok(())
}

fn run_epochs(args: EpochsArgs) -> Result<()> {
    use crate::application::epoch_use_case::EpochUseCase;
    use crate::infra::run_store::load_config;

    let config: IterConfig = match args.config.clone() {
        Some(path) => {
            tracing::info!("Replaying run config from '{}'", path);
            load_config(&path)?
        }
        None => args.into(),
    };

    let metrics = EpochUseCase::new(config).execute()?;

    for m in &metrics {
        println!(
            "Epoch {:>3} | batches={} | windows={} | feature_marks={} | label_marks={}",
            m.epoch, m.batches, m.windows, m.feature_marks, m.label_marks,
        );
    }
    Ok(())
}

// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `stats` and `epochs`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::IterConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarise the corpus, its vocabulary and one epoch of windows
    Stats(StatsArgs),

    /// Draw full epochs of one-hot batches and log per-epoch metrics
    Epochs(EpochsArgs),
}

/// Flags shared by every command that builds an iterator
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Plain text corpus to read
    #[arg(long, default_value = "data/corpus.txt")]
    pub corpus: String,

    /// Text encoding of the corpus (utf-8 or latin-1)
    #[arg(long, default_value = "utf-8")]
    pub encoding: String,

    /// Default number of windows per batch
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Number of tokens in each window; every window yields
    /// example_length - 1 (input, target) pairs
    #[arg(long, default_value_t = 50)]
    pub example_length: usize,

    /// Seed for the shuffle and sampling generator
    #[arg(long, default_value_t = 12345)]
    pub seed: u64,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// How many random tokens to sample from the corpus
    #[arg(long, default_value_t = 5)]
    pub samples: usize,
}

#[derive(Args, Debug)]
pub struct EpochsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Number of full passes over the corpus
    #[arg(long, default_value_t = 1)]
    pub epochs: usize,

    /// Directory for run_config.json and metrics.csv
    #[arg(long, default_value = "runs")]
    pub out_dir: String,

    /// Replay a saved run_config.json instead of the flags above
    #[arg(long)]
    pub config: Option<String>,
}

/// Convert CLI corpus flags into the application-layer IterConfig.
/// The application layer never sees clap types.
impl From<CorpusArgs> for IterConfig {
    fn from(a: CorpusArgs) -> Self {
        IterConfig {
            corpus:         a.corpus,
            encoding:       a.encoding,
            batch_size:     a.batch_size,
            example_length: a.example_length,
            seed:           a.seed,
            ..IterConfig::default()
        }
    }
}

impl From<EpochsArgs> for IterConfig {
    fn from(a: EpochsArgs) -> Self {
        IterConfig {
            epochs:  a.epochs,
            out_dir: a.out_dir,
            ..a.corpus.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_epochs_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "word-window", "epochs",
            "--corpus", "book.txt",
            "--example-length", "20",
            "--epochs", "3",
            "--seed", "9",
        ])
        .unwrap();

        let Commands::Epochs(args) = cli.command else {
            panic!("expected epochs command");
        };
        let cfg: IterConfig = args.into();
        assert_eq!(cfg.corpus, "book.txt");
        assert_eq!(cfg.example_length, 20);
        assert_eq!(cfg.epochs, 3);
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.batch_size, 32);
    }
}

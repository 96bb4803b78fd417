// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Two kinds of failure matter to a caller:
//   - configuration errors, raised at construction and fatal
//     to the instance
//   - exhaustion, raised by next_batch and cleared by reset()
//
// Corpus loading adds I/O and decoding failures on top.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordIterError {
    #[error("invalid batch size {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("example_length={example_length} must be at least 1 and less than the number of tokens in the corpus ({tokens})")]
    InvalidExampleLength { example_length: usize, tokens: usize },

    #[error("corpus of {tokens} tokens yields no windows of length {example_length}")]
    NoWindows { example_length: usize, tokens: usize },

    #[error("no more windows available this epoch; call reset() to start a new one")]
    Exhausted,

    #[error("unsupported text encoding '{0}'")]
    UnsupportedEncoding(String),

    #[error("could not access corpus file '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus file '{}' is not valid {encoding}", .path.display())]
    Decode { path: PathBuf, encoding: &'static str },
}

impl WordIterError {
    /// True for errors a caller can recover from on the same instance
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WordIterError::Exhausted)
    }
}

pub type Result<T> = std::result::Result<T, WordIterError>;

// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The iterator only needs an ordered list of corpus lines.
// Where they come from (a file on disk, an in-memory string,
// a test fixture) is hidden behind CorpusSource.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::Result;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the corpus as ordered lines.
///
/// Implementations:
///   - TextFileLoader → reads a plain text file in a given encoding
///   - InMemoryCorpus → wraps lines already in memory
pub trait CorpusSource {
    /// Load the corpus as lines in reading order.
    fn load_lines(&self) -> Result<Vec<String>>;
}

// ─── InMemoryCorpus ───────────────────────────────────────────────────────────
/// A corpus that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    lines: Vec<String>,
}

impl InMemoryCorpus {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }

    /// Split a block of text into lines
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }
}

impl CorpusSource for InMemoryCorpus {
    fn load_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_keeps_blank_lines() {
        let c = InMemoryCorpus::from_text("a b\n\nc");
        assert_eq!(c.load_lines().unwrap(), vec!["a b", "", "c"]);
    }
}

// ============================================================
// Layer 4 — Tokeniser and Vocabulary
// ============================================================
// Flattens corpus lines into whitespace-delimited tokens and
// assigns every distinct token a dense index in the order it
// is first seen:
//
//   tokens: [the, cat, sat, on, the, mat]
//   vocab:  the→0  cat→1  sat→2  on→3  mat→4
//
// Indices are assigned by first occurrence, not by frequency,
// so the same corpus always yields the same vocabulary.
//
// Reference: Rust Book §8 (Hash Maps)

use std::collections::HashMap;

/// Ordered bijection between tokens and indices in [0, len).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// index → token
    tokens: Vec<String>,
    /// token → index
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary in one left-to-right pass.
    pub fn build<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            vocab.insert(token);
        }
        vocab
    }

    /// Insert a token if unseen and return its index
    pub fn insert(&mut self, token: &str) -> usize {
        if let Some(&idx) = self.index.get(token) {
            return idx;
        }
        let idx = self.tokens.len();
        self.tokens.push(token.to_string());
        self.index.insert(token.to_string(), idx);
        idx
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn token_at(&self, idx: usize) -> Option<&str> {
        self.tokens.get(idx).map(String::as_str)
    }

    /// All tokens in index order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

// ─── Corpus ───────────────────────────────────────────────────────────────────
/// The flattened token sequence together with its vocabulary.
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Corpus {
    tokens: Vec<String>,
    /// Vocabulary index of every token, position for position
    ids: Vec<usize>,
    vocab: Vocabulary,
    /// Empty fragments produced by repeated whitespace
    dropped: usize,
}

impl Corpus {
    /// Tokenise corpus lines and build the vocabulary.
    ///
    /// Empty lines contribute nothing. Non-empty lines are split
    /// on runs of whitespace; empty fragments are counted as
    /// dropped so the summary matches a naive single-space split.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut tokens  = Vec::new();
        let mut ids     = Vec::new();
        let mut vocab   = Vocabulary::default();
        let mut raw     = 0usize;

        for line in lines.iter().map(AsRef::as_ref) {
            if line.is_empty() {
                continue;
            }
            raw += line.split(char::is_whitespace).count();

            for token in line.split_whitespace() {
                ids.push(vocab.insert(token));
                tokens.push(token.to_string());
            }
        }

        let dropped = raw - tokens.len();
        tracing::info!(
            "Loaded and converted corpus: {} tokens kept of {} total ({} dropped), {} distinct",
            tokens.len(),
            raw,
            dropped,
            vocab.len()
        );

        Self { tokens, ids, vocab, dropped }
    }

    /// Number of tokens, L
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Split into the pieces the iterator keeps separately
    pub fn into_parts(self) -> (Vec<String>, Vec<usize>, Vocabulary) {
        (self.tokens, self.ids, self.vocab)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        let v = Vocabulary::build(["the", "cat", "sat", "on", "the", "mat"]);
        assert_eq!(v.len(), 5);
        assert_eq!(v.index_of("the"), Some(0));
        assert_eq!(v.index_of("cat"), Some(1));
        assert_eq!(v.index_of("mat"), Some(4));
        assert_eq!(v.index_of("dog"), None);
    }

    #[test]
    fn test_index_token_round_trip() {
        let v = Vocabulary::build(["b", "a", "b", "c", "a"]);
        for i in 0..v.len() {
            assert_eq!(v.index_of(v.token_at(i).unwrap()), Some(i));
        }
        assert_eq!(v.token_at(v.len()), None);
    }

    #[test]
    fn test_blank_lines_contribute_nothing() {
        let c = Corpus::from_lines(&["a b", "", "c"]);
        assert_eq!(c.tokens(), &["a", "b", "c"]);
        assert_eq!(c.dropped(), 0);
    }

    #[test]
    fn test_repeated_whitespace_counts_as_dropped() {
        let c = Corpus::from_lines(&["a  b", "\tc"]);
        assert_eq!(c.tokens(), &["a", "b", "c"]);
        // "a  b" → ["a", "", "b"], "\tc" → ["", "c"]
        assert_eq!(c.dropped(), 2);
    }

    #[test]
    fn test_ids_follow_tokens() {
        let c = Corpus::from_lines(&["x y x", "z y"]);
        assert_eq!(c.ids(), &[0, 1, 0, 2, 1]);
        for (token, &id) in c.tokens().iter().zip(c.ids()) {
            assert_eq!(c.vocab().token_at(id), Some(token.as_str()));
        }
    }
}

// ============================================================
// Layer 2 — Iterator Configuration
// ============================================================
// Everything needed to rebuild the same iterator twice.
// Serialisable so a run can be saved to disk and replayed.

use anyhow::{Context, Result};
use burn::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    iterator::WordIterator,
    loader::{TextEncoding, TextFileLoader},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterConfig {
    pub corpus:         String,
    pub encoding:       String,
    pub batch_size:     usize,
    pub example_length: usize,
    pub seed:           u64,
    pub epochs:         usize,
    pub out_dir:        String,
}

impl Default for IterConfig {
    fn default() -> Self {
        Self {
            corpus:         "data/corpus.txt".to_string(),
            encoding:       "utf-8".to_string(),
            batch_size:     32,
            example_length: 50,
            seed:           12345,
            epochs:         1,
            out_dir:        "runs".to_string(),
        }
    }
}

impl IterConfig {
    /// Load the corpus and build a seeded iterator on `device`.
    pub fn build_iterator<B: Backend>(&self, device: B::Device) -> Result<WordIterator<B, StdRng>> {
        let encoding: TextEncoding = self.encoding.parse()?;
        let loader = TextFileLoader::new(&self.corpus, encoding);

        tracing::info!("Loading corpus '{}' ({})", self.corpus, encoding);
        WordIterator::from_source(
            &loader,
            self.batch_size,
            self.example_length,
            StdRng::seed_from_u64(self.seed),
            device,
        )
        .with_context(|| format!("Cannot build iterator over '{}'", self.corpus))
    }
}

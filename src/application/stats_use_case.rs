// ============================================================
// Layer 2 — StatsUseCase
// ============================================================
// Builds the iterator once and reports what an epoch over the
// corpus looks like, without drawing any batches:
//
//   Step 1: Load and tokenise the corpus     (Layer 4 - data)
//   Step 2: Read vocabulary + epoch counts   (Layer 4 - data)
//   Step 3: Sample seed tokens               (Layer 4 - data)

use anyhow::Result;
use burn::backend::{ndarray::NdArrayDevice, NdArray};
use serde::Serialize;

use crate::application::IterConfig;

#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub tokens:            usize,
    pub vocabulary_size:   usize,
    pub example_length:    usize,
    pub windows_per_epoch: usize,
    pub batches_per_epoch: usize,
    /// Tokens drawn with random_token(), e.g. to seed generation
    pub samples:           Vec<String>,
}

pub struct StatsUseCase {
    config:  IterConfig,
    samples: usize,
}

impl StatsUseCase {
    pub fn new(config: IterConfig, samples: usize) -> Self {
        Self { config, samples }
    }

    pub fn execute(&self) -> Result<CorpusStats> {
        let mut iter = self
            .config
            .build_iterator::<NdArray>(NdArrayDevice::default())?;

        let windows = iter.windows_per_epoch();
        let samples = (0..self.samples)
            .map(|_| iter.random_token().to_string())
            .collect();

        Ok(CorpusStats {
            tokens:            iter.corpus_len(),
            vocabulary_size:   iter.vocabulary_size(),
            example_length:    iter.example_length(),
            windows_per_epoch: windows,
            batches_per_epoch: windows.div_ceil(iter.batch_size()),
            samples,
        })
    }
}

// ============================================================
// Layer 4 — Word Window Iterator
// ============================================================
// The object a training loop holds on to. It owns:
//
//   Corpus        — token sequence + vocabulary (never mutated)
//   WindowDataset — offset → window of vocabulary indices
//   EpochSchedule — shuffled queue of offsets for this epoch
//   WindowBatcher — windows → one-hot tensors on a device
//   rng           — caller-supplied, drives shuffles and sampling
//
// Two states:
//   has-windows  (remaining() > 0)  → next_batch succeeds
//   exhausted    (remaining() == 0) → next_batch fails until reset()
//
// A typical epoch loop:
//
//   while iter.has_next() {
//       let batch = iter.next_batch(32)?;
//       ...
//   }
//   iter.reset();
//
// Reference: Rust Book §13 (Iterators)

use burn::{data::dataloader::batcher::Batcher, prelude::*};
use rand::{rngs::StdRng, Rng};

use crate::data::{
    batcher::{WindowBatcher, WordBatch},
    dataset::WindowDataset,
    schedule::{windows_per_epoch, EpochSchedule},
    vocab::{Corpus, Vocabulary},
};
use crate::domain::error::{Result, WordIterError};
use crate::domain::traits::CorpusSource;
use crate::domain::window::WordWindow;

/// Produces shuffled minibatches of one-hot next-word windows.
pub struct WordIterator<B: Backend, R: Rng = StdRng> {
    tokens:     Vec<String>,
    vocab:      Vocabulary,
    dataset:    WindowDataset,
    schedule:   EpochSchedule,
    batcher:    WindowBatcher<B>,
    batch_size: usize,
    rng:        R,
}

impl<B: Backend, R: Rng> WordIterator<B, R> {
    /// Build the iterator from corpus lines.
    ///
    /// # Errors
    /// Configuration errors if `batch_size` is 0, if `example_length`
    /// is 0 or not less than the token count, or if the corpus is too
    /// short to form a single window.
    pub fn new<S: AsRef<str>>(
        lines:          &[S],
        batch_size:     usize,
        example_length: usize,
        mut rng:        R,
        device:         B::Device,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(WordIterError::InvalidBatchSize(batch_size));
        }

        let corpus = Corpus::from_lines(lines);
        let len    = corpus.len();

        if example_length == 0 || example_length >= len {
            return Err(WordIterError::InvalidExampleLength { example_length, tokens: len });
        }
        if windows_per_epoch(len, example_length) == 0 {
            return Err(WordIterError::NoWindows { example_length, tokens: len });
        }

        let (tokens, ids, vocab) = corpus.into_parts();
        let dataset  = WindowDataset::new(ids, example_length);
        let schedule = EpochSchedule::new(len, example_length, &mut rng);
        let batcher  = WindowBatcher::new(device, vocab.len(), example_length);

        tracing::debug!(
            "Iterator ready: {} windows of {} tokens per epoch, batch size {}",
            schedule.windows_per_epoch(),
            example_length,
            batch_size
        );

        Ok(Self { tokens, vocab, dataset, schedule, batcher, batch_size, rng })
    }

    /// Build the iterator from any corpus source.
    pub fn from_source(
        source:         &impl CorpusSource,
        batch_size:     usize,
        example_length: usize,
        rng:            R,
        device:         B::Device,
    ) -> Result<Self> {
        let lines = source.load_lines()?;
        Self::new(&lines, batch_size, example_length, rng, device)
    }

    // ─── Batches ──────────────────────────────────────────────────────────────

    /// True while the current epoch still has windows
    pub fn has_next(&self) -> bool {
        !self.schedule.is_exhausted()
    }

    /// Draw up to `size` windows and encode them.
    ///
    /// The batch holds `min(size, remaining())` rows. Each drawn
    /// window is removed from the epoch.
    ///
    /// # Errors
    /// `InvalidBatchSize` if `size` is 0, `Exhausted` if the epoch
    /// has no windows left.
    pub fn next_batch(&mut self, size: usize) -> Result<WordBatch<B>> {
        if size == 0 {
            return Err(WordIterError::InvalidBatchSize(size));
        }
        if self.schedule.is_exhausted() {
            tracing::debug!("Batch requested from exhausted epoch");
            return Err(WordIterError::Exhausted);
        }

        let windows: Vec<WordWindow> = self
            .schedule
            .take(size)
            .into_iter()
            .filter_map(|start| self.dataset.window_at(start))
            .collect();

        Ok(self.batcher.batch(windows))
    }

    /// Draw a batch of the configured default size
    pub fn next_default_batch(&mut self) -> Result<WordBatch<B>> {
        self.next_batch(self.batch_size)
    }

    /// Start a new epoch: every window is available again, in a
    /// fresh shuffled order.
    pub fn reset(&mut self) {
        self.schedule.reset(&mut self.rng);
        tracing::debug!("Epoch reset: {} windows queued", self.schedule.remaining());
    }

    // ─── Epoch accounting ─────────────────────────────────────────────────────

    pub fn windows_per_epoch(&self) -> usize {
        self.schedule.windows_per_epoch()
    }

    pub fn remaining(&self) -> usize {
        self.schedule.remaining()
    }

    /// Windows already drawn this epoch
    pub fn cursor(&self) -> usize {
        self.schedule.cursor()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn example_length(&self) -> usize {
        self.dataset.example_length()
    }

    // ─── Vocabulary and corpus lookups ────────────────────────────────────────

    pub fn vocabulary_size(&self) -> usize {
        self.vocab.len()
    }

    /// Width of the one-hot feature axis
    pub fn input_columns(&self) -> usize {
        self.vocab.len()
    }

    /// Width of the one-hot label axis
    pub fn total_outcomes(&self) -> usize {
        self.vocab.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Token with vocabulary index `idx`
    pub fn token_at(&self, idx: usize) -> Option<&str> {
        self.vocab.token_at(idx)
    }

    /// Vocabulary index of `token`
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.vocab.index_of(token)
    }

    /// Token at corpus position `pos`
    pub fn corpus_token(&self, pos: usize) -> Option<&str> {
        self.tokens.get(pos).map(String::as_str)
    }

    pub fn corpus_len(&self) -> usize {
        self.tokens.len()
    }

    /// A token drawn uniformly over the whole token sequence, so
    /// frequent words come up more often. Useful to seed generation.
    pub fn random_token(&mut self) -> &str {
        let pos = self.rng.gen_range(0..self.tokens.len());
        &self.tokens[pos]
    }

    /// The windows of this corpus as a burn dataset
    pub fn dataset(&self) -> &WindowDataset {
        &self.dataset
    }

    pub fn batcher(&self) -> &WindowBatcher<B> {
        &self.batcher
    }
}

/// Yields default-size batches until the epoch is exhausted.
impl<B: Backend, R: Rng> Iterator for WordIterator<B, R> {
    type Item = WordBatch<B>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        match self.next_default_batch() {
            Ok(batch) => Some(batch),
            Err(e) => {
                tracing::warn!("Ending epoch early: {e}");
                None
            }
        }
    }
}

//! Shuffled next-word window batches for sequence models.
//!
//! A corpus is split into whitespace tokens, given a first-seen
//! vocabulary, and cut into non-overlapping windows. Each epoch
//! draws every window once in shuffled order and encodes batches
//! of windows as one-hot `[batch, vocab, steps]` burn tensors.
//!
//! ```no_run
//! use burn::backend::NdArray;
//! use rand::{rngs::StdRng, SeedableRng};
//! use word_window::WordIterator;
//!
//! let lines = vec!["the cat sat on the mat and the dog sat on the log".to_string()];
//! let mut iter = WordIterator::<NdArray, StdRng>::new(
//!     &lines, 2, 3, StdRng::seed_from_u64(1), Default::default(),
//! ).unwrap();
//! while iter.has_next() {
//!     let batch = iter.next_default_batch().unwrap();
//!     println!("{:?}", batch.features.dims());
//! }
//! iter.reset();
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use data::batcher::WordBatch;
pub use data::iterator::WordIterator;
pub use domain::error::WordIterError;

// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a raw text corpus to one-hot tensor batches.
//
// The pipeline flows in this order:
//
//   corpus text
//       │
//       ▼
//   TextFileLoader    → reads the file, decodes, splits lines
//       │
//       ▼
//   Corpus            → whitespace tokens + first-seen vocabulary
//       │
//       ▼
//   EpochSchedule     → shuffled queue of window-start offsets
//       │
//       ▼
//   WindowDataset     → offset → WordWindow of vocabulary indices
//       │
//       ▼
//   WindowBatcher     → stacks windows into one-hot [B, V, T] tensors
//       │
//       ▼
//   WordIterator      → hands batches to the training loop
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Reads plain text corpora in a named encoding
pub mod loader;

/// Tokenisation and first-occurrence vocabulary
pub mod vocab;

/// Per-epoch queue of shuffled window offsets
pub mod schedule;

/// Implements Burn's Dataset trait over corpus windows
pub mod dataset;

/// Implements Burn's Batcher trait to create one-hot batches
pub mod batcher;

/// The batch iterator handed to the training loop
pub mod iterator;

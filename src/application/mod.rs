// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal:
// summarising a corpus or driving epochs of batches.
//
// Rules for this layer:
//   - No tensor math or encoding here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Shared run configuration
pub mod config;

// Corpus, vocabulary and epoch summary
pub mod stats_use_case;

// Draw full epochs of batches and record metrics
pub mod epoch_use_case;

pub use config::IterConfig;

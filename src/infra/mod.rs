// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting file output that doesn't belong in the data
// pipeline itself:
//
//   run_store.rs — Run configuration persistence
//                  Saves the IterConfig of a run as JSON and
//                  loads it back, so a seeded run can be
//                  replayed with exactly the same settings.
//
//   metrics.rs   — Epoch metrics logging
//                  Writes per-epoch batch statistics to a CSV
//                  file for later inspection.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Run configuration saving and loading
pub mod run_store;

/// Epoch metrics CSV logger
pub mod metrics;

// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define what the
// system works with: word windows, corpus sources, and the
// error taxonomy shared by every other layer.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A single (input, target) window over the corpus
pub mod window;

// Core abstractions (traits) that other layers implement
pub mod traits;

// Configuration and exhaustion errors
pub mod error;

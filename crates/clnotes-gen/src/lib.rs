//! Classification and emission of per-symbol version notes.
//!
//! For each API symbol reachable from the registry, this crate resolves its
//! introduction point (core version or extension) and optional deprecation
//! point, renders the matching note template, and writes one `.asciidoc`
//! file per unique symbol name. The whole model is recomputed every run and
//! output files are always overwritten.

pub mod classify;
pub mod emit;
pub mod error;
pub mod render;

// Re-exports for convenience.
pub use classify::{deprecated_by, Availability, BASELINE_VERSION, EXTENSION_PREFIX};
pub use emit::{generate, GenerationReport};
pub use error::{GenError, Result};

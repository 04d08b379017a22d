//! OpenCL XML registry loading for the version-note generator.
//!
//! The registry (`cl.xml`) describes, for every core version ("feature") and
//! extension, which commands and enumerants it requires. This crate resolves
//! a registry location to a local file or remote URL, reads it once, and
//! parses it into an immutable typed tree that supports the structural
//! lookups the note generator needs.

pub mod error;
pub mod model;
pub mod parse;
pub mod source;

// Re-exports for convenience.
pub use error::{RegistryError, Result};
pub use model::{Extension, Feature, Registry, RequireGroup, SymbolKind};
pub use parse::parse_registry;
pub use source::{read_source, RegistrySource};

/// Load and parse the registry from a resolved source.
pub fn load(source: &RegistrySource) -> Result<Registry> {
    let xml = source::read_source(source)?;
    parse::parse_registry(&xml)
}

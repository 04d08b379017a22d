//! Registry loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading the API registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The local registry file does not exist.
    #[error("registry file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The remote registry could not be fetched.
    #[error("failed to fetch registry from '{url}': {detail}")]
    FetchFailed { url: String, detail: String },

    /// A registry element is missing an attribute the schema requires.
    #[error("<{element}> element is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// Malformed XML document.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute list on an element.
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// I/O error reading a local registry file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

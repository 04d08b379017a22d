//! Note generation error types.

/// Errors that can occur while classifying symbols and emitting notes.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A symbol's require-group comments claim deprecation twice.
    ///
    /// Deprecation must be unambiguous; this is a data-integrity bug in the
    /// registry, not a recoverable condition.
    #[error("'{name}' is marked deprecated twice: \"{first}\" and \"{second}\"")]
    DuplicateDeprecation {
        name: String,
        first: String,
        second: String,
    },

    /// A require-group comment mentions the deprecation marker but does not
    /// end with "deprecated in OpenCL <version>".
    #[error("malformed deprecation comment for '{name}': \"{comment}\"")]
    MalformedDeprecationComment { name: String, comment: String },

    /// I/O error writing a note file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for note generation.
pub type Result<T> = std::result::Result<T, GenError>;

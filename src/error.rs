//! Error types for lection operations.

use thiserror::Error;

/// Errors that can occur while building references or rendering chapters.
#[derive(Error, Debug)]
pub enum Error {
    /// A reference constructor was given values that violate the
    /// `BibleReference` invariants (chapter or verse below 1, or a verse
    /// range ending before it starts).
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// Chapter markup that the sanitizer and parser cannot structure.
    #[error("markup parsing error: {0}")]
    MarkupParse(#[from] quick_xml::Error),

    /// A merge was requested for references that are neither adjacent nor
    /// overlapping. Programmer error; never coerced silently.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Failure reported by the chapter source collaborator. The renderer
    /// passes these through unchanged.
    #[error("chapter source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a collaborator error for pass-through.
    pub fn source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Source(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

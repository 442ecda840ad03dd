//! Error types for catalog extraction and serialization.
//!
//! Extraction itself never fails: an accessor error is turned into a
//! [`SkippedEntry`](crate::SkippedEntry) and the document is still produced.
//! [`CatalogError`] covers what is left: unknown kind names, rendering
//! failures from `celestial-time`, and the XML writer.

use celestial_time::FormatError;
use thiserror::Error;

/// Failure reported by a single capability accessor.
///
/// Accessors return this instead of panicking when a value cannot be
/// produced, e.g. when the calculator has no data for the requested date.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct AccessError {
    message: String,
}

impl AccessError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A kind name that does not map to a [`SourceKind`](crate::SourceKind).
    #[error("Unknown source kind '{0}'")]
    UnknownKind(String),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// The XML writer rejected an event.
    #[error("XML write error: {0}")]
    Xml(String),

    #[error("Rendered document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Convenience alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

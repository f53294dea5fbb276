//! Error types for palette operations

use thiserror::Error;

/// Errors raised while turning a kind into an element
///
/// Both variants indicate drift between the catalog and its caller (or the
/// builder) rather than bad user input, so callers should fail fast instead
/// of retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Kind is not declared in either catalog group
    #[error("unknown element kind: {kind}")]
    UnknownKind { kind: String },

    /// The builder has no case for this kind
    #[error("unsupported element type: {kind}")]
    UnsupportedElementType { kind: String },

    /// An API-backed element was requested for an entry without a URL template
    #[error("element kind {kind} has no URL template")]
    MissingTemplate { kind: String },
}

impl PaletteError {
    pub(crate) fn unknown_kind(kind: impl Into<String>) -> Self {
        PaletteError::UnknownKind { kind: kind.into() }
    }

    pub(crate) fn unsupported(kind: impl Into<String>) -> Self {
        PaletteError::UnsupportedElementType { kind: kind.into() }
    }
}

//! Conversion error types.

use thiserror::Error;

/// Hard failures that abort a conversion.
///
/// These are the only conditions that propagate. Everything else degrades
/// locally: unknown colors fall back to opaque black, unresolvable gradient
/// references drop the fill, and invisible or degenerate shapes are skipped
/// without touching the rest of the document.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source has no usable `<svg>` root element with inner content.
    #[error("not a valid SVG document: {0}")]
    InvalidDocument(String),

    /// The assembled document could not be serialized.
    #[error("XAML serialization failed")]
    Serialize(#[from] std::io::Error),
}

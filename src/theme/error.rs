//! Theme error types

use std::path::PathBuf;
use thiserror::Error;

use crate::sink::SinkError;

/// Errors raised while building, loading, or applying a theme.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A color literal matched neither `#RRGGBB` nor `rgba(r,g,b,a)`.
    #[error("invalid color for {field}: {value:?}")]
    InvalidColorFormat {
        /// Slot or field the literal was meant for (e.g. "red", "foreground").
        field: String,
        value: String,
    },

    /// Palette did not carry exactly 16 entries.
    #[error("palette must have exactly 16 colors, found {found}")]
    InvalidPaletteLength { found: usize },

    /// The host did not expose a preference store to write into.
    #[error("host does not expose a preference sink")]
    SinkUnavailable,

    /// The sink refused a write.
    #[error("preference sink rejected write: {0}")]
    SinkRejected(#[from] SinkError),

    #[error("theme '{name}' not found")]
    ThemeNotFound { name: String },

    /// Theme document could not be parsed.
    #[error("failed to parse theme {origin}: {source}")]
    Parse {
        /// File path or bundled filename.
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported theme format version {0}")]
    UnsupportedVersion(u32),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

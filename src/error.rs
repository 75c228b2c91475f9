//! Error types produced during a generation run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every variant is surfaced to the caller unchanged; the generator never
/// recovers silently or leaves partial output behind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// Malformed JSON or YAML input, for the base document or a locale
    /// override.
    #[error("malformed document '{origin}': {source}")]
    Decode {
        origin: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Serialization of a generated document failed. Documents obtained from
    /// the decode path always serialize, so this signals a broken invariant
    /// rather than bad input.
    #[error("failed to encode generated document: {source}")]
    Encode {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// File system failure while reading inputs or placing outputs.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Locale override listing failed. A missing locales directory is not a
    /// discovery failure; it simply yields no locales.
    #[error("failed to list locale overrides '{pattern}': {source}")]
    Discovery {
        pattern: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GenerateError {
    pub(crate) fn decode(
        origin: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Decode {
            origin: origin.into(),
            source: source.into(),
        }
    }

    pub(crate) fn encode(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Encode {
            source: source.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn discovery(
        pattern: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Discovery {
            pattern: pattern.into(),
            source: source.into(),
        }
    }
}

use std::fmt;

use thiserror::Error;

/// Errors returned by SPLICE framing and decoding.
///
/// Source-open and other I/O failures pass through unchanged as `Io`; short
/// reads are mapped to the typed truncation variants instead.
///
/// # Examples
/// ```
/// use splicedump_core::{DecodeError, Field};
///
/// let err = DecodeError::TruncatedField {
///     field: Field::TrackName,
/// };
/// assert!(err.to_string().contains("track name"));
/// ```
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file format")]
    UnsupportedFormat,
    #[error("truncated header: short read in {field}")]
    TruncatedHeader { field: &'static str },
    #[error("truncated payload: short read in {field}")]
    TruncatedField { field: Field },
}

/// Payload field being decoded when a short read occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Version,
    Tempo,
    TrackId,
    TrackNameLength,
    TrackName,
    Steps,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Version => "version",
            Field::Tempo => "tempo",
            Field::TrackId => "track id",
            Field::TrackNameLength => "track name length",
            Field::TrackName => "track name",
            Field::Steps => "steps",
        };
        f.write_str(name)
    }
}

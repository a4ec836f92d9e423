//! Error types for file layout operations.

use std::fmt;

use bytestream::ByteError;

/// Result type for file layout operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// Structural decode errors for the level file layout.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The file does not start with a known format tag.
    InvalidFormat { found: [u8; 5] },

    /// The file uses the legacy "POT06" layout, which is not supported.
    UnsupportedLegacyFormat,

    /// The end-of-data marker after the picture list is wrong.
    EndOfDataMarkerMismatch { found: i32 },

    /// The end-of-file marker after the Top10 block is wrong.
    EndOfFileMarkerMismatch { found: i32 },

    /// A count field does not describe a valid list length.
    InvalidCount { kind: CountKind, value: f64 },

    /// A count exceeds the configured decode limits.
    LimitsExceeded {
        kind: CountKind,
        limit: usize,
        actual: usize,
    },

    /// Ran out of input.
    Bytestream(ByteError),
}

/// The lists whose lengths are stored in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountKind {
    Polygons,
    Vertices,
    Objects,
    Pictures,
}

impl DecodeError {
    /// Returns `true` if the input ended before the layout was complete.
    #[must_use]
    pub const fn is_unexpected_end(&self) -> bool {
        matches!(
            self,
            Self::Bytestream(ByteError::UnexpectedEndOfData { .. })
        )
    }
}

impl From<ByteError> for DecodeError {
    fn from(err: ByteError) -> Self {
        Self::Bytestream(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { found } => {
                write!(f, "invalid format tag: {}", found.escape_ascii())
            }
            Self::UnsupportedLegacyFormat => {
                write!(f, "unsupported legacy format (POT06)")
            }
            Self::EndOfDataMarkerMismatch { found } => {
                write!(f, "end-of-data marker mismatch: 0x{found:08X}")
            }
            Self::EndOfFileMarkerMismatch { found } => {
                write!(f, "end-of-file marker mismatch: 0x{found:08X}")
            }
            Self::InvalidCount { kind, value } => {
                write!(f, "invalid {kind} count: {value}")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::Bytestream(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for CountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Polygons => "polygon",
            Self::Vertices => "vertex",
            Self::Objects => "object",
            Self::Pictures => "picture",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bytestream(err) => Some(err),
            _ => None,
        }
    }
}

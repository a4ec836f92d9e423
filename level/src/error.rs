//! Error types for level encoding and decoding.

use std::fmt;

use bytestream::ByteError;

/// Result type for level operations.
pub type LevelResult<T> = Result<T, LevelError>;

/// Errors that can occur while decoding or encoding a level.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// File layout error: format tag, markers, counts or truncation.
    Wire(wire::DecodeError),

    /// Object type code outside 1..=4.
    InvalidObjectType { code: i32 },

    /// Apple gravity code outside 0..=4.
    InvalidGravityValue { code: i32 },

    /// Apple animation code that does not give a positive frame.
    InvalidAnimationValue { code: i32 },

    /// Picture clip code outside 0..=2.
    InvalidClipValue { code: i32 },

    /// Score table claims more entries than it has slots.
    InvalidScoreCount { count: u32 },

    /// Only the standard format can be written.
    UnsupportedFormatForWrite,

    /// A polygon has more vertices than the count field can hold.
    LengthOverflow { length: usize },

    /// An apple animation frame too large for the file field.
    AnimationOutOfRange { frame: u32 },
}

impl LevelError {
    /// Returns `true` if the input ended before the level was complete.
    #[must_use]
    pub const fn is_unexpected_end(&self) -> bool {
        match self {
            Self::Wire(err) => err.is_unexpected_end(),
            _ => false,
        }
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::InvalidObjectType { code } => write!(f, "invalid object type: {code}"),
            Self::InvalidGravityValue { code } => write!(f, "invalid apple gravity: {code}"),
            Self::InvalidAnimationValue { code } => {
                write!(f, "invalid apple animation: {code}")
            }
            Self::InvalidClipValue { code } => write!(f, "invalid picture clip: {code}"),
            Self::InvalidScoreCount { count } => {
                write!(f, "invalid score count: {count} entries")
            }
            Self::UnsupportedFormatForWrite => {
                write!(f, "only the standard format can be written")
            }
            Self::LengthOverflow { length } => {
                write!(f, "length overflow: {length}")
            }
            Self::AnimationOutOfRange { frame } => {
                write!(f, "apple animation frame out of range: {frame}")
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for LevelError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl From<ByteError> for LevelError {
    fn from(err: ByteError) -> Self {
        Self::Wire(err.into())
    }
}

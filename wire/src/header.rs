//! File header layout, format tags and record sizes.

use bytestream::{ByteReader, ByteWriter};

use crate::error::{DecodeError, WireResult};

/// Tag at offset 0 of every supported level file.
pub const FORMAT_TAG: [u8; 5] = *b"POT14";

/// Tag of the legacy layout. Recognized only to be rejected.
pub const LEGACY_TAG: [u8; 5] = *b"POT06";

/// Unused bytes between the tag and the link.
pub const RESERVED_SIZE: usize = 2;

/// Offset of the `u32` link.
pub const LINK_OFFSET: usize = FORMAT_TAG.len() + RESERVED_SIZE;

/// Offset of the four `f64` integrity sums.
pub const INTEGRITY_OFFSET: usize = LINK_OFFSET + 4;

/// Number of integrity sums.
pub const INTEGRITY_LEN: usize = 4;

/// Offset of the level name.
pub const NAME_OFFSET: usize = INTEGRITY_OFFSET + INTEGRITY_LEN * 8;

pub const NAME_SIZE: usize = 51;
pub const LGR_SIZE: usize = 16;
pub const GROUND_SIZE: usize = 10;
pub const SKY_SIZE: usize = 10;

/// Size of the fixed header (130 bytes), up to the polygon count.
pub const HEADER_SIZE: usize = NAME_OFFSET + NAME_SIZE + LGR_SIZE + GROUND_SIZE + SKY_SIZE;

/// Size of a biased `f64` list count.
pub const COUNT_SIZE: usize = 8;

/// Polygon record without vertices: grass flag + vertex count.
pub const POLYGON_HEADER_SIZE: usize = 4 + 4;

/// One vertex: two `f64`.
pub const VERTEX_SIZE: usize = 8 + 8;

/// Object record: x, y, type, gravity, animation.
pub const OBJECT_SIZE: usize = 8 + 8 + 4 + 4 + 4;

/// Width of picture, texture and mask names.
pub const PICTURE_NAME_SIZE: usize = 10;

/// Picture record: three names, x, y, distance, clip.
pub const PICTURE_SIZE: usize = 3 * PICTURE_NAME_SIZE + 8 + 8 + 4 + 4;

/// Size of each `i32` sentinel marker.
pub const MARKER_SIZE: usize = 4;

/// Format of a level file, as identified by its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatVersion {
    /// "POT14", the only layout this codec reads and writes.
    #[default]
    Standard,
    /// "POT06". Detected but never decoded.
    LegacyUnsupported,
}

impl FormatVersion {
    /// Identifies the format from a file tag.
    #[must_use]
    pub fn from_tag(tag: [u8; 5]) -> Option<Self> {
        match &tag {
            b"POT14" => Some(Self::Standard),
            b"POT06" => Some(Self::LegacyUnsupported),
            _ => None,
        }
    }

    /// Returns the file tag for this format.
    #[must_use]
    pub const fn tag(self) -> [u8; 5] {
        match self {
            Self::Standard => FORMAT_TAG,
            Self::LegacyUnsupported => LEGACY_TAG,
        }
    }
}

/// Reads the format tag and the reserved bytes after it.
///
/// Only [`FormatVersion::Standard`] is ever returned; the legacy tag fails
/// with [`DecodeError::UnsupportedLegacyFormat`] before anything else is read.
pub fn read_format(reader: &mut ByteReader<'_>) -> WireResult<FormatVersion> {
    let tag = reader.read_array::<5>()?;
    match FormatVersion::from_tag(tag) {
        Some(FormatVersion::Standard) => {
            reader.skip(RESERVED_SIZE)?;
            Ok(FormatVersion::Standard)
        }
        Some(FormatVersion::LegacyUnsupported) => Err(DecodeError::UnsupportedLegacyFormat),
        None => Err(DecodeError::InvalidFormat { found: tag }),
    }
}

/// Writes the standard format tag followed by zeroed reserved bytes.
pub fn write_format(writer: &mut ByteWriter) {
    writer.write_bytes(&FORMAT_TAG);
    writer.write_zeros(RESERVED_SIZE);
}

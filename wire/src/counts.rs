//! List counts stored as biased `f64` values.
//!
//! The polygon, object and picture counts are written as `count + bias`.
//! The bias constants are fixed by the file format; any other value makes
//! files unreadable by the game.

use bytestream::{ByteReader, ByteWriter};

use crate::error::{CountKind, DecodeError, WireResult};

/// Bias added to the polygon count.
pub const POLYGON_COUNT_BIAS: f64 = 0.464_364_3;

/// Bias added to the object count (same literal as polygons).
pub const OBJECT_COUNT_BIAS: f64 = 0.464_364_3;

/// Bias added to the picture count.
pub const PICTURE_COUNT_BIAS: f64 = 0.234_567_2;

impl CountKind {
    /// Bias for counts stored as `f64`. Vertex counts are plain integers.
    #[must_use]
    pub const fn bias(self) -> Option<f64> {
        match self {
            Self::Polygons | Self::Objects => Some(POLYGON_COUNT_BIAS),
            Self::Pictures => Some(PICTURE_COUNT_BIAS),
            Self::Vertices => None,
        }
    }
}

/// Converts a stored count back to a list length.
///
/// The bias is subtracted and the result rounded to the nearest integer.
pub fn decode_count(raw: f64, bias: f64, kind: CountKind) -> WireResult<usize> {
    let value = (raw - bias).round();
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(DecodeError::InvalidCount { kind, value: raw });
    }
    Ok(value as usize)
}

/// Converts a list length to its stored form.
#[must_use]
pub fn encode_count(count: usize, bias: f64) -> f64 {
    count as f64 + bias
}

/// Reads a biased count for `kind`.
pub fn read_count(reader: &mut ByteReader<'_>, kind: CountKind) -> WireResult<usize> {
    match kind.bias() {
        Some(bias) => decode_count(reader.read_f64()?, bias, kind),
        None => {
            let raw = reader.read_i32()?;
            usize::try_from(raw).map_err(|_| DecodeError::InvalidCount {
                kind,
                value: f64::from(raw),
            })
        }
    }
}

/// Writes a count for `kind`.
///
/// Vertex counts must already fit an `i32`; the level encoder checks this.
pub fn write_count(writer: &mut ByteWriter, kind: CountKind, count: usize) {
    match kind.bias() {
        Some(bias) => writer.write_f64(encode_count(count, bias)),
        None => writer.write_i32(i32::try_from(count).unwrap_or(i32::MAX)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_literals() {
        assert_eq!(POLYGON_COUNT_BIAS.to_bits(), 0.464_364_3f64.to_bits());
        assert_eq!(OBJECT_COUNT_BIAS.to_bits(), POLYGON_COUNT_BIAS.to_bits());
        assert_eq!(PICTURE_COUNT_BIAS.to_bits(), 0.234_567_2f64.to_bits());
    }

    #[test]
    fn decode_exact_biased_value() {
        assert_eq!(
            decode_count(3.0 + 0.464_364_3, POLYGON_COUNT_BIAS, CountKind::Polygons).unwrap(),
            3
        );
        assert_eq!(
            decode_count(0.234_567_2, PICTURE_COUNT_BIAS, CountKind::Pictures).unwrap(),
            0
        );
    }

    #[test]
    fn decode_rounds_to_nearest() {
        assert_eq!(decode_count(5.9, POLYGON_COUNT_BIAS, CountKind::Polygons).unwrap(), 5);
        assert_eq!(decode_count(6.0, POLYGON_COUNT_BIAS, CountKind::Polygons).unwrap(), 6);
    }

    #[test]
    fn decode_rejects_negative_and_nan() {
        let err = decode_count(-2.0, POLYGON_COUNT_BIAS, CountKind::Objects).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidCount {
                kind: CountKind::Objects,
                ..
            }
        ));
        assert!(decode_count(f64::NAN, PICTURE_COUNT_BIAS, CountKind::Pictures).is_err());
        assert!(decode_count(f64::INFINITY, PICTURE_COUNT_BIAS, CountKind::Pictures).is_err());
        assert!(decode_count(1e12, PICTURE_COUNT_BIAS, CountKind::Pictures).is_err());
    }

    #[test]
    fn counts_roundtrip_through_stream() {
        let mut writer = ByteWriter::new();
        write_count(&mut writer, CountKind::Polygons, 12);
        write_count(&mut writer, CountKind::Vertices, 4);
        write_count(&mut writer, CountKind::Objects, 0);
        write_count(&mut writer, CountKind::Pictures, 300);
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 8 + 4 + 8 + 8);

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(read_count(&mut reader, CountKind::Polygons).unwrap(), 12);
        assert_eq!(read_count(&mut reader, CountKind::Vertices).unwrap(), 4);
        assert_eq!(read_count(&mut reader, CountKind::Objects).unwrap(), 0);
        assert_eq!(read_count(&mut reader, CountKind::Pictures).unwrap(), 300);
    }

    #[test]
    fn negative_vertex_count_is_invalid() {
        let bytes = (-1i32).to_le_bytes();
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(
            read_count(&mut reader, CountKind::Vertices).unwrap_err(),
            DecodeError::InvalidCount {
                kind: CountKind::Vertices,
                value: -1.0
            }
        );
    }

    #[test]
    fn stored_polygon_count_bytes() {
        let mut writer = ByteWriter::new();
        write_count(&mut writer, CountKind::Polygons, 1);
        assert_eq!(writer.finish(), (1.0f64 + 0.464_364_3).to_le_bytes().to_vec());
    }
}

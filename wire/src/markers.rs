//! Sentinel markers framing the Top10 block.

use bytestream::{ByteReader, ByteWriter};

use crate::error::{DecodeError, WireResult};

/// Marker after the picture list.
///
/// This value is fixed by the file format and must never change.
pub const END_OF_DATA_MARKER: i32 = 0x0067_103A;

/// Marker after the Top10 block.
///
/// This value is fixed by the file format and must never change.
pub const END_OF_FILE_MARKER: i32 = 0x0084_5D52;

/// Reads and validates the end-of-data marker.
pub fn read_end_of_data(reader: &mut ByteReader<'_>) -> WireResult<()> {
    let found = reader.read_i32()?;
    if found != END_OF_DATA_MARKER {
        return Err(DecodeError::EndOfDataMarkerMismatch { found });
    }
    Ok(())
}

/// Reads and validates the end-of-file marker.
pub fn read_end_of_file(reader: &mut ByteReader<'_>) -> WireResult<()> {
    let found = reader.read_i32()?;
    if found != END_OF_FILE_MARKER {
        return Err(DecodeError::EndOfFileMarkerMismatch { found });
    }
    Ok(())
}

pub fn write_end_of_data(writer: &mut ByteWriter) {
    writer.write_i32(END_OF_DATA_MARKER);
}

pub fn write_end_of_file(writer: &mut ByteWriter) {
    writer.write_i32(END_OF_FILE_MARKER);
}

//! File layout for the lev level codec.
//!
//! This crate handles the structural parts of the level file: the format tag,
//! header offsets, biased list counts, sentinel markers, decode limits and the
//! Top10 obfuscation. It does not know about polygons, objects or scores, only
//! where they live in the file.
//!
//! # Design Principles
//!
//! - **Fixed layout** - Every offset and magic value is a named constant.
//! - **Bounded decoding** - All counts are validated against limits before iteration.
//! - **No domain knowledge** - This crate handles layout, not level contents.

mod counts;
mod error;
mod header;
mod limits;
mod markers;
mod top10;

pub use counts::{
    decode_count, encode_count, read_count, write_count, OBJECT_COUNT_BIAS, PICTURE_COUNT_BIAS,
    POLYGON_COUNT_BIAS,
};
pub use error::{CountKind, DecodeError, WireResult};
pub use header::{
    read_format, write_format, FormatVersion, COUNT_SIZE, FORMAT_TAG, GROUND_SIZE, HEADER_SIZE,
    INTEGRITY_LEN, INTEGRITY_OFFSET, LEGACY_TAG, LGR_SIZE, LINK_OFFSET, MARKER_SIZE, NAME_OFFSET,
    NAME_SIZE, OBJECT_SIZE, PICTURE_NAME_SIZE, PICTURE_SIZE, POLYGON_HEADER_SIZE, RESERVED_SIZE,
    SKY_SIZE, VERTEX_SIZE,
};
pub use limits::Limits;
pub use markers::{
    read_end_of_data, read_end_of_file, write_end_of_data, write_end_of_file,
    END_OF_DATA_MARKER, END_OF_FILE_MARKER,
};
pub use top10::{
    crypt_top10, crypt_top10_in_place, COUNT_OFFSET, NAMES_A_OFFSET, NAMES_B_OFFSET,
    SCORE_NAME_SIZE, TIMES_OFFSET, TOP10_ENTRIES, TOP10_SIZE, TOP10_TABLE_SIZE,
};

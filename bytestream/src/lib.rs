//! Byte-level primitives for the lev codec.
//!
//! This crate provides [`ByteReader`] and [`ByteWriter`] for little-endian
//! encoding and decoding, plus the fixed-width string fields used throughout
//! the level format.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about levels or scores.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u32(42);
//! writer.write_fixed_str("sky", 10);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u32().unwrap(), 42);
//! assert_eq!(reader.read_fixed_str(10).unwrap(), "sky");
//! ```

mod error;
mod reader;
pub mod strings;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;

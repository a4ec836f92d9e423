//! Level encoding and decoding for the lev codec.
//!
//! This is the main codec crate that ties together bytestream and wire to
//! turn level files into a typed [`Level`] and back.
//!
//! # Features
//!
//! - Polygon, object and picture lists
//! - Obfuscated single-player and multiplayer best-time tables
//! - Integrity sums derived on every encode
//! - Optional `serde` support for the level model
//!
//! # Design Principles
//!
//! - **Correctness first** - Every enum code is validated, nothing is defaulted.
//! - **Bounded decoding** - Counts are checked before any list is allocated.
//! - **Injected randomness** - Integrity sums take any `rand::Rng`.
//!
//! # Example
//!
//! ```
//! use level::{decode_level, encode_level, Level};
//!
//! let level = Level::with_link(1234);
//! let bytes = encode_level(&level).unwrap();
//! let decoded = decode_level(&bytes).unwrap();
//! assert_eq!(decoded.link, 1234);
//! assert_eq!(decoded.polygons, level.polygons);
//! ```

mod decode;
mod encode;
mod error;
mod integrity;
mod top10;
mod types;

pub use decode::{decode_level, decode_level_with_limits};
pub use encode::{encode_level, encode_level_with_rng, encoded_len};
pub use error::{LevelError, LevelResult};
pub use integrity::{compute_integrity, integrity_base, kind_weight, INTEGRITY_FACTOR};
pub use top10::{decode_top10, encode_top10};
pub use types::{
    Clip, FormatVersion, Gravity, Level, Object, ObjectKind, Picture, Point, Polygon, ScoreEntry,
    Top10,
};
pub use wire::Limits;

//! Fixed-width string fields.
//!
//! Strings are stored as single-byte characters. Decoding maps each byte to
//! the char with the same code point, so every byte value survives a round
//! trip. Encoding maps chars up to U+00FF back to their byte; anything wider
//! is written as [`REPLACEMENT_BYTE`].

/// Byte written for characters that do not fit in a single byte.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Fill byte for unused trailing positions.
pub const FILL_BYTE: u8 = 0;

/// Decodes a fixed-width field.
///
/// The value ends at the first null byte; a trailing run of spaces before it
/// is dropped as well.
#[must_use]
pub fn trim_fixed(field: &[u8]) -> String {
    let end = field
        .iter()
        .position(|&b| b == FILL_BYTE)
        .unwrap_or(field.len());
    let value = &field[..end];
    let end = value
        .iter()
        .rposition(|&b| b != b' ')
        .map_or(0, |last| last + 1);
    value[..end].iter().map(|&b| char::from(b)).collect()
}

/// Encodes `value` into `out`, filling the whole slice.
///
/// Writes at most `out.len()` bytes of the string and pads the rest with
/// [`FILL_BYTE`].
pub fn pad_fixed(value: &str, out: &mut [u8]) {
    let mut chars = value.chars().map(char_to_byte);
    for slot in out.iter_mut() {
        *slot = chars.next().unwrap_or(FILL_BYTE);
    }
}

/// Encodes `value` as an owned field of exactly `width` bytes.
#[must_use]
pub fn to_fixed(value: &str, width: usize) -> Vec<u8> {
    let mut out = vec![FILL_BYTE; width];
    pad_fixed(value, &mut out);
    out
}

fn char_to_byte(c: char) -> u8 {
    u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT_BYTE)
}

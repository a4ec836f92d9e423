//! Top10 block layout and obfuscation.
//!
//! The block holds two score tables (single-player, then multiplayer) and is
//! stored XORed with a self-evolving keystream. The keystream recurrence is
//! fixed by the game and reproduced bit-for-bit here.

/// Size of the obfuscated block.
pub const TOP10_SIZE: usize = 688;

/// Size of one table within the block.
pub const TOP10_TABLE_SIZE: usize = TOP10_SIZE / 2;

/// Entries stored per table.
pub const TOP10_ENTRIES: usize = 10;

/// Width of each player name.
pub const SCORE_NAME_SIZE: usize = 15;

/// Offset of the `u32` entry count within a table.
pub const COUNT_OFFSET: usize = 0;

/// Offset of the `u32` times within a table.
pub const TIMES_OFFSET: usize = COUNT_OFFSET + 4;

/// Offset of the first player's names within a table.
pub const NAMES_A_OFFSET: usize = TIMES_OFFSET + TOP10_ENTRIES * 4;

/// Offset of the second player's names within a table.
pub const NAMES_B_OFFSET: usize = NAMES_A_OFFSET + TOP10_ENTRIES * SCORE_NAME_SIZE;

const KEY1_SEED: i16 = 0x15;
const KEY2_SEED: i32 = 0x2637;
const KEY_STEP: i16 = 0xD3D;
const KEY_MUL: i32 = 0x1F;

/// Applies the Top10 keystream in place.
///
/// Applying it twice restores the original bytes.
pub fn crypt_top10_in_place(block: &mut [u8; TOP10_SIZE]) {
    let mut key1 = KEY1_SEED;
    let mut key2 = KEY2_SEED;
    for byte in block.iter_mut() {
        *byte ^= (key1 & 0xFF) as u8;
        key2 = key2.wrapping_add(i32::from(key1 % KEY_STEP).wrapping_mul(i32::from(KEY_STEP)));
        // Only the low 16 bits survive, reinterpreted as signed.
        key1 = key2.wrapping_mul(KEY_MUL).wrapping_add(i32::from(KEY_STEP)) as i16;
    }
}

/// Returns the block with the Top10 keystream applied.
#[must_use]
pub fn crypt_top10(block: &[u8; TOP10_SIZE]) -> [u8; TOP10_SIZE] {
    let mut out = *block;
    crypt_top10_in_place(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout() {
        assert_eq!(TOP10_TABLE_SIZE, 344);
        assert_eq!(TIMES_OFFSET, 4);
        assert_eq!(NAMES_A_OFFSET, 44);
        assert_eq!(NAMES_B_OFFSET, 194);
        assert_eq!(NAMES_B_OFFSET + TOP10_ENTRIES * SCORE_NAME_SIZE, TOP10_TABLE_SIZE);
    }

    #[test]
    fn keystream_prefix() {
        let stream = crypt_top10(&[0u8; TOP10_SIZE]);
        assert_eq!(&stream[..8], &[0x15, 0x05, 0x6A, 0xB7, 0x89, 0xED, 0x59, 0xC4]);
    }

    #[test]
    fn keystream_suffix() {
        let stream = crypt_top10(&[0u8; TOP10_SIZE]);
        assert_eq!(&stream[TOP10_SIZE - 4..], &[0xD8, 0x60, 0xE9, 0x4C]);
    }

    #[test]
    fn involution() {
        let mut block = [0u8; TOP10_SIZE];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = (i * 7 + 3) as u8;
        }
        assert_eq!(crypt_top10(&crypt_top10(&block)), block);
    }

    #[test]
    fn in_place_matches_copy() {
        let block = [0xA5u8; TOP10_SIZE];
        let mut in_place = block;
        crypt_top10_in_place(&mut in_place);
        assert_eq!(in_place, crypt_top10(&block));
        assert_ne!(in_place, block);
    }
}

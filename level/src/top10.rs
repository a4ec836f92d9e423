//! Best-time tables inside the Top10 block.

use bytestream::{ByteReader, ByteWriter};
use wire::{crypt_top10, SCORE_NAME_SIZE, TOP10_ENTRIES, TOP10_SIZE, TOP10_TABLE_SIZE};

use crate::error::{LevelError, LevelResult};
use crate::types::{ScoreEntry, Top10};

/// Decodes both tables from an obfuscated Top10 block.
pub fn decode_top10(block: &[u8; TOP10_SIZE]) -> LevelResult<Top10> {
    let plain = crypt_top10(block);
    let (single, multi) = plain.split_at(TOP10_TABLE_SIZE);
    Ok(Top10 {
        single: decode_table(single)?,
        multi: decode_table(multi)?,
    })
}

/// Encodes both tables into an obfuscated Top10 block.
///
/// Each table is sorted by time and cut to its ten best entries.
#[must_use]
pub fn encode_top10(top10: &Top10) -> [u8; TOP10_SIZE] {
    let mut writer = ByteWriter::with_capacity(TOP10_SIZE);
    encode_table(&top10.single, &mut writer);
    encode_table(&top10.multi, &mut writer);

    let mut block = [0u8; TOP10_SIZE];
    block.copy_from_slice(&writer.finish());
    crypt_top10(&block)
}

/// Decodes one plain 344-byte table.
///
/// Slots past the stored count are ignored.
pub fn decode_table(table: &[u8]) -> LevelResult<Vec<ScoreEntry>> {
    let mut reader = ByteReader::new(table);
    let count = reader.read_u32()?;
    let len = usize::try_from(count)
        .ok()
        .filter(|&len| len <= TOP10_ENTRIES)
        .ok_or(LevelError::InvalidScoreCount { count })?;

    let mut times = [0u32; TOP10_ENTRIES];
    for time in &mut times {
        *time = reader.read_u32()?;
    }
    let mut names_a = Vec::with_capacity(TOP10_ENTRIES);
    for _ in 0..TOP10_ENTRIES {
        names_a.push(reader.read_fixed_str(SCORE_NAME_SIZE)?);
    }
    let mut names_b = Vec::with_capacity(TOP10_ENTRIES);
    for _ in 0..TOP10_ENTRIES {
        names_b.push(reader.read_fixed_str(SCORE_NAME_SIZE)?);
    }

    Ok(times
        .into_iter()
        .zip(names_a)
        .zip(names_b)
        .take(len)
        .map(|((time, name_a), name_b)| ScoreEntry {
            time,
            name_a,
            name_b,
        })
        .collect())
}

/// Returns the entries that will be stored: stable-sorted by time, at most ten.
#[must_use]
pub fn ranked(entries: &[ScoreEntry]) -> Vec<&ScoreEntry> {
    let mut ranked: Vec<&ScoreEntry> = entries.iter().collect();
    ranked.sort_by_key(|entry| entry.time);
    ranked.truncate(TOP10_ENTRIES);
    ranked
}

/// Encodes one plain 344-byte table. Unused slots are zero-filled.
pub fn encode_table(entries: &[ScoreEntry], writer: &mut ByteWriter) {
    let ranked = ranked(entries);
    let unused = TOP10_ENTRIES - ranked.len();

    writer.write_u32(ranked.len() as u32);
    for entry in &ranked {
        writer.write_u32(entry.time);
    }
    writer.write_zeros(unused * 4);
    for entry in &ranked {
        writer.write_fixed_str(&entry.name_a, SCORE_NAME_SIZE);
    }
    writer.write_zeros(unused * SCORE_NAME_SIZE);
    for entry in &ranked {
        writer.write_fixed_str(&entry.name_b, SCORE_NAME_SIZE);
    }
    writer.write_zeros(unused * SCORE_NAME_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire::{NAMES_A_OFFSET, NAMES_B_OFFSET, TIMES_OFFSET};

    fn plain_table(entries: &[ScoreEntry]) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        encode_table(entries, &mut writer);
        writer.finish()
    }

    #[test]
    fn empty_table_layout() {
        let table = plain_table(&[]);
        assert_eq!(table.len(), TOP10_TABLE_SIZE);
        assert!(table.iter().all(|&b| b == 0));
        assert!(decode_table(&table).unwrap().is_empty());
    }

    #[test]
    fn slots_are_positional() {
        let table = plain_table(&[
            ScoreEntry::multi(2000, "Bob", "Eve"),
            ScoreEntry::multi(1500, "Ann", "Joe"),
        ]);
        assert_eq!(&table[0..4], &2u32.to_le_bytes());
        assert_eq!(&table[TIMES_OFFSET..TIMES_OFFSET + 4], &1500u32.to_le_bytes());
        assert_eq!(&table[TIMES_OFFSET + 4..TIMES_OFFSET + 8], &2000u32.to_le_bytes());
        assert_eq!(&table[NAMES_A_OFFSET..NAMES_A_OFFSET + 4], b"Ann\0");
        assert_eq!(
            &table[NAMES_A_OFFSET + SCORE_NAME_SIZE..NAMES_A_OFFSET + SCORE_NAME_SIZE + 4],
            b"Bob\0"
        );
        assert_eq!(&table[NAMES_B_OFFSET..NAMES_B_OFFSET + 4], b"Joe\0");
        assert!(table[TIMES_OFFSET + 8..NAMES_A_OFFSET].iter().all(|&b| b == 0));
    }

    #[test]
    fn ranking_is_stable_and_capped() {
        let entries: Vec<ScoreEntry> = (0..12u32)
            .map(|i| ScoreEntry::single(1000 - (i % 3) * 100, &format!("p{i}")))
            .collect();
        let ranked = ranked(&entries);
        assert_eq!(ranked.len(), TOP10_ENTRIES);
        let names: Vec<&str> = ranked.iter().map(|entry| entry.name_a.as_str()).collect();
        // times: p2,p5,p8,p11 = 800; p1,p4,p7,p10 = 900; p0,p3,... = 1000
        assert_eq!(
            names,
            ["p2", "p5", "p8", "p11", "p1", "p4", "p7", "p10", "p0", "p3"]
        );
    }

    #[test]
    fn trailing_slots_ignored_on_decode() {
        let mut table = plain_table(&[ScoreEntry::single(42, "solo")]);
        table[TIMES_OFFSET + 4..TIMES_OFFSET + 8].copy_from_slice(&7u32.to_le_bytes());
        let entries = decode_table(&table).unwrap();
        assert_eq!(entries, vec![ScoreEntry::single(42, "solo")]);
    }

    #[test]
    fn oversized_count_rejected() {
        let mut table = plain_table(&[]);
        table[0..4].copy_from_slice(&11u32.to_le_bytes());
        assert_eq!(
            decode_table(&table).unwrap_err(),
            LevelError::InvalidScoreCount { count: 11 }
        );
    }

    #[test]
    fn block_roundtrip() {
        let top10 = Top10 {
            single: vec![ScoreEntry::single(1234, "Jon")],
            multi: vec![ScoreEntry::multi(5678, "Ann", "Bob")],
        };
        let block = encode_top10(&top10);
        assert_eq!(decode_top10(&block).unwrap(), top10);
    }

    #[test]
    fn empty_block_is_keystream() {
        let block = encode_top10(&Top10::default());
        assert_eq!(block, crypt_top10(&[0u8; TOP10_SIZE]));
    }
}

//! Inspection and conversion tools for lev level files.
//!
//! This crate backs the `lev-tools` binary:
//!
//! - Summarize a level's header, geometry and best times
//! - Render a decoded level as text
//! - Create and re-save levels with fresh integrity sums
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what a level contains.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use bytestream::{strings::trim_fixed, ByteReader};
use level::{Level, ObjectKind, ScoreEntry};
use rand::Rng;
use serde::Serialize;

/// Relative tolerance when comparing a stored integrity base.
const INTEGRITY_TOLERANCE: f64 = 1e-6;

/// Summary of a decoded level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub tag: String,
    pub byte_len: usize,
    pub link: u32,
    pub name: String,
    pub lgr: String,
    pub ground: String,
    pub sky: String,
    pub polygons: usize,
    pub grass_polygons: usize,
    pub vertices: usize,
    pub objects: ObjectCounts,
    pub pictures: usize,
    /// Whether the stored first integrity sum matches the geometry.
    pub integrity_base_matches: bool,
    pub single_scores: TableSummary,
    pub multi_scores: TableSummary,
}

/// Object totals by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ObjectCounts {
    pub exits: usize,
    pub apples: usize,
    pub killers: usize,
    pub starts: usize,
}

/// Entry count and best time of one score table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub entries: usize,
    pub best: Option<u32>,
}

/// Options applied when re-saving a level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResaveOptions {
    pub clear_top10: bool,
    pub new_link: Option<u32>,
}

/// Reads the raw format tag without decoding the rest of the file.
pub fn read_tag(bytes: &[u8]) -> Option<String> {
    let mut reader = ByteReader::new(bytes);
    reader
        .read_array::<5>()
        .ok()
        .map(|tag| trim_fixed(&tag))
}

/// Decodes `bytes` and summarizes the result.
pub fn inspect_level(bytes: &[u8], limits: &wire::Limits) -> Result<InspectReport> {
    let tag = read_tag(bytes).unwrap_or_default();
    let level = level::decode_level_with_limits(bytes, limits)
        .with_context(|| format!("decode level (tag {tag:?})"))?;
    Ok(summarize(&level, tag, bytes.len()))
}

fn summarize(level: &Level, tag: String, byte_len: usize) -> InspectReport {
    let mut objects = ObjectCounts::default();
    for object in &level.objects {
        match object.kind {
            ObjectKind::Exit => objects.exits += 1,
            ObjectKind::Apple { .. } => objects.apples += 1,
            ObjectKind::Killer => objects.killers += 1,
            ObjectKind::Start => objects.starts += 1,
        }
    }
    let base = level::integrity_base(level);
    let tolerance = INTEGRITY_TOLERANCE * base.abs().max(1.0);
    InspectReport {
        tag,
        byte_len,
        link: level.link,
        name: level.name.clone(),
        lgr: level.lgr.clone(),
        ground: level.ground.clone(),
        sky: level.sky.clone(),
        polygons: level.polygons.len(),
        grass_polygons: level.polygons.iter().filter(|polygon| polygon.grass).count(),
        vertices: level.vertex_count(),
        objects,
        pictures: level.pictures.len(),
        integrity_base_matches: (base - level.integrity[0]).abs() <= tolerance,
        single_scores: summarize_table(&level.top10.single),
        multi_scores: summarize_table(&level.top10.multi),
    }
}

fn summarize_table(entries: &[ScoreEntry]) -> TableSummary {
    TableSummary {
        entries: entries.len(),
        best: entries.iter().map(|entry| entry.time).min(),
    }
}

/// Formats hundredths of a second as `m:ss.hh`.
pub fn format_time(hundredths: u32) -> String {
    let minutes = hundredths / 6000;
    let seconds = (hundredths / 100) % 60;
    let fraction = hundredths % 100;
    format!("{minutes}:{seconds:02}.{fraction:02}")
}

/// Prints an inspect report in a compact text form.
pub fn format_report(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "tag: {} link: 0x{:08x} size: {} bytes",
        report.tag, report.link, report.byte_len
    );
    let _ = writeln!(
        out,
        "name: {:?} lgr: {:?} ground: {:?} sky: {:?}",
        report.name, report.lgr, report.ground, report.sky
    );
    let _ = writeln!(
        out,
        "polygons: {} ({} grass, {} vertices)",
        report.polygons, report.grass_polygons, report.vertices
    );
    let objects = report.objects;
    let _ = writeln!(
        out,
        "objects: {} exit, {} apple, {} killer, {} start",
        objects.exits, objects.apples, objects.killers, objects.starts
    );
    let _ = writeln!(out, "pictures: {}", report.pictures);
    if !report.integrity_base_matches {
        let _ = writeln!(out, "integrity: stored base does not match geometry");
    }
    for (label, table) in [
        ("single", report.single_scores),
        ("multi", report.multi_scores),
    ] {
        match table.best {
            Some(best) => {
                let _ = writeln!(
                    out,
                    "{label} times: {} (best {})",
                    table.entries,
                    format_time(best)
                );
            }
            None => {
                let _ = writeln!(out, "{label} times: none");
            }
        }
    }
    out
}

/// Renders every part of a level as indented text.
pub fn format_level_pretty(level: &Level) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "level {:?} (link 0x{:08x})", level.name, level.link);
    let _ = writeln!(
        out,
        "  lgr {:?} ground {:?} sky {:?}",
        level.lgr, level.ground, level.sky
    );
    let _ = writeln!(out, "  integrity {:?}", level.integrity);

    let _ = writeln!(out, "polygons ({})", level.polygons.len());
    for (i, polygon) in level.polygons.iter().enumerate() {
        let kind = if polygon.grass { "grass" } else { "ground" };
        let _ = writeln!(out, "  [{i}] {kind}, {} vertices", polygon.vertices.len());
        for vertex in &polygon.vertices {
            let _ = writeln!(out, "    ({}, {})", vertex.x, vertex.y);
        }
    }

    let _ = writeln!(out, "objects ({})", level.objects.len());
    for (i, object) in level.objects.iter().enumerate() {
        let position = object.position;
        let kind = match object.kind {
            ObjectKind::Exit => "exit".to_string(),
            ObjectKind::Apple { gravity, animation } => {
                format!("apple gravity={gravity:?} animation={animation}")
            }
            ObjectKind::Killer => "killer".to_string(),
            ObjectKind::Start => "start".to_string(),
        };
        let _ = writeln!(out, "  [{i}] {kind} at ({}, {})", position.x, position.y);
    }

    let _ = writeln!(out, "pictures ({})", level.pictures.len());
    for (i, picture) in level.pictures.iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{i}] name {:?} texture {:?} mask {:?} at ({}, {}) distance {} clip {:?}",
            picture.name,
            picture.texture,
            picture.mask,
            picture.position.x,
            picture.position.y,
            picture.distance,
            picture.clip
        );
    }

    for (label, entries) in [
        ("single", &level.top10.single),
        ("multi", &level.top10.multi),
    ] {
        let _ = writeln!(out, "{label} times ({})", entries.len());
        for entry in entries {
            if entry.name_b.is_empty() {
                let _ = writeln!(out, "  {} {}", format_time(entry.time), entry.name_a);
            } else {
                let _ = writeln!(
                    out,
                    "  {} {} & {}",
                    format_time(entry.time),
                    entry.name_a,
                    entry.name_b
                );
            }
        }
    }
    out
}

/// Builds the default level with an optional name and the given link.
pub fn create_level(name: Option<&str>, link: u32) -> Level {
    let mut level = Level::with_link(link);
    if let Some(name) = name {
        level.name = name.to_owned();
    }
    level
}

/// Decodes a level, applies `options` and encodes it again.
pub fn resave<R: Rng + ?Sized>(
    bytes: &[u8],
    options: ResaveOptions,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let mut level = level::decode_level(bytes).context("decode level")?;
    if options.clear_top10 {
        level.top10.clear();
    }
    if let Some(link) = options.new_link {
        level.link = link;
    }
    level::encode_level_with_rng(&level, rng).context("encode level")
}

#[cfg(test)]
mod tests {
    use super::*;
    use level::Object;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn encode(level: &Level) -> Vec<u8> {
        level::encode_level_with_rng(level, &mut StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn inspect_default_level() {
        let bytes = encode(&Level::with_link(0xBEEF));
        let report = inspect_level(&bytes, &wire::Limits::default()).unwrap();
        assert_eq!(report.tag, "POT14");
        assert_eq!(report.byte_len, bytes.len());
        assert_eq!(report.link, 0xBEEF);
        assert_eq!(report.name, "New Level");
        assert_eq!(report.polygons, 1);
        assert_eq!(report.vertices, 4);
        assert_eq!(
            report.objects,
            ObjectCounts {
                exits: 1,
                starts: 1,
                ..ObjectCounts::default()
            }
        );
        assert!(report.integrity_base_matches);
        assert_eq!(report.single_scores, TableSummary::default());
    }

    #[test]
    fn inspect_reports_best_times() {
        let mut level = Level::default();
        level.objects.push(Object::new(ObjectKind::APPLE, 0.0, 0.0));
        level.top10.single = vec![ScoreEntry::single(900, "a"), ScoreEntry::single(450, "b")];
        let report = inspect_level(&encode(&level), &wire::Limits::default()).unwrap();
        assert_eq!(report.objects.apples, 1);
        assert_eq!(
            report.single_scores,
            TableSummary {
                entries: 2,
                best: Some(450)
            }
        );
        assert!(format_report(&report).contains("single times: 2 (best 0:04.50)"));
    }

    #[test]
    fn inspect_legacy_mentions_tag() {
        let mut bytes = encode(&Level::default());
        bytes[..5].copy_from_slice(b"POT06");
        let err = inspect_level(&bytes, &wire::Limits::default()).unwrap_err();
        assert!(format!("{err:#}").contains("POT06"));
    }

    #[test]
    fn read_tag_short_input() {
        assert_eq!(read_tag(b"POT"), None);
        assert_eq!(read_tag(b"POT14\0\0").as_deref(), Some("POT14"));
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0), "0:00.00");
        assert_eq!(format_time(1234), "0:12.34");
        assert_eq!(format_time(6001), "1:00.01");
    }

    #[test]
    fn pretty_lists_every_section() {
        let text = format_level_pretty(&Level::default());
        assert!(text.contains("polygons (1)"));
        assert!(text.contains("[0] start at (-23, 1)"));
        assert!(text.contains("[1] exit at (23, 1)"));
        assert!(text.contains("pictures (0)"));
        assert!(text.contains("single times (0)"));
    }

    #[test]
    fn create_named_level() {
        let level = create_level(Some("Hill"), 7);
        assert_eq!(level.name, "Hill");
        assert_eq!(level.link, 7);
        assert_eq!(create_level(None, 7).name, "New Level");
    }

    #[test]
    fn resave_clears_scores_and_relinks() {
        let mut level = Level::with_link(1);
        level.top10.multi = vec![ScoreEntry::multi(100, "a", "b")];
        let options = ResaveOptions {
            clear_top10: true,
            new_link: Some(99),
        };
        let bytes = resave(&encode(&level), options, &mut StdRng::seed_from_u64(2)).unwrap();
        let resaved = level::decode_level(&bytes).unwrap();
        assert_eq!(resaved.link, 99);
        assert!(resaved.top10.is_empty());
        assert_eq!(resaved.polygons, level.polygons);
    }

    #[test]
    fn report_serializes() {
        let report = inspect_level(&encode(&Level::default()), &wire::Limits::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tag"], "POT14");
        assert_eq!(json["objects"]["starts"], 1);
    }
}

//! Integrity sums written into the level header.
//!
//! The first sum is a weighted total of all coordinates. The other three are
//! random values inside fixed windows, stored relative to the first. The game
//! reads `integrity[k] + integrity[0]` and checks it falls in window `k`.

use rand::Rng;

use crate::types::{Level, ObjectKind};

/// Multiplier applied to the coordinate total.
pub const INTEGRITY_FACTOR: f64 = 3_247.764_325_643;

/// `(range, offset)` windows for `integrity[1..=3]`.
///
/// Window 2 matches window 1: the alternative window marks a level with
/// topology errors, which this codec never writes.
pub const COMPLEMENT_WINDOWS: [(u32, f64); 3] = [
    (5871, 11_877.0),
    (5871, 11_877.0),
    (6102, 12_112.0),
];

/// Weight each object type adds to the coordinate total.
#[must_use]
pub const fn kind_weight(kind: ObjectKind) -> f64 {
    match kind {
        ObjectKind::Exit => 1.0,
        ObjectKind::Apple { .. } => 2.0,
        ObjectKind::Killer => 3.0,
        ObjectKind::Start => 4.0,
    }
}

/// Returns `integrity[0]` for the level.
#[must_use]
pub fn integrity_base(level: &Level) -> f64 {
    let polygons: f64 = level
        .polygons
        .iter()
        .flat_map(|polygon| &polygon.vertices)
        .map(|vertex| vertex.x + vertex.y)
        .sum();
    let objects: f64 = level
        .objects
        .iter()
        .map(|object| object.position.x + object.position.y + kind_weight(object.kind))
        .sum();
    let pictures: f64 = level
        .pictures
        .iter()
        .map(|picture| picture.position.x + picture.position.y)
        .sum();
    (polygons + objects + pictures) * INTEGRITY_FACTOR
}

/// Derives a fresh integrity tuple, drawing once per complement.
pub fn compute_integrity<R: Rng + ?Sized>(level: &Level, rng: &mut R) -> [f64; 4] {
    let base = integrity_base(level);
    let mut integrity = [base; 4];
    for (sum, (range, offset)) in integrity[1..].iter_mut().zip(COMPLEMENT_WINDOWS) {
        *sum = f64::from(rng.gen_range(0..range)) + offset - base;
    }
    integrity
}

impl Level {
    /// Replaces the stored integrity sums with freshly derived ones.
    pub fn refresh_integrity<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.integrity = compute_integrity(self, rng);
    }
}

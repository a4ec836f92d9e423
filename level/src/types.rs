//! Level data model.

use std::num::NonZeroU32;

pub use wire::FormatVersion;

use crate::error::{LevelError, LevelResult};

/// A 2D position in level units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A chain of vertices forming terrain.
///
/// Grass polygons are decoration and do not collide.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub grass: bool,
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a solid polygon.
    #[must_use]
    pub const fn new(vertices: Vec<Point>) -> Self {
        Self {
            grass: false,
            vertices,
        }
    }

    /// Creates a grass polygon.
    #[must_use]
    pub const fn grass(vertices: Vec<Point>) -> Self {
        Self {
            grass: true,
            vertices,
        }
    }
}

/// Gravity applied when an apple is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gravity {
    #[default]
    Normal,
    Up,
    Down,
    Left,
    Right,
}

impl Gravity {
    /// Parses a gravity code from the file.
    pub const fn parse(code: i32) -> LevelResult<Self> {
        match code {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Up),
            2 => Ok(Self::Down),
            3 => Ok(Self::Left),
            4 => Ok(Self::Right),
            _ => Err(LevelError::InvalidGravityValue { code }),
        }
    }

    /// Returns the file code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Normal => 0,
            Self::Up => 1,
            Self::Down => 2,
            Self::Left => 3,
            Self::Right => 4,
        }
    }
}

/// What an object is. Only apples carry extra data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectKind {
    Exit,
    Apple {
        gravity: Gravity,
        /// 1-based animation frame.
        animation: NonZeroU32,
    },
    Killer,
    Start,
}

impl ObjectKind {
    /// A plain apple: normal gravity, first animation frame.
    pub const APPLE: Self = Self::Apple {
        gravity: Gravity::Normal,
        animation: NonZeroU32::MIN,
    };

    /// Returns the file type code.
    #[must_use]
    pub const fn type_code(self) -> i32 {
        match self {
            Self::Exit => 1,
            Self::Apple { .. } => 2,
            Self::Killer => 3,
            Self::Start => 4,
        }
    }

    /// Returns `true` for apples.
    #[must_use]
    pub const fn is_apple(self) -> bool {
        matches!(self, Self::Apple { .. })
    }
}

/// An object placed in the level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Object {
    pub position: Point,
    pub kind: ObjectKind,
}

impl Object {
    #[must_use]
    pub const fn new(kind: ObjectKind, x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            kind,
        }
    }
}

/// Which layer a picture is clipped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Clip {
    #[default]
    Unclipped,
    Ground,
    Sky,
}

impl Clip {
    /// Parses a clip code from the file.
    pub const fn parse(code: i32) -> LevelResult<Self> {
        match code {
            0 => Ok(Self::Unclipped),
            1 => Ok(Self::Ground),
            2 => Ok(Self::Sky),
            _ => Err(LevelError::InvalidClipValue { code }),
        }
    }

    /// Returns the file code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Unclipped => 0,
            Self::Ground => 1,
            Self::Sky => 2,
        }
    }
}

/// A decorative picture or texture.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Picture {
    pub name: String,
    pub texture: String,
    pub mask: String,
    pub position: Point,
    /// Draw depth; lower values are drawn in front.
    pub distance: i32,
    pub clip: Clip,
}

/// One best-time entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreEntry {
    /// Time in hundredths of a second.
    pub time: u32,
    pub name_a: String,
    /// Second player; empty for single-player entries.
    pub name_b: String,
}

impl ScoreEntry {
    /// Creates a single-player entry.
    #[must_use]
    pub fn single(time: u32, name: &str) -> Self {
        Self {
            time,
            name_a: name.to_owned(),
            name_b: String::new(),
        }
    }

    /// Creates a multiplayer entry.
    #[must_use]
    pub fn multi(time: u32, name_a: &str, name_b: &str) -> Self {
        Self {
            time,
            name_a: name_a.to_owned(),
            name_b: name_b.to_owned(),
        }
    }
}

/// The two best-time tables stored with a level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Top10 {
    pub single: Vec<ScoreEntry>,
    pub multi: Vec<ScoreEntry>,
}

impl Top10 {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.multi.is_empty()
    }

    pub fn clear(&mut self) {
        self.single.clear();
        self.multi.clear();
    }
}

/// A complete level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub format_version: FormatVersion,
    /// Identifier tying replays to this level.
    pub link: u32,
    /// Checksums as read from the file. Recomputed on every encode.
    pub integrity: [f64; 4],
    pub name: String,
    pub lgr: String,
    pub ground: String,
    pub sky: String,
    pub polygons: Vec<Polygon>,
    pub objects: Vec<Object>,
    pub pictures: Vec<Picture>,
    pub top10: Top10,
}

impl Default for Level {
    /// A minimal playable level: one rectangle, a start and an exit.
    fn default() -> Self {
        Self {
            format_version: FormatVersion::Standard,
            link: 0,
            integrity: [0.0; 4],
            name: "New Level".to_owned(),
            lgr: "DEFAULT".to_owned(),
            ground: "ground".to_owned(),
            sky: "sky".to_owned(),
            polygons: vec![Polygon::new(vec![
                Point::new(-24.0, -8.0),
                Point::new(24.0, -8.0),
                Point::new(24.0, 2.0),
                Point::new(-24.0, 2.0),
            ])],
            objects: vec![
                Object::new(ObjectKind::Start, -23.0, 1.0),
                Object::new(ObjectKind::Exit, 23.0, 1.0),
            ],
            pictures: Vec::new(),
            top10: Top10::default(),
        }
    }
}

impl Level {
    /// Creates the default level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default level with the given link.
    #[must_use]
    pub fn with_link(link: u32) -> Self {
        Self {
            link,
            ..Self::default()
        }
    }

    /// Total number of vertices over all polygons.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.polygons.iter().map(|polygon| polygon.vertices.len()).sum()
    }
}

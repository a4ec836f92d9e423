//! Level decoding.

use std::num::NonZeroU32;

use bytestream::ByteReader;
use wire::{
    read_count, read_end_of_data, read_end_of_file, read_format, CountKind, Limits, GROUND_SIZE,
    INTEGRITY_LEN, LGR_SIZE, NAME_SIZE, OBJECT_SIZE, PICTURE_NAME_SIZE, PICTURE_SIZE,
    POLYGON_HEADER_SIZE, SKY_SIZE, TOP10_SIZE, VERTEX_SIZE,
};

use crate::error::{LevelError, LevelResult};
use crate::top10::decode_top10;
use crate::types::{Clip, Gravity, Level, Object, ObjectKind, Picture, Point, Polygon};

/// Decodes a level file with the default [`Limits`].
pub fn decode_level(bytes: &[u8]) -> LevelResult<Level> {
    decode_level_with_limits(bytes, &Limits::default())
}

/// Decodes a level file.
///
/// Reading is a single forward pass. The first error stops decoding and
/// nothing partial is returned.
pub fn decode_level_with_limits(bytes: &[u8], limits: &Limits) -> LevelResult<Level> {
    let mut reader = ByteReader::new(bytes);

    let format_version = read_format(&mut reader)?;
    let link = reader.read_u32()?;
    let mut integrity = [0.0; INTEGRITY_LEN];
    for sum in &mut integrity {
        *sum = reader.read_f64()?;
    }
    let name = reader.read_fixed_str(NAME_SIZE)?;
    let lgr = reader.read_fixed_str(LGR_SIZE)?;
    let ground = reader.read_fixed_str(GROUND_SIZE)?;
    let sky = reader.read_fixed_str(SKY_SIZE)?;

    let polygons = decode_polygons(&mut reader, limits)?;
    let objects = decode_objects(&mut reader, limits)?;
    let pictures = decode_pictures(&mut reader, limits)?;

    read_end_of_data(&mut reader)?;
    let top10 = decode_top10(&reader.read_array::<TOP10_SIZE>()?)?;
    read_end_of_file(&mut reader)?;

    tracing::debug!(
        link,
        polygons = polygons.len(),
        objects = objects.len(),
        pictures = pictures.len(),
        trailing = reader.remaining(),
        "decoded level"
    );

    Ok(Level {
        format_version,
        link,
        integrity,
        name,
        lgr,
        ground,
        sky,
        polygons,
        objects,
        pictures,
        top10,
    })
}

/// Reads a list count and checks it against the limits and the input left.
fn read_list_count(
    reader: &mut ByteReader<'_>,
    kind: CountKind,
    record_size: usize,
    limits: &Limits,
) -> LevelResult<usize> {
    let count = read_count(reader, kind)?;
    limits.check(kind, count)?;
    reader.ensure(count.saturating_mul(record_size))?;
    Ok(count)
}

fn decode_polygons(reader: &mut ByteReader<'_>, limits: &Limits) -> LevelResult<Vec<Polygon>> {
    let count = read_list_count(reader, CountKind::Polygons, POLYGON_HEADER_SIZE, limits)?;
    let mut polygons = Vec::with_capacity(count);
    for _ in 0..count {
        let grass = reader.read_i32()? != 0;
        let vertex_count = read_list_count(reader, CountKind::Vertices, VERTEX_SIZE, limits)?;
        let mut vertices = Vec::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            vertices.push(read_point(reader)?);
        }
        polygons.push(Polygon { grass, vertices });
    }
    Ok(polygons)
}

fn decode_objects(reader: &mut ByteReader<'_>, limits: &Limits) -> LevelResult<Vec<Object>> {
    let count = read_list_count(reader, CountKind::Objects, OBJECT_SIZE, limits)?;
    let mut objects = Vec::with_capacity(count);
    for _ in 0..count {
        let position = read_point(reader)?;
        let type_code = reader.read_i32()?;
        let gravity_code = reader.read_i32()?;
        let animation_code = reader.read_i32()?;
        let kind = match type_code {
            1 => ObjectKind::Exit,
            2 => ObjectKind::Apple {
                gravity: Gravity::parse(gravity_code)?,
                animation: animation_frame(animation_code)?,
            },
            3 => ObjectKind::Killer,
            4 => ObjectKind::Start,
            code => return Err(LevelError::InvalidObjectType { code }),
        };
        objects.push(Object { position, kind });
    }
    Ok(objects)
}

fn decode_pictures(reader: &mut ByteReader<'_>, limits: &Limits) -> LevelResult<Vec<Picture>> {
    let count = read_list_count(reader, CountKind::Pictures, PICTURE_SIZE, limits)?;
    let mut pictures = Vec::with_capacity(count);
    for _ in 0..count {
        let name = reader.read_fixed_str(PICTURE_NAME_SIZE)?;
        let texture = reader.read_fixed_str(PICTURE_NAME_SIZE)?;
        let mask = reader.read_fixed_str(PICTURE_NAME_SIZE)?;
        let position = read_point(reader)?;
        let distance = reader.read_i32()?;
        let clip = Clip::parse(reader.read_i32()?)?;
        pictures.push(Picture {
            name,
            texture,
            mask,
            position,
            distance,
            clip,
        });
    }
    Ok(pictures)
}

fn read_point(reader: &mut ByteReader<'_>) -> LevelResult<Point> {
    let x = reader.read_f64()?;
    let y = reader.read_f64()?;
    Ok(Point { x, y })
}

/// Stored animation codes are 0-based.
fn animation_frame(code: i32) -> LevelResult<NonZeroU32> {
    u32::try_from(code)
        .ok()
        .and_then(|code| NonZeroU32::new(code + 1))
        .ok_or(LevelError::InvalidAnimationValue { code })
}

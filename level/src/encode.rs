//! Level encoding.

use bytestream::ByteWriter;
use rand::Rng;
use wire::{
    write_count, write_end_of_data, write_end_of_file, write_format, CountKind, FormatVersion,
    COUNT_SIZE, GROUND_SIZE, HEADER_SIZE, LGR_SIZE, MARKER_SIZE, NAME_SIZE, OBJECT_SIZE,
    PICTURE_NAME_SIZE, PICTURE_SIZE, POLYGON_HEADER_SIZE, SKY_SIZE, TOP10_SIZE, VERTEX_SIZE,
};

use crate::error::{LevelError, LevelResult};
use crate::integrity::compute_integrity;
use crate::top10::encode_top10;
use crate::types::{Level, Object, ObjectKind, Picture, Point, Polygon};

/// Returns the exact size of the encoded level in bytes.
#[must_use]
pub fn encoded_len(level: &Level) -> usize {
    let polygons: usize = level
        .polygons
        .iter()
        .map(|polygon| POLYGON_HEADER_SIZE + VERTEX_SIZE * polygon.vertices.len())
        .sum();
    HEADER_SIZE
        + COUNT_SIZE
        + polygons
        + COUNT_SIZE
        + OBJECT_SIZE * level.objects.len()
        + COUNT_SIZE
        + PICTURE_SIZE * level.pictures.len()
        + MARKER_SIZE
        + TOP10_SIZE
        + MARKER_SIZE
}

/// Encodes a level, drawing integrity sums from the thread-local generator.
pub fn encode_level(level: &Level) -> LevelResult<Vec<u8>> {
    encode_level_with_rng(level, &mut rand::thread_rng())
}

/// Encodes a level with an injected random generator.
///
/// The integrity sums stored on `level` are ignored; fresh ones are derived
/// and written. Score tables are sorted by time and cut to ten entries.
pub fn encode_level_with_rng<R: Rng + ?Sized>(
    level: &Level,
    rng: &mut R,
) -> LevelResult<Vec<u8>> {
    if level.format_version != FormatVersion::Standard {
        return Err(LevelError::UnsupportedFormatForWrite);
    }
    validate(level)?;

    let integrity = compute_integrity(level, rng);
    let len = encoded_len(level);
    let mut writer = ByteWriter::with_capacity(len);

    write_format(&mut writer);
    writer.write_u32(level.link);
    for sum in integrity {
        writer.write_f64(sum);
    }
    writer.write_fixed_str(&level.name, NAME_SIZE);
    writer.write_fixed_str(&level.lgr, LGR_SIZE);
    writer.write_fixed_str(&level.ground, GROUND_SIZE);
    writer.write_fixed_str(&level.sky, SKY_SIZE);

    write_count(&mut writer, CountKind::Polygons, level.polygons.len());
    for polygon in &level.polygons {
        encode_polygon(polygon, &mut writer);
    }
    write_count(&mut writer, CountKind::Objects, level.objects.len());
    for object in &level.objects {
        encode_object(object, &mut writer)?;
    }
    write_count(&mut writer, CountKind::Pictures, level.pictures.len());
    for picture in &level.pictures {
        encode_picture(picture, &mut writer);
    }

    write_end_of_data(&mut writer);
    writer.write_bytes(&encode_top10(&level.top10));
    write_end_of_file(&mut writer);

    let bytes = writer.finish();
    debug_assert_eq!(bytes.len(), len);
    tracing::debug!(link = level.link, bytes = bytes.len(), "encoded level");
    Ok(bytes)
}

fn validate(level: &Level) -> LevelResult<()> {
    for polygon in &level.polygons {
        let length = polygon.vertices.len();
        if i32::try_from(length).is_err() {
            return Err(LevelError::LengthOverflow { length });
        }
    }
    Ok(())
}

fn encode_polygon(polygon: &Polygon, writer: &mut ByteWriter) {
    writer.write_i32(i32::from(polygon.grass));
    write_count(writer, CountKind::Vertices, polygon.vertices.len());
    for vertex in &polygon.vertices {
        write_point(*vertex, writer);
    }
}

fn encode_object(object: &Object, writer: &mut ByteWriter) -> LevelResult<()> {
    let (gravity, animation) = match object.kind {
        ObjectKind::Apple { gravity, animation } => {
            let frame = animation.get();
            let code = i32::try_from(frame - 1)
                .map_err(|_| LevelError::AnimationOutOfRange { frame })?;
            (gravity.code(), code)
        }
        ObjectKind::Exit | ObjectKind::Killer | ObjectKind::Start => (0, 0),
    };
    write_point(object.position, writer);
    writer.write_i32(object.kind.type_code());
    writer.write_i32(gravity);
    writer.write_i32(animation);
    Ok(())
}

fn encode_picture(picture: &Picture, writer: &mut ByteWriter) {
    writer.write_fixed_str(&picture.name, PICTURE_NAME_SIZE);
    writer.write_fixed_str(&picture.texture, PICTURE_NAME_SIZE);
    writer.write_fixed_str(&picture.mask, PICTURE_NAME_SIZE);
    write_point(picture.position, writer);
    writer.write_i32(picture.distance);
    writer.write_i32(picture.clip.code());
}

fn write_point(point: Point, writer: &mut ByteWriter) {
    writer.write_f64(point.x);
    writer.write_f64(point.y);
}

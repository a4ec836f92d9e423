use bytestream::{strings, ByteError, ByteReader, ByteWriter};

#[test]
fn writer_reader_roundtrip_record() {
    let mut writer = ByteWriter::with_capacity(28);
    writer.write_f64(1.5);
    writer.write_f64(-3.0);
    writer.write_i32(2);
    writer.write_i32(0);
    writer.write_i32(4);
    let bytes = writer.finish();
    assert_eq!(bytes.len(), 28);

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_f64().unwrap().to_bits(), 1.5f64.to_bits());
    assert_eq!(reader.read_f64().unwrap().to_bits(), (-3.0f64).to_bits());
    assert_eq!(reader.read_i32().unwrap(), 2);
    assert_eq!(reader.read_i32().unwrap(), 0);
    assert_eq!(reader.read_i32().unwrap(), 4);
    assert!(reader.is_empty());
}

#[test]
fn truncated_record_reports_shortfall() {
    let mut writer = ByteWriter::new();
    writer.write_f64(1.0);
    let bytes = writer.finish();

    let mut reader = ByteReader::new(&bytes[..5]);
    assert_eq!(
        reader.read_f64().unwrap_err(),
        ByteError::UnexpectedEndOfData {
            requested: 8,
            available: 5
        }
    );
}

#[test]
fn fixed_strings_are_exact_width() {
    let mut writer = ByteWriter::new();
    writer.write_fixed_str("a very long picture name", 10);
    writer.write_fixed_str("qgrass", 10);
    let bytes = writer.finish();
    assert_eq!(bytes.len(), 20);
    assert_eq!(&bytes[..10], &strings::to_fixed("a very lon", 10)[..]);

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_fixed_str(10).unwrap(), "a very lon");
    assert_eq!(reader.read_fixed_str(10).unwrap(), "qgrass");
}

#![cfg(feature = "rte")]

use genesys_nav::Waypoint;
use genesys_nav::framing::IntegrityError;
use genesys_nav::rte::{self, DecodeError};

const HEADER_SIZE: usize = 56;
const RECORD_SIZE: usize = 72;
const IDENT_OFFSET: usize = 8;
const CHECKSUM_OFFSET: usize = 11744;

fn ident_slot(data: &[u8], record: usize) -> &[u8] {
    let offset = HEADER_SIZE + record * RECORD_SIZE + IDENT_OFFSET;
    &data[offset..offset + 6]
}

fn long_route(count: usize) -> Vec<Waypoint> {
    (0..count)
        .map(|i| {
            Waypoint::new(
                &format!("W{i:03}"),
                &format!("POINT NUMBER {i}"),
                30.0 + i as f64 * 0.123_456_789,
                -120.0 + i as f64 * 0.987_654_321,
            )
        })
        .collect()
}

#[test]
fn three_waypoint_route_layout() {
    let route = vec![
        Waypoint::new("KJFK", "", 40.6399, -73.7787),
        Waypoint::new("MERIT", "", 41.3819, -73.1375),
        Waypoint::new("KBOS", "", 42.3629, -71.0064),
    ];
    let data = rte::encode_file(&route).unwrap();

    assert_eq!(data.len(), rte::FILE_SIZE);
    assert_eq!(ident_slot(&data, 0), b"KJFK \0");
    assert_eq!(ident_slot(&data, 1), b"KJFK \0");
    assert_eq!(ident_slot(&data, 2), b"MERIT\0");
    assert_eq!(ident_slot(&data, 3), b"KBOS \0");
    assert_eq!(rte::route_name(&data).unwrap(), "KJFK");
}

#[test]
fn maximum_route_round_trips() {
    let route = long_route(rte::MAX_LEGS);
    let data = rte::encode_file(&route).unwrap();
    let decoded = rte::decode_file_checked(&data).unwrap();

    assert_eq!(decoded.len(), route.len());
    for (original, decoded) in route.iter().zip(&decoded) {
        assert_eq!(decoded.ident, original.ident);
        assert_eq!(decoded.description, original.description);
        assert_eq!(decoded.latitude.to_bits(), original.latitude.to_bits());
        assert_eq!(decoded.longitude.to_bits(), original.longitude.to_bits());
    }
}

#[test]
fn special_float_values_survive() {
    let route = vec![
        Waypoint::new("A", "", -0.0, f64::MIN_POSITIVE),
        Waypoint::new("B", "", 89.999_999_999_999, -179.999_999_999_999),
    ];
    let decoded = rte::decode_file(&rte::encode_file(&route).unwrap()).unwrap();
    assert_eq!(decoded[0].latitude.to_bits(), (-0.0f64).to_bits());
    assert_eq!(decoded[0].longitude, f64::MIN_POSITIVE);
    assert_eq!(decoded[1].latitude, 89.999_999_999_999);
}

#[test]
fn corrupted_file_is_rejected_only_when_checked() {
    let mut data = rte::encode_file(&long_route(4)).unwrap();
    data[100] ^= 0xFF;

    assert!(rte::decode_file(&data).is_ok());
    assert!(matches!(
        rte::decode_file_checked(&data),
        Err(DecodeError::Integrity(IntegrityError::Mismatch { .. }))
    ));
}

#[test]
fn checksum_covers_everything_before_trailer() {
    let data = rte::encode_file(&long_route(2)).unwrap();
    let stored = u32::from_le_bytes(data[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 4].try_into().unwrap());
    let reference = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
    assert_eq!(stored, reference.checksum(&data[..CHECKSUM_OFFSET]));
    assert_eq!(&data[CHECKSUM_OFFSET + 4..], &[0u8; 4]);
}

#[test]
fn filename_of_encoded_route() {
    let route = vec![
        Waypoint::new("KJFK", "", 0.0, 0.0),
        Waypoint::new("KLAX", "", 0.0, 0.0),
    ];
    assert_eq!(rte::route_filename(&route), "JFK-LAX0.RTE");
    assert_eq!(rte::route_filename(&route[..1]), rte::DEFAULT_FILENAME);
}

use super::consts::*;
use crate::Waypoint;
use crate::crc::IEEE;
use crate::framing::{IntegrityError, read_count, read_f64};
use crate::text::decode_text;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unexpected end of file ({len} bytes)")]
    UnexpectedEof { len: usize },
    #[error("record count {count} exceeds file of {len} bytes")]
    OutOfBounds { count: u32, len: usize },
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// Decodes a route file into its waypoints.
///
/// The checksum trailer is not looked at, see [decode_file_checked].
pub fn decode_file(data: &[u8]) -> Result<Vec<Waypoint>, DecodeError> {
    let count = read_count(data).ok_or(DecodeError::UnexpectedEof { len: data.len() })?;
    let out_of_bounds = || DecodeError::OutOfBounds {
        count,
        len: data.len(),
    };

    match required_len(count as usize) {
        Some(required) if required <= data.len() => {}
        _ => return Err(out_of_bounds()),
    }

    debug!(count, "decoding route file");

    (0..count as usize)
        .map(|i| {
            let offset = LAYOUT.record_offset(i);
            let leg_offset = LAYOUT.leg_record_offset(i, IDENT_SHIFT);
            let name_offset = NAME_BLOCK_START + i * NAME_SIZE;

            let latitude = read_f64(data, offset + LATITUDE_OFFSET).ok_or_else(out_of_bounds)?;
            let longitude = read_f64(data, offset + LONGITUDE_OFFSET).ok_or_else(out_of_bounds)?;

            let mut ident = decode_text(data, leg_offset + IDENT_OFFSET, IDENT_SIZE);
            if ident.is_empty() {
                ident = placeholder_ident(i);
                trace!(index = i, %ident, "empty identifier slot");
            }

            let description = decode_text(data, name_offset, NAME_SIZE);

            Ok(Waypoint {
                ident,
                description,
                latitude,
                longitude,
            })
        })
        .collect()
}

/// Like [decode_file], but fails with [DecodeError::Integrity] if the
/// checksum trailer does not match the contents.
pub fn decode_file_checked(data: &[u8]) -> Result<Vec<Waypoint>, DecodeError> {
    verify_checksum(data)?;
    decode_file(data)
}

pub fn verify_checksum(data: &[u8]) -> Result<(), IntegrityError> {
    LAYOUT.verify(&IEEE, data)
}

/// Returns the identifier stored in record 0, which the IDU shows on its
/// route selection screen.
pub fn route_name(data: &[u8]) -> Result<String, DecodeError> {
    let end = LAYOUT.record_offset(0) + IDENT_OFFSET + IDENT_SIZE;
    if data.len() < end {
        return Err(DecodeError::UnexpectedEof { len: data.len() });
    }

    Ok(decode_text(data, LAYOUT.record_offset(0) + IDENT_OFFSET, IDENT_SIZE))
}

pub(crate) fn placeholder_ident(index: usize) -> String {
    format!("WP{}", index + 1)
}

/// Smallest buffer length that holds `count` waypoints including their
/// displaced identifiers and name slots.
fn required_len(count: usize) -> Option<usize> {
    if count == 0 {
        return Some(crate::framing::COUNT_OFFSET + 4);
    }

    let last = count - 1;
    let coordinates = LAYOUT
        .header_size
        .checked_add(last.checked_mul(RECORD_SIZE)?)?
        .checked_add(LONGITUDE_OFFSET + 8)?;
    let ident = LAYOUT
        .header_size
        .checked_add((last + IDENT_SHIFT).checked_mul(RECORD_SIZE)?)?
        .checked_add(IDENT_OFFSET + IDENT_SIZE)?;
    let names = NAME_BLOCK_START.checked_add(count.checked_mul(NAME_SIZE)?)?;

    Some(coordinates.max(ident).max(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::{write_f64, write_u32};
    use insta::assert_debug_snapshot;

    fn empty_file(count: u32) -> Vec<u8> {
        LAYOUT.allocate(count)
    }

    fn put_ident(data: &mut [u8], record: usize, ident: &[u8]) {
        let offset = LAYOUT.record_offset(record) + IDENT_OFFSET;
        data[offset..offset + ident.len()].copy_from_slice(ident);
    }

    #[test]
    fn decoding_fails_for_empty_file() {
        assert_debug_snapshot!(decode_file(b"").unwrap_err(), @r###"
        UnexpectedEof {
            len: 0,
        }
        "###);
    }

    #[test]
    fn decoding_fails_for_count_beyond_buffer() {
        let mut data = empty_file(0);
        write_u32(&mut data, 0, 500);
        assert_debug_snapshot!(decode_file(&data).unwrap_err(), @r###"
        OutOfBounds {
            count: 500,
            len: 11752,
        }
        "###);
    }

    #[test]
    fn decoding_fails_for_huge_count() {
        let mut data = empty_file(0);
        write_u32(&mut data, 0, u32::MAX);
        assert!(matches!(
            decode_file(&data),
            Err(DecodeError::OutOfBounds { count: u32::MAX, .. })
        ));
    }

    #[test]
    fn decoding_fails_for_truncated_name_block() {
        let mut data = empty_file(2);
        data.truncate(NAME_BLOCK_START + NAME_SIZE);
        assert!(matches!(
            decode_file(&data),
            Err(DecodeError::OutOfBounds { count: 2, .. })
        ));
    }

    #[test]
    fn decoding_works_for_empty_route() {
        assert!(decode_file(&empty_file(0)).unwrap().is_empty());
    }

    #[test]
    fn decoding_reads_identifier_from_next_record() {
        let mut data = empty_file(2);
        put_ident(&mut data, 0, b"REC0\0");
        put_ident(&mut data, 1, b"FIRST");
        put_ident(&mut data, 2, b"SECND");
        write_f64(&mut data, LAYOUT.record_offset(0) + LATITUDE_OFFSET, 47.5);
        write_f64(&mut data, LAYOUT.record_offset(0) + LONGITUDE_OFFSET, -122.25);
        data[NAME_BLOCK_START + NAME_SIZE..NAME_BLOCK_START + NAME_SIZE + 4]
            .copy_from_slice(b"HOME");

        let waypoints = decode_file(&data).unwrap();
        assert_debug_snapshot!(waypoints, @r###"
        [
            Waypoint {
                ident: "FIRST",
                description: "",
                latitude: 47.5,
                longitude: -122.25,
            },
            Waypoint {
                ident: "SECND",
                description: "HOME",
                latitude: 0.0,
                longitude: 0.0,
            },
        ]
        "###);
    }

    #[test]
    fn decoding_synthesizes_missing_identifiers() {
        let data = empty_file(3);
        let idents: Vec<String> = decode_file(&data)
            .unwrap()
            .into_iter()
            .map(|wp| wp.ident)
            .collect();
        assert_eq!(idents, ["WP1", "WP2", "WP3"]);
    }

    #[test]
    fn decoding_ignores_checksum() {
        let mut data = empty_file(2);
        write_u32(&mut data, CHECKSUM_OFFSET, 0xDEAD_BEEF);
        assert_eq!(decode_file(&data).unwrap().len(), 2);
    }

    #[test]
    fn checked_decoding_reports_mismatch() {
        let data = empty_file(2);
        assert_debug_snapshot!(decode_file_checked(&data).unwrap_err(), @r###"
        Integrity(
            Mismatch {
                stored: 0,
                computed: 609899789,
            },
        )
        "###);
    }

    #[test]
    fn route_name_reads_record_zero() {
        let mut data = empty_file(2);
        put_ident(&mut data, 0, b"KSEA\0");
        assert_eq!(route_name(&data).unwrap(), "KSEA");
        assert!(route_name(&data[..20]).is_err());
    }
}

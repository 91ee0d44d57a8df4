use super::consts::*;
use crate::UserWaypoint;
use crate::crc::IEEE;
use crate::framing::{IntegrityError, read_count, read_f64, read_u16, read_u32};
use crate::text::decode_text;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unexpected end of file ({len} bytes)")]
    UnexpectedEof { len: usize },
    #[error("record count {count} exceeds file of {len} bytes")]
    OutOfBounds { count: u32, len: usize },
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// Decodes a user waypoint database.
///
/// Identity and position come from a waypoint's own record, elevation and
/// bearing from the record after it. The checksum trailer is not looked at,
/// see [decode_file_checked].
pub fn decode_file(data: &[u8]) -> Result<Vec<UserWaypoint>, DecodeError> {
    let count = read_count(data).ok_or(DecodeError::UnexpectedEof { len: data.len() })?;
    let out_of_bounds = || DecodeError::OutOfBounds {
        count,
        len: data.len(),
    };

    if count == 0 {
        return Ok(Vec::new());
    }

    match required_len(count as usize) {
        Some(required) if required <= data.len() => {}
        _ => return Err(out_of_bounds()),
    }

    debug!(count, "decoding waypoint database");

    (0..count as usize)
        .map(|i| {
            let offset = LAYOUT.record_offset(i);
            let leg_offset = LAYOUT.leg_record_offset(i, LEG_DATA_SHIFT);

            let elevation =
                read_u32(data, leg_offset + ELEVATION_OFFSET).ok_or_else(out_of_bounds)?;
            let bearing = read_u16(data, leg_offset + BEARING_OFFSET).ok_or_else(out_of_bounds)?;

            Ok(UserWaypoint {
                ident: decode_text(data, offset + IDENT_OFFSET, IDENT_SIZE),
                name: decode_text(data, offset + NAME_OFFSET, NAME_SIZE),
                latitude: read_f64(data, offset + LATITUDE_OFFSET).ok_or_else(out_of_bounds)?,
                longitude: read_f64(data, offset + LONGITUDE_OFFSET).ok_or_else(out_of_bounds)?,
                elevation: elevation as i32 as f64,
                bearing,
            })
        })
        .collect()
}

/// Like [decode_file], but fails with [DecodeError::Integrity] if the
/// checksum trailer does not match the contents.
pub fn decode_file_checked(data: &[u8]) -> Result<Vec<UserWaypoint>, DecodeError> {
    verify_checksum(data)?;
    decode_file(data)
}

pub fn verify_checksum(data: &[u8]) -> Result<(), IntegrityError> {
    LAYOUT.verify(&IEEE, data)
}

/// The record holding the last waypoint's leg data must reach at least up to
/// the bearing field. `count` is never zero here.
fn required_len(count: usize) -> Option<usize> {
    let last_leg = (count - 1).checked_add(LEG_DATA_SHIFT)?;
    LAYOUT
        .header_size
        .checked_add(last_leg.checked_mul(RECORD_SIZE)?)?
        .checked_add(BEARING_OFFSET + 2)
}

use super::consts::*;
use super::decode::placeholder_ident;
use crate::Waypoint;
use crate::crc::IEEE;
use crate::framing::{write_f64, write_u32};
use crate::text::encode_text;
use std::borrow::Cow;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("a route needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),
    #[error("a route holds at most 101 waypoints, got {0}")]
    TooManyWaypoints(usize),
}

/// Encodes a route into a complete, checksummed file.
pub fn encode_file(waypoints: &[Waypoint]) -> Result<Vec<u8>, EncodeError> {
    let count = waypoints.len();
    if count < MIN_WAYPOINTS {
        return Err(EncodeError::TooFewWaypoints(count));
    }
    if count > MAX_LEGS {
        return Err(EncodeError::TooManyWaypoints(count));
    }

    debug!(count, "encoding route file");

    let mut buf = LAYOUT.allocate(count as u32);

    for (i, waypoint) in waypoints.iter().enumerate() {
        write_record(&mut buf, i, waypoint);
    }

    LAYOUT.seal(&IEEE, &mut buf);
    Ok(buf)
}

fn write_record(buf: &mut [u8], index: usize, waypoint: &Waypoint) {
    let offset = LAYOUT.record_offset(index);
    write_f64(buf, offset + LATITUDE_OFFSET, waypoint.latitude);
    write_f64(buf, offset + LONGITUDE_OFFSET, waypoint.longitude);
    write_u32(buf, offset + TYPE_OFFSET, TYPE_STANDARD);

    let ident = ident_or_placeholder(index, waypoint);

    if index < MAX_LEGS {
        write_ident(buf, LAYOUT.leg_record_offset(index, IDENT_SHIFT), &ident);
    }

    // The route selection screen reads record 0 directly instead of
    // following the legs.
    if index == 0 {
        write_ident(buf, offset, &ident);
    }

    let name_offset = NAME_BLOCK_START + index * NAME_SIZE;
    encode_text(buf, name_offset, &waypoint.description, NAME_SIZE, true);
}

fn write_ident(buf: &mut [u8], record_offset: usize, ident: &str) {
    encode_text(buf, record_offset + IDENT_OFFSET, ident, IDENT_SIZE, true);
    encode_text(buf, record_offset + REGION_OFFSET, REGION_CODE, REGION_SIZE, false);
}

fn ident_or_placeholder(index: usize, waypoint: &Waypoint) -> Cow<'_, str> {
    if waypoint.ident.trim().is_empty() {
        Cow::Owned(placeholder_ident(index))
    } else {
        Cow::Borrowed(waypoint.ident.as_str())
    }
}

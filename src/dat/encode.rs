use super::consts::*;
use super::sort::is_sorted;
use crate::UserWaypoint;
use crate::crc::IEEE;
use crate::framing::{write_f64, write_u16, write_u32};
use crate::text::write_ascii;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("the waypoint database needs at least one waypoint")]
    Empty,
    #[error("the waypoint database holds at most 998 waypoints, got {0}")]
    TooManyWaypoints(usize),
}

/// Encodes a user waypoint database.
///
/// The waypoints must already be sorted by identifier (see
/// [sort_waypoints](super::sort_waypoints)); they are written in the order
/// given.
pub fn encode_file(waypoints: &[UserWaypoint]) -> Result<Vec<u8>, EncodeError> {
    let count = waypoints.len();
    if count == 0 {
        return Err(EncodeError::Empty);
    }
    if count > MAX_WAYPOINTS {
        return Err(EncodeError::TooManyWaypoints(count));
    }

    if !is_sorted(waypoints) {
        warn!(count, "waypoints are not sorted by identifier");
    }

    debug!(count, "encoding waypoint database");

    let mut buf = LAYOUT.allocate(count as u32);
    buf[4..HEADER_SIZE].copy_from_slice(&HEADER_TEMPLATE);

    for (i, waypoint) in waypoints.iter().enumerate() {
        write_record(&mut buf, i, waypoint);
        write_leg_data(&mut buf, LAYOUT.leg_record_offset(i, LEG_DATA_SHIFT), waypoint);
    }

    // The trailing record only exists to carry the last waypoint's leg data.
    buf[LAYOUT.record_offset(count) + MARKER_OFFSET] = MARKER;

    LAYOUT.seal(&IEEE, &mut buf);
    Ok(buf)
}

fn write_record(buf: &mut [u8], index: usize, waypoint: &UserWaypoint) {
    let offset = LAYOUT.record_offset(index);
    write_ascii(buf, offset + IDENT_OFFSET, &waypoint.ident, IDENT_SIZE);
    write_ascii(buf, offset + NAME_OFFSET, &waypoint.name, NAME_SIZE);
    buf[offset + MARKER_OFFSET] = MARKER;
    write_f64(buf, offset + LATITUDE_OFFSET, waypoint.latitude);
    write_f64(buf, offset + LONGITUDE_OFFSET, waypoint.longitude);
}

fn write_leg_data(buf: &mut [u8], record_offset: usize, waypoint: &UserWaypoint) {
    write_u32(
        buf,
        record_offset + ELEVATION_OFFSET,
        round_elevation(waypoint.elevation),
    );
    write_u16(buf, record_offset + BEARING_OFFSET, waypoint.bearing);
}

/// Rounds to the nearest multiple of 10, halves up, then wraps modulo 2^32.
/// Negative elevations therefore end up in two's complement. NaN and
/// infinities are stored as 0.
fn round_elevation(elevation: f64) -> u32 {
    const MODULUS: f64 = 4_294_967_296.0;
    let rounded = (elevation / 10.0 + 0.5).floor() * 10.0;
    if !rounded.is_finite() {
        return 0;
    }
    rounded.rem_euclid(MODULUS) as u32
}

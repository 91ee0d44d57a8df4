//! Decoder/Encoder for the IDU user waypoint database (`user.dat`).
//!
//! The file is always 88016 bytes: a 72 byte header, 88 byte records and a
//! CRC-32 in the last four bytes. A waypoint's elevation and bearing are
//! stored in the record after its own, so the database ends with one extra
//! record carrying the leg data of the last waypoint.
//!
//! Records must be sorted by identifier. [encode_file] does not sort on its
//! own; use [sort_waypoints] first.

mod consts;
mod decode;
mod encode;
mod sort;

pub use consts::{FILE_SIZE, MAX_WAYPOINTS};
pub use decode::*;
pub use encode::*;
pub use sort::*;

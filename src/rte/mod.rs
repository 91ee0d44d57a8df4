//! Decoder/Encoder for the IDU flight plan (`.RTE`) file format.
//!
//! A route file is always 11752 bytes: a 56 byte header, an array of 72 byte
//! records, a block of 31 byte description slots starting at byte 7412 and a
//! CRC-32 at byte 11744. Coordinates are stored in a waypoint's own record,
//! its identifier in the record of the following leg.

mod consts;
mod decode;
mod encode;
mod filename;

pub use consts::{DEFAULT_FILENAME, FILE_SIZE, MAX_LEGS};
pub use decode::*;
pub use encode::*;
pub use filename::*;

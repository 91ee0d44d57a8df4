use crate::framing::{CHECKSUM_SIZE, Layout};

pub const FILE_SIZE: usize = 88016;
pub const HEADER_SIZE: usize = 72;
pub const RECORD_SIZE: usize = 88;
pub const CHECKSUM_OFFSET: usize = FILE_SIZE - CHECKSUM_SIZE;

pub const LAYOUT: Layout = Layout {
    file_size: FILE_SIZE,
    header_size: HEADER_SIZE,
    record_size: RECORD_SIZE,
    checksum_offset: CHECKSUM_OFFSET,
};

/// Header bytes following the record count, identical in every file.
pub const HEADER_TEMPLATE: [u8; HEADER_SIZE - 4] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x47, 0x28, 0xa3, 0xb7, 0x65, 0x55, 0x42, 0x40,
    0x27, 0xea, 0xdf, 0x08, 0x65, 0x78, 0x53, 0xc0,
];

pub const ELEVATION_OFFSET: usize = 0;
pub const BEARING_OFFSET: usize = 16;
pub const IDENT_OFFSET: usize = 24;
pub const IDENT_SIZE: usize = 5;
pub const NAME_OFFSET: usize = 33;
pub const NAME_SIZE: usize = 12;
pub const MARKER_OFFSET: usize = 64;
pub const LATITUDE_OFFSET: usize = 72;
pub const LONGITUDE_OFFSET: usize = 80;

pub const MARKER: u8 = 0x0A;

/// Elevation and bearing of a waypoint are stored in the following record.
pub const LEG_DATA_SHIFT: usize = 1;

/// Waypoints plus the trailing record must end before the checksum.
pub const MAX_WAYPOINTS: usize = (CHECKSUM_OFFSET - HEADER_SIZE) / RECORD_SIZE - LEG_DATA_SHIFT;

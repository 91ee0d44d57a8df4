use crate::framing::Layout;

pub const FILE_SIZE: usize = 11752;
pub const HEADER_SIZE: usize = 56;
pub const RECORD_SIZE: usize = 72;
pub const CHECKSUM_OFFSET: usize = 11744;

pub const LAYOUT: Layout = Layout {
    file_size: FILE_SIZE,
    header_size: HEADER_SIZE,
    record_size: RECORD_SIZE,
    checksum_offset: CHECKSUM_OFFSET,
};

pub const IDENT_OFFSET: usize = 8;
pub const IDENT_SIZE: usize = 6;
pub const REGION_OFFSET: usize = 14;
pub const REGION_SIZE: usize = 2;
pub const LATITUDE_OFFSET: usize = 24;
pub const LONGITUDE_OFFSET: usize = 32;
pub const TYPE_OFFSET: usize = 40;

/// A waypoint's identifier lives in the record of the leg that ends at it.
pub const IDENT_SHIFT: usize = 1;

pub const NAME_BLOCK_START: usize = 7412;
pub const NAME_SIZE: usize = 31;

/// `5.0f32`, the type tag of a plain user waypoint.
pub const TYPE_STANDARD: u32 = 0x40A0_0000;
pub const REGION_CODE: &str = "K7";

/// Number of legs the IDU can address. Also the largest route we write.
pub const MAX_LEGS: usize = 101;
pub const MIN_WAYPOINTS: usize = 2;

pub const DEFAULT_FILENAME: &str = "ROUTE0.RTE";
pub const EXTENSION: &str = "RTE";

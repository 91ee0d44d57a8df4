//! Shared framing of the fixed-size container formats.
//!
//! Every container is a header starting with a little-endian `u32` record
//! count, an array of fixed-stride records and a CRC-32 trailer covering all
//! bytes in front of it. Only the constants differ between formats.

use crate::crc::Crc32Table;
use thiserror::Error;

pub const COUNT_OFFSET: usize = 0;
pub const CHECKSUM_SIZE: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("file is too short for a checksum trailer ({len} < {required} bytes)")]
    Truncated { len: usize, required: usize },
    #[error("checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    Mismatch { stored: u32, computed: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub file_size: usize,
    pub header_size: usize,
    pub record_size: usize,
    pub checksum_offset: usize,
}

impl Layout {
    /// Byte offset of record `index`.
    pub const fn record_offset(&self, index: usize) -> usize {
        self.header_size + index * self.record_size
    }

    /// Byte offset of the record holding a field that is displaced `shift`
    /// records ahead of the waypoint at `index`.
    pub const fn leg_record_offset(&self, index: usize, shift: usize) -> usize {
        self.record_offset(index + shift)
    }

    /// Allocates an empty container with the header count set.
    pub fn allocate(&self, count: u32) -> Vec<u8> {
        let mut buf = vec![0u8; self.file_size];
        write_u32(&mut buf, COUNT_OFFSET, count);
        buf
    }

    /// Computes the checksum over all bytes in front of the trailer.
    pub fn checksum(&self, table: &Crc32Table, data: &[u8]) -> u32 {
        table.checksum(&data[..self.checksum_offset])
    }

    /// Writes the checksum trailer.
    pub fn seal(&self, table: &Crc32Table, buf: &mut [u8]) {
        let crc = self.checksum(table, buf);
        write_u32(buf, self.checksum_offset, crc);
    }

    pub fn stored_checksum(&self, data: &[u8]) -> Option<u32> {
        read_u32(data, self.checksum_offset)
    }

    pub fn verify(&self, table: &Crc32Table, data: &[u8]) -> Result<(), IntegrityError> {
        let stored = self
            .stored_checksum(data)
            .ok_or(IntegrityError::Truncated {
                len: data.len(),
                required: self.checksum_offset + CHECKSUM_SIZE,
            })?;

        let computed = self.checksum(table, data);
        if stored != computed {
            return Err(IntegrityError::Mismatch { stored, computed });
        }

        Ok(())
    }
}

/// Reads the record count from the header.
pub fn read_count(data: &[u8]) -> Option<u32> {
    read_u32(data, COUNT_OFFSET)
}

fn read_array<const N: usize>(data: &[u8], offset: usize) -> Option<[u8; N]> {
    let bytes = data.get(offset..offset.checked_add(N)?)?;
    let mut array = [0u8; N];
    array.copy_from_slice(bytes);
    Some(array)
}

pub fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    read_array(data, offset).map(u16::from_le_bytes)
}

pub fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    read_array(data, offset).map(u32::from_le_bytes)
}

pub fn read_f64(data: &[u8], offset: usize) -> Option<f64> {
    read_array(data, offset).map(f64::from_le_bytes)
}

pub fn write_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

pub fn write_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn write_f64(buf: &mut [u8], offset: usize, value: f64) {
    buf[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
}

//! CRC-32 (IEEE 802.3, reflected) as used by the checksum trailers of both
//! file formats.

/// Reflected form of the IEEE 802.3 polynomial `0x04C11DB7`.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

/// The table built at compile time. Immutable, so it can be shared freely.
pub static IEEE: Crc32Table = Crc32Table::new();

/// 256-entry lookup table for byte-at-a-time CRC-32 computation.
#[derive(Clone)]
pub struct Crc32Table {
    entries: [u32; 256],
}

impl Crc32Table {
    pub const fn new() -> Self {
        let mut entries = [0u32; 256];
        let mut n = 0;
        while n < 256 {
            let mut c = n as u32;
            let mut k = 0;
            while k < 8 {
                c = if c & 1 != 0 {
                    POLYNOMIAL ^ (c >> 1)
                } else {
                    c >> 1
                };
                k += 1;
            }
            entries[n] = c;
            n += 1;
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[u32; 256] {
        &self.entries
    }

    /// Computes the CRC-32 of `bytes`.
    pub fn checksum(&self, bytes: &[u8]) -> u32 {
        let crc = bytes.iter().fold(0xFFFF_FFFF_u32, |crc, &byte| {
            (crc >> 8) ^ self.entries[((crc ^ byte as u32) & 0xFF) as usize]
        });
        !crc
    }
}

impl Default for Crc32Table {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Crc32Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crc32Table")
            .field("polynomial", &format_args!("{POLYNOMIAL:#010x}"))
            .finish_non_exhaustive()
    }
}

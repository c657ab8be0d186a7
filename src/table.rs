//! Lookup table for the reflected CRC-32 polynomial.
//!
//! The table maps every byte value to the remainder contributed by that byte,
//! which lets the checksum advance eight bits per lookup instead of one bit
//! per shift.

/// Reflected form of the IEEE 802.3 / PKZip CRC-32 polynomial.
pub const IEEE_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Table for [`IEEE_POLYNOMIAL`], built at compile time and shared by every
/// checksum in the process.
pub static IEEE_TABLE: CrcTable = CrcTable::build(IEEE_POLYNOMIAL);

/// A 256-entry CRC-32 lookup table indexed by byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcTable {
    entries: [u32; 256],
}

impl CrcTable {
    /// Build the table for a reflected polynomial.
    ///
    /// Each entry is the byte value run through eight shift steps, folding in
    /// the polynomial whenever the low bit is set.
    pub const fn build(polynomial: u32) -> Self {
        let mut entries = [0u32; 256];
        let mut i = 0;
        while i < 256 {
            let mut value = i as u32;
            let mut bit = 0;
            while bit < 8 {
                value = if value & 1 == 1 {
                    (value >> 1) ^ polynomial
                } else {
                    value >> 1
                };
                bit += 1;
            }
            entries[i] = value;
            i += 1;
        }
        Self { entries }
    }

    /// Entry for a single byte value.
    #[inline]
    pub const fn get(&self, byte: u8) -> u32 {
        self.entries[byte as usize]
    }

    /// All 256 entries in byte order.
    #[inline]
    pub fn as_array(&self) -> &[u32; 256] {
        &self.entries
    }

    /// Advance a raw (not yet inverted) accumulator over `bytes`.
    #[inline]
    pub fn update(&self, mut crc: u32, bytes: &[u8]) -> u32 {
        for &byte in bytes {
            crc = (crc >> 8) ^ self.entries[((crc as u8) ^ byte) as usize];
        }
        crc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0x0000_0000)]
    #[case(1, 0x7707_3096)]
    #[case(2, 0xEE0E_612C)]
    #[case(128, 0xEDB8_8320)]
    #[case(255, 0x2D02_EF8D)]
    fn test_known_entries(#[case] index: u8, #[case] expected: u32) {
        assert_eq!(IEEE_TABLE.get(index), expected);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(CrcTable::build(IEEE_POLYNOMIAL), IEEE_TABLE);
        assert_eq!(IEEE_TABLE.as_array().len(), 256);
    }

    #[test]
    fn test_entries_are_distinct() {
        let mut entries = IEEE_TABLE.as_array().to_vec();
        entries.sort_unstable();
        entries.dedup();
        assert_eq!(entries.len(), 256);
    }

    #[test]
    fn test_update_raw_accumulator() {
        // "123456789" is the standard check string for CRC-32/ISO-HDLC
        let raw = IEEE_TABLE.update(0xFFFF_FFFF, b"123456789");
        assert_eq!(!raw, 0xCBF4_3926);
        assert_eq!(IEEE_TABLE.update(0x1234_5678, b""), 0x1234_5678);
    }
}

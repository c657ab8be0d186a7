//! Incremental CRC-32 state and one-shot helpers.

use crate::table::IEEE_TABLE;

const INITIAL: u32 = 0xFFFF_FFFF;

/// Compute the CRC32 (IEEE) of a byte slice.
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    !IEEE_TABLE.update(INITIAL, data)
}

/// Continue a finalized CRC32 value with more data.
///
/// Useful when entry data arrives in pieces and only the CRC of the previous
/// pieces was kept: `crc32_update(crc32(a), b) == crc32(a ++ b)`.
#[inline]
pub fn crc32_update(prev: u32, data: &[u8]) -> u32 {
    !IEEE_TABLE.update(!prev, data)
}

/// Running CRC32 over data fed in arbitrary pieces.
///
/// # Examples
///
/// ```rust
/// use soapberry_crc::Crc32Hasher;
///
/// let mut hasher = Crc32Hasher::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), 0xCBF4_3926);
/// ```
#[derive(Debug, Clone)]
pub struct Crc32Hasher {
    state: u32,
    amount: u64,
}

impl Default for Crc32Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32Hasher {
    /// Start a fresh checksum over no data.
    #[inline]
    pub fn new() -> Self {
        Self {
            state: INITIAL,
            amount: 0,
        }
    }

    /// Resume from a previously finalized CRC value.
    ///
    /// The byte count starts at zero since it cannot be recovered from the CRC.
    #[inline]
    pub fn new_with_initial(crc: u32) -> Self {
        Self {
            state: !crc,
            amount: 0,
        }
    }

    /// Feed more data into the checksum.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.state = IEEE_TABLE.update(self.state, data);
        self.amount += data.len() as u64;
    }

    /// CRC of everything fed so far. The hasher stays usable afterwards.
    #[inline]
    pub fn finalize(&self) -> u32 {
        !self.state
    }

    /// Number of bytes fed since construction or the last reset.
    #[inline]
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Return to the fresh state, discarding everything fed so far.
    #[inline]
    pub fn reset(&mut self) {
        self.state = INITIAL;
        self.amount = 0;
    }
}

impl std::hash::Hasher for Crc32Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.finalize())
    }
}

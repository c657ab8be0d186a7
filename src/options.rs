//! Configuration for streaming checksum computation.

use crate::error::{Error, Result};

/// Read buffer size used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Options controlling how a stream is read and copied.
///
/// # Examples
///
/// ```rust
/// use soapberry_crc::ChecksumOptions;
///
/// // Create with defaults
/// let options = ChecksumOptions::default();
///
/// // Or customize
/// let options = ChecksumOptions::new()
///     .with_chunk_size(64 * 1024)
///     .with_skip_empty_writes(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumOptions {
    /// Size of each read issued against the input stream
    pub chunk_size: usize,
    /// Whether to suppress the zero-length write that mirrors the final
    /// end-of-stream read
    pub skip_empty_writes: bool,
}

impl Default for ChecksumOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            skip_empty_writes: false,
        }
    }
}

impl ChecksumOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read buffer size. Must be non-zero.
    #[inline]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set whether zero-length writes are suppressed.
    ///
    /// By default every read is mirrored to the output sink, including the
    /// empty read that ends the stream. Some sinks reject empty writes; enable
    /// this for those.
    #[inline]
    pub fn with_skip_empty_writes(mut self, skip: bool) -> Self {
        self.skip_empty_writes = skip;
        self
    }

    /// Check that the options can drive a read loop.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ChecksumOptions::new();
        assert_eq!(options.chunk_size, 8192);
        assert!(!options.skip_empty_writes);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let options = ChecksumOptions::new().with_chunk_size(0);
        assert!(matches!(
            options.validate(),
            Err(Error::InvalidChunkSize(0))
        ));
    }

    #[test]
    fn test_builder() {
        let options = ChecksumOptions::new()
            .with_chunk_size(1)
            .with_skip_empty_writes(true);
        assert_eq!(options.chunk_size, 1);
        assert!(options.skip_empty_writes);
        assert!(options.validate().is_ok());
    }
}

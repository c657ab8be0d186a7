//! Error types for checksum configuration and verification.
//!
//! Streaming operations return [`std::io::Result`] so that failures raised by
//! caller-supplied streams reach the caller untouched. This type only covers
//! what the crate itself can reject.
use thiserror::Error;

/// Main error type for soapberry-crc operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Chunk size that cannot drive a read loop
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(usize),

    /// Data does not hash to the recorded CRC
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// Data length differs from the recorded size
    #[error("Size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: u64, actual: u64 },
}

/// Result type for soapberry-crc operations.
pub type Result<T> = std::result::Result<T, Error>;

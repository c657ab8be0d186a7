//! Table-driven CRC-32 for ZIP archive entries.
//!
//! This crate computes the CRC-32 used by PKZip, zlib and IEEE 802.3
//! (reflected polynomial `0xEDB88320`) over byte streams, optionally copying
//! the bytes to a second sink while counting them. Archive readers use it to
//! validate entries against the CRC in their headers; archive writers use it
//! to produce that CRC while spooling entry data.
//!
//! # Quick Start
//!
//! ```rust
//! use soapberry_crc::{Crc32Computer, crc32};
//! use std::io::Cursor;
//!
//! // One-shot over a slice
//! assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
//!
//! // Streaming, with a copy of the input
//! let mut computer = Crc32Computer::new();
//! let mut copy = Vec::new();
//! let crc = computer.compute_and_copy(&mut Cursor::new(b"123456789"), Some(&mut copy))?;
//! assert_eq!(crc, 0xCBF4_3926);
//! assert_eq!(computer.total_bytes_read(), 9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]

mod computer;
mod error;
mod hasher;
mod io;
mod options;
mod table;
mod verify;

pub use computer::{Crc32Computer, Digest, checksum_stream};
pub use error::{Error, Result};
pub use hasher::{Crc32Hasher, crc32, crc32_update};
pub use io::{CrcReader, CrcWriter};
pub use options::{ChecksumOptions, DEFAULT_CHUNK_SIZE};
pub use table::{CrcTable, IEEE_POLYNOMIAL, IEEE_TABLE};
pub use verify::verify_stream;

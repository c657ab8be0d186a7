//! Streaming CRC-32 computation with an optional copy-through sink.
//!
//! [`Crc32Computer`] reads an input stream to its end in fixed-size chunks,
//! folds every byte into a CRC-32 accumulator and, when given an output sink,
//! forwards each chunk to it as it goes. This is how archive writers checksum
//! an entry while spooling it, and how readers validate an entry against the
//! CRC stored in its header.
//!
//! # Examples
//!
//! ```rust
//! use soapberry_crc::Crc32Computer;
//! use std::io::Cursor;
//!
//! let mut computer = Crc32Computer::new();
//! let mut copy = Vec::new();
//! let crc = computer.compute_and_copy(&mut Cursor::new(b"123456789"), Some(&mut copy))?;
//!
//! assert_eq!(crc, 0xCBF4_3926);
//! assert_eq!(computer.total_bytes_read(), 9);
//! assert_eq!(copy, b"123456789");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::Result;
use crate::options::ChecksumOptions;
use crate::table::IEEE_TABLE;
use std::io::{self, Read, Write};
use tracing::{debug, trace};

/// Result of checksumming one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    /// Finalized CRC-32 of every byte read
    pub crc: u32,
    /// Total number of bytes read from the input
    pub bytes_read: u64,
}

/// Reusable streaming checksum computer.
///
/// The byte counter reflects the most recent call only; every call starts
/// from a fresh accumulator and a zeroed counter, so one instance can serve
/// any number of independent streams. Calls take `&mut self`, so sharing an
/// instance across threads requires the caller to serialize access.
#[derive(Debug, Clone, Default)]
pub struct Crc32Computer {
    options: ChecksumOptions,
    total_bytes_read: u64,
}

impl Crc32Computer {
    /// Create a computer with the default 8 KiB chunk size.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a computer with custom options.
    ///
    /// Fails if the options cannot drive a read loop (zero chunk size).
    pub fn with_options(options: ChecksumOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            total_bytes_read: 0,
        })
    }

    #[inline]
    pub fn options(&self) -> &ChecksumOptions {
        &self.options
    }

    /// Bytes consumed by the most recent computation.
    ///
    /// If that computation failed, this is the count read before the failure.
    #[inline]
    pub fn total_bytes_read(&self) -> u64 {
        self.total_bytes_read
    }

    /// Compute the CRC-32 of `input`, reading it to the end.
    pub fn compute<R: Read + ?Sized>(&mut self, input: &mut R) -> io::Result<u32> {
        self.compute_and_copy(input, None)
    }

    /// Compute the CRC-32 of `input` while writing every chunk read to `output`.
    ///
    /// Each read is mirrored to the sink with exactly the bytes it returned.
    /// That includes the final empty read, which reaches the sink as a
    /// zero-length write unless [`ChecksumOptions::skip_empty_writes`] is set.
    ///
    /// Errors from either stream are returned as-is. Nothing is retried,
    /// including [`io::ErrorKind::Interrupted`]. Short writes are continued
    /// until the chunk is written; a sink that accepts zero bytes of a
    /// non-empty chunk fails the call with [`io::ErrorKind::WriteZero`].
    pub fn compute_and_copy<R: Read + ?Sized>(
        &mut self,
        input: &mut R,
        output: Option<&mut dyn Write>,
    ) -> io::Result<u32> {
        self.total_bytes_read = 0;
        run(input, output, &self.options, &mut self.total_bytes_read)
    }

    /// Like [`compute_and_copy`](Self::compute_and_copy), returning the CRC
    /// and byte count together.
    pub fn digest<R: Read + ?Sized>(
        &mut self,
        input: &mut R,
        output: Option<&mut dyn Write>,
    ) -> io::Result<Digest> {
        let crc = self.compute_and_copy(input, output)?;
        Ok(Digest {
            crc,
            bytes_read: self.total_bytes_read,
        })
    }
}

/// Checksum a stream without keeping any state around.
///
/// A zero chunk size is reported as [`io::ErrorKind::InvalidInput`] before
/// anything is read.
pub fn checksum_stream<R: Read + ?Sized>(
    input: &mut R,
    output: Option<&mut dyn Write>,
    options: &ChecksumOptions,
) -> io::Result<Digest> {
    options
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut bytes_read = 0;
    let crc = run(input, output, options, &mut bytes_read)?;
    Ok(Digest { crc, bytes_read })
}

/// Write all of `chunk` with plain `write` calls.
///
/// Unlike `write_all`, an `Interrupted` error is returned rather than retried,
/// and an empty chunk still reaches the sink as one zero-length write. A sink
/// that accepts zero bytes of a non-empty chunk fails with `WriteZero`.
fn write_chunk(sink: &mut dyn Write, chunk: &[u8]) -> io::Result<()> {
    if chunk.is_empty() {
        let _written = sink.write(chunk)?;
        return Ok(());
    }

    let mut offset = 0;
    while offset < chunk.len() {
        match sink.write(&chunk[offset..])? {
            0 => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "sink accepted no bytes of a non-empty chunk",
                ));
            },
            written => offset += written,
        }
    }
    Ok(())
}

fn run<R: Read + ?Sized>(
    input: &mut R,
    mut output: Option<&mut dyn Write>,
    options: &ChecksumOptions,
    bytes_read: &mut u64,
) -> io::Result<u32> {
    let mut buf = vec![0u8; options.chunk_size];
    let mut crc = 0xFFFF_FFFF;

    loop {
        let n = input.read(&mut buf)?;

        if let Some(sink) = output.as_deref_mut() {
            if n > 0 || !options.skip_empty_writes {
                write_chunk(sink, &buf[..n])?;
            }
        }

        if n == 0 {
            break;
        }

        *bytes_read += n as u64;
        crc = IEEE_TABLE.update(crc, &buf[..n]);
        trace!(chunk = n, total = *bytes_read, "checksummed chunk");
    }

    let crc = !crc;
    debug!(bytes = *bytes_read, crc, "stream checksummed");
    Ok(crc)
}

//! Reader and writer wrappers that checksum whatever passes through them.
//!
//! These suit archive code that already drives its own I/O loop, such as a
//! decompressor pulling an entry through a [`CrcReader`] or an entry writer
//! pushing data through a [`CrcWriter`] before recording CRC and size in the
//! local header.

use crate::computer::Digest;
use crate::hasher::Crc32Hasher;
use std::io::{self, Read, Write};

/// Reader wrapper that calculates the CRC-32 of everything read through it.
///
/// # Examples
///
/// ```rust
/// use soapberry_crc::CrcReader;
/// use std::io::Read;
///
/// let mut reader = CrcReader::new(&b"123456789"[..]);
/// let mut out = String::new();
/// reader.read_to_string(&mut out)?;
/// assert_eq!(reader.crc(), 0xCBF4_3926);
/// assert_eq!(reader.bytes_read(), 9);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct CrcReader<R> {
    inner: R,
    hasher: Crc32Hasher,
}

impl<R> CrcReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: Crc32Hasher::new(),
        }
    }

    /// CRC of the bytes read so far.
    #[inline]
    pub fn crc(&self) -> u32 {
        self.hasher.finalize()
    }

    #[inline]
    pub fn bytes_read(&self) -> u64 {
        self.hasher.amount()
    }

    #[inline]
    pub fn digest(&self) -> Digest {
        Digest {
            crc: self.crc(),
            bytes_read: self.bytes_read(),
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutable access to the inner reader. Bytes read directly from it are not
    /// hashed.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for CrcReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
}

/// Writer wrapper that calculates the CRC-32 of everything the inner writer
/// accepts.
///
/// Only the prefix reported by the inner `write` is hashed, so short writes
/// never skew the checksum.
#[derive(Debug)]
pub struct CrcWriter<W> {
    inner: W,
    hasher: Crc32Hasher,
}

impl<W> CrcWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Crc32Hasher::new(),
        }
    }

    /// CRC of the bytes written so far.
    #[inline]
    pub fn crc(&self) -> u32 {
        self.hasher.finalize()
    }

    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.hasher.amount()
    }

    #[inline]
    pub fn digest(&self) -> Digest {
        Digest {
            crc: self.crc(),
            bytes_read: self.bytes_written(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutable access to the inner writer. Bytes written directly to it are
    /// not hashed.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CrcWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::crc32;

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    /// Writer that accepts at most three bytes per call.
    struct Narrow(Vec<u8>);

    impl Write for Narrow {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(3);
            self.0.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reader_tracks_crc() {
        let mut reader = CrcReader::new(FOX);
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();

        assert_eq!(out, FOX);
        assert_eq!(reader.crc(), 0x414F_A339);
        assert_eq!(
            reader.digest(),
            Digest {
                crc: 0x414F_A339,
                bytes_read: FOX.len() as u64,
            }
        );
    }

    #[test]
    fn test_reader_partial() {
        let mut reader = CrcReader::new(&b"123456789"[..]);
        let mut buf = [0u8; 4];
        reader.read_exact(&mut buf).unwrap();

        assert_eq!(reader.crc(), crc32(b"1234"));
        assert_eq!(reader.bytes_read(), 4);
        assert_eq!(reader.into_inner(), b"56789");
    }

    #[test]
    fn test_writer_hashes_accepted_prefix_only() {
        let mut writer = CrcWriter::new(Narrow(Vec::new()));
        assert_eq!(writer.write(b"123456789").unwrap(), 3);
        assert_eq!(writer.crc(), crc32(b"123"));

        writer.write_all(b"456789").unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.crc(), 0xCBF4_3926);
        assert_eq!(writer.bytes_written(), 9);
        assert_eq!(writer.into_inner().0, b"123456789");
    }

    #[test]
    fn test_writer_empty() {
        let writer = CrcWriter::new(Vec::<u8>::new());
        assert_eq!(writer.crc(), 0);
        assert_eq!(writer.bytes_written(), 0);
        assert!(writer.get_ref().is_empty());
    }
}

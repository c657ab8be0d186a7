//! Integrity checks against a recorded CRC and size.
//!
//! ZIP entries carry the CRC-32 and uncompressed size of their data in the
//! local header and central directory; these helpers compare a stream or a
//! finished [`Digest`] against those values.

use crate::computer::{Digest, checksum_stream};
use crate::error::{Error, Result};
use crate::options::ChecksumOptions;
use std::io::Read;
use tracing::debug;

impl Digest {
    /// Compare against a recorded CRC and, optionally, a recorded size.
    ///
    /// The size is checked first since a length mismatch explains a CRC
    /// mismatch.
    pub fn verify(&self, expected_crc: u32, expected_size: Option<u64>) -> Result<()> {
        match expected_size {
            Some(expected) if expected != self.bytes_read => {
                return Err(Error::SizeMismatch {
                    expected,
                    actual: self.bytes_read,
                });
            },
            _ => {},
        }
        if expected_crc != self.crc {
            return Err(Error::ChecksumMismatch {
                expected: expected_crc,
                actual: self.crc,
            });
        }
        Ok(())
    }
}

/// Read `input` to the end and check it against a recorded CRC and size.
///
/// Returns the computed digest when both match.
///
/// # Examples
///
/// ```rust
/// use soapberry_crc::{Error, verify_stream};
///
/// let digest = verify_stream(&mut &b"123456789"[..], 0xCBF4_3926, Some(9))?;
/// assert_eq!(digest.bytes_read, 9);
///
/// let err = verify_stream(&mut &b"123456780"[..], 0xCBF4_3926, None).unwrap_err();
/// assert!(matches!(err, Error::ChecksumMismatch { .. }));
/// # Ok::<(), Error>(())
/// ```
pub fn verify_stream<R: Read + ?Sized>(
    input: &mut R,
    expected_crc: u32,
    expected_size: Option<u64>,
) -> Result<Digest> {
    let digest = checksum_stream(input, None, &ChecksumOptions::default())?;
    if let Err(e) = digest.verify(expected_crc, expected_size) {
        debug!(error = %e, "stream failed verification");
        return Err(e);
    }
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn test_verify_match() {
        let digest = verify_stream(&mut Cursor::new(b"123456789"), 0xCBF4_3926, Some(9)).unwrap();
        assert_eq!(digest.crc, 0xCBF4_3926);
        assert_eq!(digest.bytes_read, 9);
    }

    #[test]
    fn test_verify_empty() {
        let digest = verify_stream(&mut Cursor::new(b""), 0, Some(0)).unwrap();
        assert_eq!(digest.bytes_read, 0);
    }

    #[test]
    fn test_checksum_mismatch() {
        let err = verify_stream(&mut Cursor::new(b"123456789"), 0xDEAD_BEEF, None).unwrap_err();
        assert!(matches!(
            err,
            Error::ChecksumMismatch {
                expected: 0xDEAD_BEEF,
                actual: 0xCBF4_3926,
            }
        ));
    }

    #[test]
    fn test_size_checked_before_crc() {
        let digest = Digest {
            crc: 1,
            bytes_read: 8,
        };
        assert!(matches!(
            digest.verify(2, Some(9)),
            Err(Error::SizeMismatch {
                expected: 9,
                actual: 8,
            })
        ));
        assert!(matches!(
            digest.verify(2, Some(8)),
            Err(Error::ChecksumMismatch { .. })
        ));
        assert!(digest.verify(1, None).is_ok());
    }

    #[test]
    fn test_read_failure_surfaces_as_io() {
        struct Unreadable;

        impl Read for Unreadable {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            }
        }

        let err = verify_stream(&mut Unreadable, 0, None).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

use std::io::{self, Read};

use super::error::{DecodeError, Field};
use super::layout;

/// Validate the magic identifier and frame the payload behind it.
///
/// Reads the 6-byte magic and the 8-byte big-endian signed payload size,
/// then returns a [`PayloadReader`] bounded to that many bytes. A negative
/// declared size frames an empty payload, matching a limited reader whose
/// remaining count is already spent.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use splicedump_core::format::reader::frame;
/// use std::io::Cursor;
///
/// let mut bytes = b"SPLICE".to_vec();
/// bytes.extend_from_slice(&36i64.to_be_bytes());
/// bytes.extend_from_slice(&[0u8; 36]);
/// let payload = frame(Cursor::new(bytes)).unwrap();
/// assert_eq!(payload.remaining(), 36);
/// ```
///
/// # Errors
/// Returns `UnsupportedFormat` when the magic does not match, and
/// `TruncatedHeader` when the magic or size field cannot be read in full.
pub fn frame<R: Read>(mut source: R) -> Result<PayloadReader<R>, DecodeError> {
    let mut magic = [0u8; layout::MAGIC.len()];
    read_header_field(&mut source, &mut magic, "magic identifier")?;
    if &magic != layout::MAGIC {
        return Err(DecodeError::UnsupportedFormat);
    }

    let mut size = [0u8; layout::PAYLOAD_SIZE_LEN];
    read_header_field(&mut source, &mut size, "payload size")?;
    let declared = i64::from_be_bytes(size);

    Ok(PayloadReader {
        source,
        remaining: u64::try_from(declared).unwrap_or(0),
    })
}

/// Bounded cursor over the payload of a framed SPLICE file.
///
/// Yields at most the declared payload size from the underlying source and
/// reports end-of-input once that budget is exhausted, regardless of any
/// bytes remaining underneath.
#[derive(Debug)]
pub struct PayloadReader<R> {
    source: R,
    remaining: u64,
}

impl<R: Read> PayloadReader<R> {
    /// Payload bytes not yet consumed.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<R: Read> Read for PayloadReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Ok(0);
        }
        let limit = buf.len().min(usize::try_from(self.remaining).unwrap_or(usize::MAX));
        let read = self.source.read(&mut buf[..limit])?;
        self.remaining -= read as u64;
        Ok(read)
    }
}

/// Fill `buf` from the header region, mapping a short read to
/// `TruncatedHeader` naming `field`.
fn read_header_field<R: Read>(
    source: &mut R,
    buf: &mut [u8],
    field: &'static str,
) -> Result<(), DecodeError> {
    source.read_exact(buf).map_err(|err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            DecodeError::TruncatedHeader { field }
        } else {
            DecodeError::Io(err)
        }
    })
}

/// Fill `buf` from the payload, mapping a short read to `TruncatedField`
/// naming `field`.
pub fn read_payload_field<R: Read>(
    payload: &mut PayloadReader<R>,
    buf: &mut [u8],
    field: Field,
) -> Result<(), DecodeError> {
    payload.read_exact(buf).map_err(|err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            DecodeError::TruncatedField { field }
        } else {
            DecodeError::Io(err)
        }
    })
}

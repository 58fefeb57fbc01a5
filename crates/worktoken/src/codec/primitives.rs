//! Byte-level reader and writer used by the run-length codec.

use crate::error::DecodeError;

// =============================================================================
// DECODING
// =============================================================================

/// Reader over a compressed byte stream.
///
/// Wraps a byte slice and tracks the position so truncation errors can
/// point at the offending escape sequence.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Reads a single byte, or `None` at end of input.
    #[inline]
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    /// Reads the `(count, value)` pair that follows an escape marker.
    ///
    /// `escape_pos` is the offset of the marker itself, reported on truncation.
    #[inline]
    pub fn read_run(&mut self, escape_pos: usize) -> Result<(usize, u8), DecodeError> {
        if self.remaining_len() < 2 {
            return Err(DecodeError::TruncatedEscape { position: escape_pos });
        }
        let count = self.data[self.pos] as usize;
        let value = self.data[self.pos + 1];
        self.pos += 2;
        Ok((count, value))
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for building a byte stream.
#[derive(Debug, Clone)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes `value` repeated `count` times.
    #[inline]
    pub fn write_repeated(&mut self, value: u8, count: usize) {
        self.buf.resize(self.buf.len() + count, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_run() {
        let data = [0xFF, 5, b'a', b'z'];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.next_byte(), Some(0xFF));
        assert_eq!(reader.read_run(0).unwrap(), (5, b'a'));
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.next_byte(), Some(b'z'));
        assert_eq!(reader.remaining_len(), 0);
        assert_eq!(reader.next_byte(), None);
    }

    #[test]
    fn test_read_run_truncated() {
        let data = [0xFF, 5];
        let mut reader = Reader::new(&data);
        reader.next_byte();
        assert!(matches!(
            reader.read_run(0),
            Err(DecodeError::TruncatedEscape { position: 0 })
        ));
    }

    #[test]
    fn test_write_repeated() {
        let mut writer = Writer::with_capacity(8);
        writer.write_byte(1);
        writer.write_repeated(7, 3);
        writer.write_bytes(&[2, 3]);
        assert_eq!(writer.len(), 6);
        assert_eq!(writer.into_bytes(), vec![1, 7, 7, 7, 2, 3]);
    }
}

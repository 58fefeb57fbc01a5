//! Escape-coded run-length compression.
//!
//! Runs of more than three identical bytes become a three-byte escape
//! sequence `[0xFF, count, value]`; everything else passes through literally.
//! Runs of the marker byte itself are always escaped so a literal `0xFF` never
//! reaches the output. Serialized envelopes are UTF-8 and never contain `0xFF`,
//! so this rule does not affect envelope tokens.
//!
//! This pays off on whitespace-heavy code and indented data. On random input
//! it can only grow the output.

use tracing::trace;

use crate::codec::primitives::{Reader, Writer};
use crate::error::DecodeError;
use crate::limits::{ESCAPE_MARKER, MAX_ENVELOPE_SIZE, MAX_RUN_LEN, MIN_ESCAPED_RUN};

/// Compresses a byte sequence.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let mut writer = Writer::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let value = input[i];
        let run = input[i..]
            .iter()
            .take(MAX_RUN_LEN)
            .take_while(|&&b| b == value)
            .count();

        if run >= MIN_ESCAPED_RUN || value == ESCAPE_MARKER {
            writer.write_bytes(&[ESCAPE_MARKER, run as u8, value]);
        } else {
            writer.write_repeated(value, run);
        }
        i += run;
    }

    trace!(input = input.len(), output = writer.len(), "rle compressed");
    writer.into_bytes()
}

/// Expands a compressed byte sequence.
///
/// Fails if an escape marker is not followed by a count and a value, or if
/// the expanded output would exceed [`MAX_ENVELOPE_SIZE`].
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut reader = Reader::new(input);
    let mut writer = Writer::with_capacity(input.len() * 2);

    loop {
        let pos = reader.position();
        let Some(byte) = reader.next_byte() else { break };
        if byte == ESCAPE_MARKER {
            let (count, value) = reader.read_run(pos)?;
            if writer.len() + count > MAX_ENVELOPE_SIZE {
                return Err(DecodeError::LengthExceedsLimit {
                    field: "envelope",
                    len: writer.len() + count,
                    max: MAX_ENVELOPE_SIZE,
                });
            }
            writer.write_repeated(value, count);
        } else {
            writer.write_byte(byte);
        }
    }

    if writer.len() > MAX_ENVELOPE_SIZE {
        return Err(DecodeError::LengthExceedsLimit {
            field: "envelope",
            len: writer.len(),
            max: MAX_ENVELOPE_SIZE,
        });
    }

    Ok(writer.into_bytes())
}

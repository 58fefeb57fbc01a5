//! Truncated CRC-32 used to detect corrupted tokens.
//!
//! This is a corruption detector, not an identifier: with only 20 bits kept,
//! unrelated envelopes collide regularly.

use crc::{CRC_32_ISO_HDLC, Crc};

use crate::error::DecodeError;
use crate::limits::CHECKSUM_LEN;

/// Reflected CRC-32 (IEEE 802.3, polynomial 0xEDB88320).
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Computes the standard CRC-32 of `bytes`.
pub fn crc32(bytes: &[u8]) -> u32 {
    CRC32.checksum(bytes)
}

/// Computes the short display checksum of `bytes`.
///
/// The CRC is rendered as unpadded hex and only the last five digits are
/// kept, upper-cased. A CRC below `0x10000` yields fewer than five digits;
/// existing tokens were issued that way, so the form is kept.
pub fn checksum(bytes: &[u8]) -> String {
    let hex = format!("{:x}", crc32(bytes));
    let start = hex.len().saturating_sub(CHECKSUM_LEN);
    hex[start..].to_ascii_uppercase()
}

/// Verifies that `bytes` hash to `expected`.
pub fn verify_checksum(bytes: &[u8], expected: &str) -> Result<(), DecodeError> {
    let actual = checksum(bytes);
    if actual != expected {
        return Err(DecodeError::ChecksumMismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

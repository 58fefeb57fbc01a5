//! Wire constants and decoding limits.
//!
//! The size limits exist because tokens arrive from untrusted sources (shared
//! links) and base-62 conversion is quadratic in input length.

/// Byte that introduces a run-length escape sequence.
pub const ESCAPE_MARKER: u8 = 0xFF;

/// Longest run a single escape sequence can describe.
pub const MAX_RUN_LEN: usize = 255;

/// Shortest run of an ordinary byte that is escaped instead of emitted literally.
pub const MIN_ESCAPED_RUN: usize = 4;

/// Number of hex characters kept from the CRC-32.
pub const CHECKSUM_LEN: usize = 5;

/// Host segment used when no other host is configured.
pub const DEFAULT_HOST: &str = "OneWorkLoc.app";

/// Envelope format revision stamped by default.
pub const FORMAT_VERSION: u32 = 3;

/// Literal prefix of the version path segment (`v3`).
pub const VERSION_PREFIX: char = 'v';

/// Maximum length of the base-62 data segment, in characters.
pub const MAX_ENCODED_LEN: usize = 256 * 1024;

/// Maximum size of a decompressed envelope, in bytes.
pub const MAX_ENVELOPE_SIZE: usize = 16 * 1024 * 1024;

//! Token encoding/decoding.
//!
//! Encoding: envelope → JSON → run-length compression → base-62 → token,
//! with a checksum over the uncompressed JSON. Decoding reverses each step
//! and verifies the checksum before parsing.

pub mod base62;
pub mod checksum;
pub mod content;
pub mod envelope;
pub(crate) mod primitives;
pub mod rle;
pub mod token;

pub use checksum::{checksum, crc32, verify_checksum};
pub use content::{EncodeOptions, decode, decode_path, decode_token, encode, encode_with_options};
pub use envelope::{deserialize_envelope, serialize_envelope};
pub use token::{Token, TokenPath, build_token, parse_path, parse_token};

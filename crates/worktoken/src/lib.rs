//! Worktoken: compact, URL-safe tokens for shared workspace content.
//!
//! A token carries a text payload plus a small metadata envelope entirely in
//! its path, so a link is the only thing that needs to be stored.
//!
//! # Quick Start
//!
//! ```rust
//! use worktoken::{ContentType, Metadata, decode_token, encode};
//!
//! let meta = Metadata::code("rust", 1_700_000_000_000);
//! let token = encode("fn main() {\n    println!(\"hi\");\n}\n", &meta).unwrap();
//! assert!(token.starts_with("OneWorkLoc.app/v3/code/"));
//!
//! let decoded = decode_token(&token).unwrap();
//! assert_eq!(decoded.metadata, meta);
//! assert_eq!(decoded.metadata.content_type, ContentType::Code);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Content types, metadata and the envelope
//! - [`codec`]: Run-length compression, checksum, base-62 and token layout
//! - [`error`]: Error types
//! - [`limits`]: Wire constants and decoding limits
//!
//! # Token Format
//!
//! ```text
//! {host}/v{version}/{type}/{checksum}/{data}
//! ```
//!
//! - `data`: base-62 rendering of the run-length compressed JSON envelope
//! - `checksum`: last five hex digits of the CRC-32 of the uncompressed JSON
//!
//! The checksum detects corruption only. It is not a signature, and the
//! encoding is not encryption.
//!
//! # Limitations
//!
//! Base-62 conversion treats the compressed bytes as one integer, so leading
//! zero bytes would be lost. Serialized envelopes always start with `{`, so
//! tokens produced by [`encode`] are unaffected.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    EncodeOptions, Token, TokenPath, checksum, decode, decode_path, decode_token, encode,
    encode_with_options,
};
pub use error::{DecodeError, EncodeError, ErrorKind};
pub use model::{ContentType, DecodedContent, Envelope, Metadata};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

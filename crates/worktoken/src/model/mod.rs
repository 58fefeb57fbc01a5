//! Data model types for shared content.
//!
//! - Content types and metadata
//! - The envelope that gets serialized, checksummed and compressed

pub mod envelope;
pub mod metadata;

pub use envelope::{DecodedContent, Envelope};
pub use metadata::{ContentType, Metadata, UnknownContentType};

//! Content encoding/decoding: the full serialize → compress → base-62 pipeline.

use tracing::{debug, warn};

use crate::codec::base62;
use crate::codec::checksum::{checksum, verify_checksum};
use crate::codec::envelope::{deserialize_envelope, serialize_envelope};
use crate::codec::rle;
use crate::codec::token::{TokenPath, build_token, parse_path, parse_token};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{DEFAULT_HOST, MAX_ENCODED_LEN};
use crate::model::{DecodedContent, Envelope, Metadata};

// =============================================================================
// ENCODING
// =============================================================================

/// Options for encoding content.
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions<'a> {
    /// Host segment the token starts with.
    ///
    /// Must be non-empty and must not contain `/`.
    pub host: &'a str,
}

impl Default for EncodeOptions<'_> {
    fn default() -> Self {
        Self { host: DEFAULT_HOST }
    }
}

impl<'a> EncodeOptions<'a> {
    /// Creates default options (host [`DEFAULT_HOST`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host segment.
    pub fn with_host(mut self, host: &'a str) -> Self {
        self.host = host;
        self
    }
}

/// Encodes content and metadata into a token using the default host.
pub fn encode(content: &str, metadata: &Metadata) -> Result<String, EncodeError> {
    encode_with_options(content, metadata, EncodeOptions::default())
}

/// Encodes content and metadata into a token with the given options.
///
/// The checksum covers the serialized envelope before compression.
pub fn encode_with_options(
    content: &str,
    metadata: &Metadata,
    options: EncodeOptions<'_>,
) -> Result<String, EncodeError> {
    metadata
        .validate()
        .map_err(|reason| EncodeError::InvalidMetadata { reason })?;
    if options.host.is_empty() || options.host.contains('/') {
        return Err(EncodeError::InvalidHost {
            host: options.host.to_string(),
        });
    }

    let envelope = Envelope::new(metadata.clone(), content);
    let json = serialize_envelope(&envelope)?;
    let compressed = rle::compress(json.as_bytes());
    let estimated = base62::encoded_len_lower_bound(&compressed);
    if estimated > MAX_ENCODED_LEN {
        return Err(EncodeError::LengthExceedsLimit {
            field: "encoded data",
            len: estimated,
            max: MAX_ENCODED_LEN,
        });
    }
    let encoded = base62::encode(&compressed);
    if encoded.len() > MAX_ENCODED_LEN {
        return Err(EncodeError::LengthExceedsLimit {
            field: "encoded data",
            len: encoded.len(),
            max: MAX_ENCODED_LEN,
        });
    }
    let sum = checksum(json.as_bytes());

    debug!(
        content_type = %metadata.content_type,
        serialized = json.len(),
        compressed = compressed.len(),
        encoded = encoded.len(),
        checksum = %sum,
        "encoded content"
    );

    Ok(build_token(options.host, metadata, &sum, &encoded))
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes the data segment of a token and verifies it against `checksum`.
///
/// The checksum is checked on the decompressed bytes before they are parsed,
/// so tampered data reports an integrity failure rather than a parse error.
pub fn decode(encoded_data: &str, checksum: &str) -> Result<DecodedContent, DecodeError> {
    if encoded_data.len() > MAX_ENCODED_LEN {
        return Err(DecodeError::LengthExceedsLimit {
            field: "encoded data",
            len: encoded_data.len(),
            max: MAX_ENCODED_LEN,
        });
    }

    let compressed = base62::decode(encoded_data)?;
    let serialized = rle::decompress(&compressed)?;
    verify_checksum(&serialized, checksum)?;
    let envelope = deserialize_envelope(&serialized)?;

    debug!(
        content_type = %envelope.meta.content_type,
        encoded = encoded_data.len(),
        compressed = compressed.len(),
        serialized = serialized.len(),
        "decoded content"
    );

    Ok(envelope.into())
}

/// Decodes a token path (`v3/text/ABCDE/...`, no host).
pub fn decode_path(path: &str) -> Result<DecodedContent, DecodeError> {
    let path = parse_path(path)?;
    decode_parsed(&path)
}

/// Decodes a full token (`host/v3/text/ABCDE/...`, optionally with a scheme).
pub fn decode_token(token: &str) -> Result<DecodedContent, DecodeError> {
    let token = parse_token(token)?;
    decode_parsed(&token.path)
}

fn decode_parsed(path: &TokenPath<'_>) -> Result<DecodedContent, DecodeError> {
    let decoded = decode(path.data, path.checksum)?;
    warn_on_path_mismatch(path, &decoded.metadata);
    Ok(decoded)
}

/// The type and version segments are informational; the envelope is
/// authoritative. Disagreement usually means a hand-edited link.
fn warn_on_path_mismatch(path: &TokenPath<'_>, metadata: &Metadata) {
    if path.content_type != metadata.content_type.as_str() {
        warn!(
            path_type = path.content_type,
            envelope_type = %metadata.content_type,
            "token type segment disagrees with envelope"
        );
    }
    if path.version_number() != Some(metadata.version) {
        warn!(
            path_version = path.version,
            envelope_version = metadata.version,
            "token version segment disagrees with envelope"
        );
    }
}

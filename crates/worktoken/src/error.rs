//! Error types for token encoding and decoding.

use thiserror::Error;

/// Failure category reported alongside every decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structurally invalid token or envelope.
    Format,
    /// Invalid base-62 character or truncated escape sequence.
    Decode,
    /// Recomputed checksum does not match the token.
    Integrity,
}

impl ErrorKind {
    /// Returns the short label for this kind (e.g., "format").
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Format => "format",
            ErrorKind::Decode => "decode",
            ErrorKind::Integrity => "integrity",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error while turning a token back into content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // === Format: token structure ===
    #[error("[format] token path has {found} segments, expected at least 4")]
    MissingSegments { found: usize },

    #[error("[format] version segment {segment:?} does not start with 'v'")]
    InvalidVersionSegment { segment: String },

    #[error("[format] encoded data segment is empty")]
    EmptyEncodedData,

    #[error("[format] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    // === Format: envelope structure ===
    #[error("[format] decompressed envelope is not valid UTF-8")]
    InvalidUtf8,

    #[error("[format] malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("[format] invalid metadata: {reason}")]
    InvalidMetadata { reason: &'static str },

    // === Decode ===
    #[error("[decode] invalid base62 character {char:?} at position {position}")]
    InvalidBase62Char { char: char, position: usize },

    #[error("[decode] escape sequence at byte {position} is truncated")]
    TruncatedEscape { position: usize },

    // === Integrity ===
    #[error("[integrity] checksum mismatch: token says {expected}, content hashes to {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

impl DecodeError {
    /// Returns the failure category for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::InvalidBase62Char { .. } | DecodeError::TruncatedEscape { .. } => {
                ErrorKind::Decode
            }
            DecodeError::ChecksumMismatch { .. } => ErrorKind::Integrity,
            _ => ErrorKind::Format,
        }
    }
}

/// Error while turning content into a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("invalid metadata: {reason}")]
    InvalidMetadata { reason: &'static str },

    #[error("invalid host {host:?}: must be non-empty and contain no '/'")]
    InvalidHost { host: String },

    #[error("envelope serialization failed: {0}")]
    Serialization(String),

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(DecodeError::EmptyEncodedData.kind(), ErrorKind::Format);
        assert_eq!(DecodeError::InvalidUtf8.kind(), ErrorKind::Format);
        assert_eq!(
            DecodeError::InvalidBase62Char { char: '-', position: 3 }.kind(),
            ErrorKind::Decode
        );
        assert_eq!(DecodeError::TruncatedEscape { position: 0 }.kind(), ErrorKind::Decode);
        assert_eq!(
            DecodeError::ChecksumMismatch {
                expected: "ABCDE".into(),
                actual: "12345".into(),
            }
            .kind(),
            ErrorKind::Integrity
        );
    }

    #[test]
    fn test_messages_carry_kind_label() {
        let err = DecodeError::MissingSegments { found: 2 };
        assert!(err.to_string().starts_with("[format]"));
        let err = DecodeError::InvalidBase62Char { char: '-', position: 0 };
        assert!(err.to_string().starts_with("[decode]"));
    }
}

//! Content metadata carried inside every token.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::limits::FORMAT_VERSION;

/// Kind of content a token carries.
///
/// Serialized as the lowercase tag, which also appears as the type segment
/// of the token path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Code,
    Json,
    Diagram,
}

impl ContentType {
    /// All content types, in tag order.
    pub const ALL: [ContentType; 4] = [
        ContentType::Text,
        ContentType::Code,
        ContentType::Json,
        ContentType::Diagram,
    ];

    /// Returns the wire tag (e.g., "code").
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Code => "code",
            ContentType::Json => "json",
            ContentType::Diagram => "diagram",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`ContentType::from_str`] for an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContentType(pub String);

impl fmt::Display for UnknownContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown content type {:?} (expected text, code, json or diagram)", self.0)
    }
}

impl std::error::Error for UnknownContentType {}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

/// Metadata envelope stored next to the payload.
///
/// Field order is part of the wire format: the checksum is computed over the
/// serialized form, so it must reproduce byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Source language, present only for [`ContentType::Code`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Envelope format revision.
    pub version: u32,
}

impl Metadata {
    /// Creates metadata for a non-code content type.
    ///
    /// Use [`Metadata::code`] for code, which also needs a language.
    pub fn new(content_type: ContentType, timestamp: u64) -> Self {
        Self {
            content_type,
            language: None,
            timestamp,
            version: FORMAT_VERSION,
        }
    }

    /// Creates metadata for source code in the given language.
    pub fn code(language: impl Into<String>, timestamp: u64) -> Self {
        Self {
            content_type: ContentType::Code,
            language: Some(language.into()),
            timestamp,
            version: FORMAT_VERSION,
        }
    }

    /// Creates metadata stamped with the current wall-clock time.
    pub fn now(content_type: ContentType) -> Self {
        Self::new(content_type, now_millis())
    }

    /// Sets the format revision.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Checks the metadata invariants, returning the first violation.
    pub fn validate(&self) -> Result<(), &'static str> {
        match (&self.content_type, &self.language) {
            (ContentType::Code, None) => return Err("code content requires a language"),
            (ContentType::Code, Some(lang)) if lang.is_empty() => {
                return Err("language must not be empty");
            }
            (ContentType::Code, Some(_)) => {}
            (_, Some(_)) => return Err("language is only allowed for code content"),
            (_, None) => {}
        }
        if self.version == 0 {
            return Err("version must be positive");
        }
        Ok(())
    }
}

/// Current time in milliseconds since the Unix epoch (0 if the clock is before it).
fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

//! Token layout: `{host}/v{version}/{type}/{checksum}/{data}`.

use std::fmt;

use crate::error::DecodeError;
use crate::limits::VERSION_PREFIX;
use crate::model::Metadata;

/// Borrowed view of the four path segments that follow the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPath<'a> {
    /// Version segment including its prefix (e.g. "v3").
    pub version: &'a str,
    /// Content type tag (e.g. "code").
    pub content_type: &'a str,
    pub checksum: &'a str,
    /// Base-62 data; everything after the checksum, never split further.
    pub data: &'a str,
}

impl TokenPath<'_> {
    /// Parses the number after the version prefix, if it is one.
    pub fn version_number(&self) -> Option<u32> {
        self.version.strip_prefix(VERSION_PREFIX)?.parse().ok()
    }
}

impl fmt::Display for TokenPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.version, self.content_type, self.checksum, self.data
        )
    }
}

/// A full token split into host and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub host: &'a str,
    pub path: TokenPath<'a>,
}

/// Assembles a token from its parts.
pub fn build_token(host: &str, meta: &Metadata, checksum: &str, encoded: &str) -> String {
    format!(
        "{host}/{VERSION_PREFIX}{}/{}/{checksum}/{encoded}",
        meta.version, meta.content_type
    )
}

/// Splits a token path (without host) into its segments.
///
/// A leading `/` and a single trailing `/` are ignored. The data segment is
/// the remainder after the third separator and may itself contain `/`.
pub fn parse_path(path: &str) -> Result<TokenPath<'_>, DecodeError> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    let segments: Vec<&str> = path.splitn(4, '/').collect();
    let &[version, content_type, checksum, data] = segments.as_slice() else {
        let found = if path.is_empty() { 0 } else { segments.len() };
        return Err(DecodeError::MissingSegments { found });
    };

    if !version.starts_with(VERSION_PREFIX) {
        return Err(DecodeError::InvalidVersionSegment {
            segment: version.to_string(),
        });
    }
    if data.is_empty() {
        return Err(DecodeError::EmptyEncodedData);
    }

    Ok(TokenPath {
        version,
        content_type,
        checksum,
        data,
    })
}

/// Splits a full token into host and path.
///
/// Accepts an optional URL scheme (`https://host/...`).
pub fn parse_token(token: &str) -> Result<Token<'_>, DecodeError> {
    let rest = token.split_once("://").map_or(token, |(_, rest)| rest);
    let Some((host, path)) = rest.split_once('/') else {
        return Err(DecodeError::MissingSegments { found: 0 });
    };
    Ok(Token {
        host,
        path: parse_path(path)?,
    })
}

//! Command implementations.
//!
//! Each command writes its result to the given writer so it can be tested
//! without touching stdout.

use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, info};
use worktoken::codec::{base62, deserialize_envelope, parse_token, rle, verify_checksum};
use worktoken::{ContentType, EncodeOptions, Metadata, checksum};

use crate::error::CliResult;

/// Metadata and host for an encode call, as given on the command line.
#[derive(Debug, Clone)]
pub struct EncodeRequest {
    pub content_type: ContentType,
    pub language: Option<String>,
    /// Milliseconds since the epoch; `None` means now.
    pub timestamp: Option<u64>,
    pub format_version: u32,
    pub host: String,
}

impl EncodeRequest {
    /// Builds the metadata; invariants are checked by the encoder.
    pub fn metadata(&self) -> Metadata {
        let mut meta = match self.timestamp {
            Some(ts) => Metadata::new(self.content_type, ts),
            None => Metadata::now(self.content_type),
        };
        meta.language = self.language.clone();
        meta.with_version(self.format_version)
    }
}

/// Reads the whole input from a file, or from stdin for `None` / `-`.
pub fn read_input(file: Option<&Path>) -> CliResult<String> {
    let mut content = String::new();
    match file {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading input file");
            content = std::fs::read_to_string(path)?;
        }
        _ => {
            debug!("reading stdin");
            io::stdin().read_to_string(&mut content)?;
        }
    }
    Ok(content)
}

/// Encodes `content` and writes the token followed by a newline.
pub fn encode(request: &EncodeRequest, content: &str, out: &mut impl Write) -> CliResult<()> {
    let meta = request.metadata();
    let options = EncodeOptions::new().with_host(&request.host);
    let token = worktoken::encode_with_options(content, &meta, options)?;
    info!(
        content_len = content.len(),
        token_len = token.len(),
        "encoded"
    );
    writeln!(out, "{token}")?;
    Ok(())
}

/// Decodes a token and writes its content, or content and metadata as JSON.
pub fn decode(token: &str, json: bool, out: &mut impl Write) -> CliResult<()> {
    let decoded = worktoken::decode_token(token.trim())?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &decoded)?;
        writeln!(out)?;
    } else {
        out.write_all(decoded.content.as_bytes())?;
    }
    Ok(())
}

/// Writes a breakdown of a token and fails if its checksum does not verify.
pub fn inspect(token: &str, out: &mut impl Write) -> CliResult<()> {
    let token = parse_token(token.trim())?;
    let path = token.path;

    writeln!(out, "host:        {}", token.host)?;
    writeln!(out, "version:     {}", path.version)?;
    writeln!(out, "type:        {}", path.content_type)?;
    writeln!(out, "data:        {} chars", path.data.len())?;

    let compressed = base62::decode(path.data)?;
    writeln!(out, "compressed:  {} bytes", compressed.len())?;

    let serialized = rle::decompress(&compressed)?;
    let ratio = if serialized.is_empty() {
        0.0
    } else {
        compressed.len() as f64 / serialized.len() as f64
    };
    writeln!(out, "serialized:  {} bytes (ratio {:.2})", serialized.len(), ratio)?;

    let actual = checksum(&serialized);
    if actual == path.checksum {
        writeln!(out, "checksum:    {} (ok)", path.checksum)?;
    } else {
        writeln!(out, "checksum:    {} (content hashes to {})", path.checksum, actual)?;
    }
    verify_checksum(&serialized, path.checksum)?;

    let envelope = deserialize_envelope(&serialized)?;
    let meta = &envelope.meta;
    if let Some(language) = &meta.language {
        writeln!(out, "language:    {language}")?;
    }
    writeln!(out, "timestamp:   {}", meta.timestamp)?;
    writeln!(out, "content:     {} bytes", envelope.data.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use worktoken::DecodeError;

    fn request(content_type: ContentType, language: Option<&str>) -> EncodeRequest {
        EncodeRequest {
            content_type,
            language: language.map(str::to_string),
            timestamp: Some(1_700_000_000_000),
            format_version: 3,
            host: "OneWorkLoc.app".to_string(),
        }
    }

    fn encode_to_string(req: &EncodeRequest, content: &str) -> String {
        let mut out = Vec::new();
        encode(req, content, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_encode_then_decode() {
        let token = encode_to_string(&request(ContentType::Code, Some("rust")), "fn main() {}\n");
        assert!(token.starts_with("OneWorkLoc.app/v3/code/"));
        assert!(token.ends_with('\n'));

        let mut out = Vec::new();
        decode(&token, false, &mut out).unwrap();
        assert_eq!(out, b"fn main() {}\n");
    }

    #[test]
    fn test_decode_json_output() {
        let token = encode_to_string(&request(ContentType::Json, None), "{}");
        let mut out = Vec::new();
        decode(&token, true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["content"], "{}");
        assert_eq!(value["metadata"]["type"], "json");
        assert_eq!(value["metadata"]["timestamp"], 1_700_000_000_000u64);
    }

    #[test]
    fn test_language_without_code_rejected() {
        let mut out = Vec::new();
        let result = encode(&request(ContentType::Text, Some("rust")), "x", &mut out);
        assert!(matches!(result, Err(CliError::Encode(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_inspect_reports_parts() {
        let token = encode_to_string(&request(ContentType::Code, Some("go")), "package main\n");
        let mut out = Vec::new();
        inspect(&token, &mut out).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("host:        OneWorkLoc.app"));
        assert!(report.contains("type:        code"));
        assert!(report.contains("(ok)"));
        assert!(report.contains("language:    go"));
    }

    #[test]
    fn test_inspect_flags_bad_checksum() {
        let token = encode_to_string(&request(ContentType::Text, None), "hello");
        let parsed = parse_token(token.trim()).unwrap();
        let forged_sum = if parsed.path.checksum == "FFFFF" { "EEEEE" } else { "FFFFF" };
        let forged = format!(
            "{}/{}/{}/{}/{}",
            parsed.host, parsed.path.version, parsed.path.content_type, forged_sum, parsed.path.data
        );

        let mut out = Vec::new();
        let result = inspect(&forged, &mut out);
        assert!(matches!(
            result,
            Err(CliError::Decode(DecodeError::ChecksumMismatch { .. }))
        ));
        assert!(String::from_utf8(out).unwrap().contains("content hashes to"));
    }

    #[test]
    fn test_read_input_file() {
        let path = std::env::temp_dir().join(format!("worktoken-cli-{}.txt", std::process::id()));
        std::fs::write(&path, "from a file").unwrap();
        let content = read_input(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(content, "from a file");
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(Some(Path::new("/nonexistent/worktoken/input.txt")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}

//! Canonical JSON serialization of envelopes.
//!
//! Output is compact JSON with keys in declaration order:
//! `{"meta":{"type":..,"language":..,"timestamp":..,"version":..},"data":..}`.
//! The checksum covers these exact bytes, so a decoded envelope must
//! re-serialize identically.

use crate::error::{DecodeError, EncodeError};
use crate::model::Envelope;

/// Serializes an envelope to its canonical JSON form.
pub fn serialize_envelope(envelope: &Envelope<'_>) -> Result<String, EncodeError> {
    serde_json::to_string(envelope).map_err(|e| EncodeError::Serialization(e.to_string()))
}

/// Parses an envelope from serialized bytes and checks its metadata.
pub fn deserialize_envelope(bytes: &[u8]) -> Result<Envelope<'static>, DecodeError> {
    let json = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;
    let envelope: Envelope<'static> =
        serde_json::from_str(json).map_err(|e| DecodeError::MalformedEnvelope(e.to_string()))?;
    envelope
        .meta
        .validate()
        .map_err(|reason| DecodeError::InvalidMetadata { reason })?;
    Ok(envelope)
}

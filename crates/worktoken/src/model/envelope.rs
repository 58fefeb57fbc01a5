//! The serialized unit: metadata plus payload.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::model::Metadata;

/// Metadata and payload, serialized as `{"meta":{...},"data":"..."}`.
///
/// The payload borrows on the encode path so large content is not copied
/// just to be serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<'a> {
    pub meta: Metadata,
    pub data: Cow<'a, str>,
}

impl<'a> Envelope<'a> {
    /// Creates an envelope borrowing its payload.
    pub fn new(meta: Metadata, data: &'a str) -> Self {
        Self {
            meta,
            data: Cow::Borrowed(data),
        }
    }

    /// Converts into an envelope that owns its payload.
    pub fn into_owned(self) -> Envelope<'static> {
        Envelope {
            meta: self.meta,
            data: Cow::Owned(self.data.into_owned()),
        }
    }
}

/// Content and metadata recovered from a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedContent {
    pub content: String,
    pub metadata: Metadata,
}

impl From<Envelope<'_>> for DecodedContent {
    fn from(envelope: Envelope<'_>) -> Self {
        Self {
            content: envelope.data.into_owned(),
            metadata: envelope.meta,
        }
    }
}

//! Turning uploaded files and pasted clipboard items into inline data URIs.
//!
//! The shell owns the actual blobs. The core picks which blob to read, asks
//! for its bytes through [`ImageReader`](crate::capabilities::ImageReader),
//! and encodes whatever comes back.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::capabilities::{BlobHandle, ImageBlob};
use crate::model::DataUri;
use crate::CaptureError;

pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSource {
    Upload,
    Paste,
}

impl CaptureSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Paste => "paste",
        }
    }
}

/// A file chosen in the picker. MIME type is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub handle: BlobHandle,
    pub name: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    pub mime_type: String,
    pub handle: BlobHandle,
}

impl ClipboardItem {
    pub fn is_image(&self) -> bool {
        self.mime_type.contains("image")
    }
}

/// First item that looks like an image; later items are never inspected.
pub fn first_image_item(items: &[ClipboardItem]) -> Option<&ClipboardItem> {
    items.iter().find(|item| item.is_image())
}

/// Declared type if present, else sniffed from magic bytes, else octet-stream.
pub fn resolve_mime_type(declared: &str, bytes: &[u8]) -> String {
    let declared = declared.trim();
    if !declared.is_empty() {
        return declared.to_owned();
    }
    image::guess_format(bytes)
        .map(|format| format.to_mime_type().to_owned())
        .unwrap_or_else(|_| FALLBACK_MIME_TYPE.to_owned())
}

#[instrument(level = "debug", skip(blob), fields(len = blob.bytes.len()))]
pub fn encode_blob(blob: &ImageBlob) -> Result<DataUri, CaptureError> {
    if blob.bytes.is_empty() {
        return Err(CaptureError::EmptyPayload);
    }
    let mime_type = resolve_mime_type(&blob.mime_type, &blob.bytes);
    debug!(%mime_type, "encoding image as data uri");
    Ok(DataUri::from_bytes(&mime_type, &blob.bytes))
}

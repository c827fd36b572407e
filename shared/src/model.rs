use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::config::SheetConfig;
use crate::record_store::RecordStore;
use crate::CaptureError;

pub const MIN_IMAGE_HEIGHT: u16 = 120;
pub const MAX_IMAGE_HEIGHT: u16 = 320;
pub const DEFAULT_IMAGE_HEIGHT: u16 = 160;

// --- Typed IDs ---

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- ImageHeight: always within [MIN_IMAGE_HEIGHT, MAX_IMAGE_HEIGHT] ---

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "u16")]
pub struct ImageHeight(u16);

impl ImageHeight {
    /// Clamps any raw slider value into range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(raw: i64) -> Self {
        let clamped = raw.clamp(i64::from(MIN_IMAGE_HEIGHT), i64::from(MAX_IMAGE_HEIGHT));
        Self(clamped as u16)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl Default for ImageHeight {
    fn default() -> Self {
        Self(DEFAULT_IMAGE_HEIGHT)
    }
}

impl From<i64> for ImageHeight {
    fn from(raw: i64) -> Self {
        Self::clamped(raw)
    }
}

impl From<ImageHeight> for u16 {
    fn from(height: ImageHeight) -> Self {
        height.0
    }
}

// --- DataUri: inline image payload ---

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct DataUri(String);

impl DataUri {
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime_type};base64,{}", STANDARD.encode(bytes)))
    }

    /// Accepts a `data:<mime>;base64,<payload>` string produced by the shell.
    pub fn parse(uri: &str) -> Result<Self, CaptureError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or(CaptureError::InvalidDataUri { reason: "missing data: scheme" })?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or(CaptureError::InvalidDataUri { reason: "missing ;base64, marker" })?;
        if mime_type.is_empty() {
            return Err(CaptureError::InvalidDataUri { reason: "empty mime type" });
        }
        if payload.is_empty() {
            return Err(CaptureError::EmptyPayload);
        }
        STANDARD
            .decode(payload)
            .map_err(|_| CaptureError::InvalidDataUri { reason: "payload is not base64" })?;
        Ok(Self(uri.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map_or("", |(mime, _)| mime)
    }
}

impl TryFrom<String> for DataUri {
    type Error = CaptureError;

    fn try_from(uri: String) -> Result<Self, Self::Error> {
        Self::parse(&uri)
    }
}

// Payloads run to megabytes; keep logs readable.
impl fmt::Debug for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataUri({}, {} bytes)", self.mime_type(), self.0.len())
    }
}

/// One driver/amount/note/receipt entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub driver_name: String,
    /// Raw text as typed; only the aggregator interprets it.
    pub amount: String,
    pub note: String,
    pub image: Option<DataUri>,
    pub image_height: ImageHeight,
}

impl Record {
    pub fn blank() -> Self {
        Self {
            id: RecordId::generate(),
            driver_name: String::new(),
            amount: String::new(),
            note: String::new(),
            image: None,
            image_height: ImageHeight::default(),
        }
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::DriverName(value) => self.driver_name = value,
            FieldUpdate::Amount(value) => self.amount = value,
            FieldUpdate::Note(value) => self.note = value,
            FieldUpdate::Image(uri) => self.image = Some(uri),
            FieldUpdate::ImageHeight(raw) => self.image_height = ImageHeight::clamped(raw),
        }
    }
}

/// A single field edit addressed to one record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldUpdate {
    DriverName(String),
    Amount(String),
    Note(String),
    Image(DataUri),
    ImageHeight(i64),
}

impl FieldUpdate {
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::DriverName(_) => "driver_name",
            Self::Amount(_) => "amount",
            Self::Note(_) => "note",
            Self::Image(_) => "image",
            Self::ImageHeight(_) => "image_height",
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub records: RecordStore,
    pub active_id: Option<RecordId>,
    pub config: SheetConfig,
}

impl Model {
    pub fn with_config(config: SheetConfig) -> Self {
        Self {
            config: config.validated(),
            ..Self::default()
        }
    }

    pub fn is_active(&self, id: &RecordId) -> bool {
        self.active_id.as_ref() == Some(id)
    }
}

// lib.rs - Receipt sheet core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod aggregate;
pub mod app;
pub mod capabilities;
pub mod config;
pub mod event;
pub mod image_capture;
pub mod model;
pub mod record_store;
pub mod view;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::SheetConfig;
pub use crux_core::App as CruxApp;
pub use event::Event;
pub use model::{DataUri, FieldUpdate, ImageHeight, Model, Record, RecordId};
pub use record_store::RecordStore;

use crate::capabilities::ImageReadError;
use crate::view::{EditorView, PrintReport};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("image payload is empty")]
    EmptyPayload,

    #[error("shell could not read image: {0}")]
    Read(#[from] ImageReadError),

    #[error("invalid data uri: {reason}")]
    InvalidDataUri { reason: &'static str },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("print delay {value} ms exceeds maximum of {max} ms")]
    InvalidDelay { value: u64, max: u64 },

    #[error("reporter name must not be empty")]
    EmptyReporter,
}

/// Both renderings, built from the same record snapshot on every render.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub editor: EditorView,
    pub print: PrintReport,
}

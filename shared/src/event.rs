use serde::{Deserialize, Serialize};

use crate::capabilities::ImageReadResult;
use crate::image_capture::{CaptureSource, ClipboardItem, FileRef};
use crate::model::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    AddRecord,
    RemoveRecord {
        id: RecordId,
    },

    DriverNameChanged {
        id: RecordId,
        value: String,
    },
    AmountChanged {
        id: RecordId,
        value: String,
    },
    NoteChanged {
        id: RecordId,
        value: String,
    },
    /// Raw slider value; clamped on apply.
    ImageHeightChanged {
        id: RecordId,
        height: i64,
    },

    RecordFocused {
        id: RecordId,
    },

    /// `None` when the picker was dismissed.
    ImageFileSelected {
        id: RecordId,
        file: Option<FileRef>,
    },
    ClipboardPasted {
        id: RecordId,
        items: Vec<ClipboardItem>,
    },
    /// For shells that encode the image themselves.
    ImageDataUriProvided {
        id: RecordId,
        uri: String,
    },

    PrintRequested,

    // --- capability completions ---
    #[serde(skip)]
    ImageRead {
        id: RecordId,
        source: CaptureSource,
        result: ImageReadResult,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddRecord => "add_record",
            Self::RemoveRecord { .. } => "remove_record",
            Self::DriverNameChanged { .. } => "driver_name_changed",
            Self::AmountChanged { .. } => "amount_changed",
            Self::NoteChanged { .. } => "note_changed",
            Self::ImageHeightChanged { .. } => "image_height_changed",
            Self::RecordFocused { .. } => "record_focused",
            Self::ImageFileSelected { .. } => "image_file_selected",
            Self::ClipboardPasted { .. } => "clipboard_pasted",
            Self::ImageDataUriProvided { .. } => "image_data_uri_provided",
            Self::PrintRequested => "print_requested",
            Self::ImageRead { .. } => "image_read",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        !matches!(self, Self::ImageRead { .. })
    }

    /// The record this event targets, if any.
    #[must_use]
    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            Self::RemoveRecord { id }
            | Self::DriverNameChanged { id, .. }
            | Self::AmountChanged { id, .. }
            | Self::NoteChanged { id, .. }
            | Self::ImageHeightChanged { id, .. }
            | Self::RecordFocused { id }
            | Self::ImageFileSelected { id, .. }
            | Self::ClipboardPasted { id, .. }
            | Self::ImageDataUriProvided { id, .. }
            | Self::ImageRead { id, .. } => Some(id),
            Self::AddRecord | Self::PrintRequested => None,
        }
    }
}

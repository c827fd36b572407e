use chrono::Local;
use tracing::{debug, info, warn};

use crate::capabilities::{BlobHandle, Capabilities};
use crate::event::Event;
use crate::image_capture::{encode_blob, first_image_item, CaptureSource};
use crate::model::{DataUri, FieldUpdate, Model, RecordId};
use crate::view::{editor_view, print_view};
use crate::{CaptureError, ViewModel};

#[derive(Default)]
pub struct App;

impl App {
    fn apply_update(model: &mut Model, caps: &Capabilities, id: &RecordId, update: FieldUpdate) {
        if model.records.update(id, update) {
            caps.render.render();
        }
    }

    fn request_image(
        model: &Model,
        caps: &Capabilities,
        id: RecordId,
        handle: BlobHandle,
        source: CaptureSource,
    ) {
        if !model.records.contains(&id) {
            debug!(record_id = %id, source = source.as_str(), "capture for unknown record ignored");
            return;
        }
        debug!(record_id = %id, source = source.as_str(), handle = handle.as_str(), "reading image");
        caps.image.read(handle, move |result| Event::ImageRead { id, source, result });
    }

    fn focus(model: &mut Model, id: &RecordId) -> bool {
        if model.is_active(id) || !model.records.contains(id) {
            return false;
        }
        model.active_id = Some(id.clone());
        true
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(
            event = event.name(),
            record_id = event.record_id().map(RecordId::as_str),
            user_initiated = event.is_user_initiated(),
            "handling event"
        );

        match event {
            Event::AddRecord => {
                model.records.add();
                caps.render.render();
            }

            Event::RemoveRecord { id } => {
                if model.records.remove(&id) {
                    if model.is_active(&id) {
                        model.active_id = None;
                    }
                    caps.render.render();
                }
            }

            Event::DriverNameChanged { id, value } => {
                Self::apply_update(model, caps, &id, FieldUpdate::DriverName(value));
            }

            Event::AmountChanged { id, value } => {
                Self::apply_update(model, caps, &id, FieldUpdate::Amount(value));
            }

            Event::NoteChanged { id, value } => {
                Self::apply_update(model, caps, &id, FieldUpdate::Note(value));
            }

            Event::ImageHeightChanged { id, height } => {
                Self::apply_update(model, caps, &id, FieldUpdate::ImageHeight(height));
            }

            Event::RecordFocused { id } => {
                if Self::focus(model, &id) {
                    caps.render.render();
                }
            }

            Event::ImageFileSelected { id, file } => {
                let Some(file) = file else {
                    debug!(record_id = %id, "file picker dismissed");
                    return;
                };
                Self::request_image(model, caps, id, file.handle, CaptureSource::Upload);
            }

            Event::ClipboardPasted { id, items } => {
                // Paste only reaches the focused card.
                if Self::focus(model, &id) {
                    caps.render.render();
                }
                match first_image_item(&items) {
                    Some(item) => {
                        Self::request_image(
                            model,
                            caps,
                            id,
                            item.handle.clone(),
                            CaptureSource::Paste,
                        );
                    }
                    None => {
                        debug!(record_id = %id, items = items.len(), "clipboard holds no image");
                    }
                }
            }

            Event::ImageDataUriProvided { id, uri } => match DataUri::parse(&uri) {
                Ok(uri) => Self::apply_update(model, caps, &id, FieldUpdate::Image(uri)),
                Err(e) => warn!(record_id = %id, error = %e, "rejected data uri"),
            },

            Event::ImageRead { id, source, result } => {
                let encoded = result
                    .map_err(CaptureError::from)
                    .and_then(|blob| encode_blob(&blob));
                match encoded {
                    Ok(uri) => {
                        info!(record_id = %id, source = source.as_str(), mime_type = uri.mime_type(), "image attached");
                        Self::apply_update(model, caps, &id, FieldUpdate::Image(uri));
                    }
                    Err(e) => {
                        warn!(record_id = %id, source = source.as_str(), error = %e, "image capture dropped");
                    }
                }
            }

            Event::PrintRequested => {
                info!(
                    records = model.records.len(),
                    delay_ms = model.config.print_delay_ms,
                    "print requested"
                );
                caps.print.print(model.config.print_delay_ms);
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let records = model.records.as_slice();
        ViewModel {
            editor: editor_view(records, model.active_id.as_ref(), &model.config),
            print: print_view(records, Local::now().date_naive(), &model.config),
        }
    }
}

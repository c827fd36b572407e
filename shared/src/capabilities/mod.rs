//! Effects the core asks of the shell.
//!
//! Crux's built-in Render covers view refreshes; image reads and printing
//! are our own capabilities.
mod image;
mod print;

pub use self::image::{
    BlobHandle, ImageBlob, ImageOperation, ImageReadError, ImageReadResult, ImageReader,
};
pub use self::print::{PrintOperation, Printer};
pub use crux_core::render::Render;

use crate::app::App;
use crate::event::Event;

// The Effect derive names variants after the field types; keep them unaliased.
#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub image: ImageReader<Event>,
    pub print: Printer<Event>,
}

use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Asks the shell for the bytes behind a file or clipboard blob it holds.
pub struct ImageReader<E> {
    context: CapabilityContext<ImageOperation, E>,
}

impl<E> Clone for ImageReader<E> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
        }
    }
}

impl<Ev> Capability<Ev> for ImageReader<Ev> {
    type Operation = ImageOperation;
    type MappedSelf<MappedEv> = ImageReader<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        ImageReader::new(self.context.map_event(f))
    }
}

impl<E> ImageReader<E> {
    pub fn new(context: CapabilityContext<ImageOperation, E>) -> Self {
        Self { context }
    }
}

impl<E> ImageReader<E>
where
    E: Send + 'static,
{
    pub fn read<F>(&self, handle: BlobHandle, callback: F)
    where
        F: FnOnce(ImageReadResult) -> E + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let result = context
                .request_from_shell(ImageOperation::Read { handle })
                .await;
            context.update_app(callback(result));
        });
    }
}

/// Shell-side reference to a picked file or clipboard item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BlobHandle(pub String);

impl BlobHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageOperation {
    Read { handle: BlobHandle },
}

impl Operation for ImageOperation {
    type Output = ImageReadResult;
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageBlob {
    /// As reported by the shell; may be empty.
    pub mime_type: String,
    #[serde(with = "serde_bytes")]
    pub bytes: Vec<u8>,
}

impl ImageBlob {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

impl std::fmt::Debug for ImageBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBlob")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageReadError {
    #[error("blob not found: {handle}")]
    NotFound { handle: String },

    #[error("blob could not be read: {reason}")]
    Unreadable { reason: String },

    #[error("read cancelled")]
    Cancelled,
}

pub type ImageReadResult = Result<ImageBlob, ImageReadError>;

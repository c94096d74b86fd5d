//! Upload source contracts: one picked file that can be read fully into a data URL.

use std::{future::Future, pin::Pin};

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Object-safe boxed future used by [`UploadSource`].
pub type UploadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// MIME type assumed when the host reports none.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Metadata the host knows about a picked file before reading it.
pub struct UploadDescriptor {
    /// File name as reported by the picker.
    pub name: String,
    /// Content type; empty host values are replaced by [`FALLBACK_MIME_TYPE`].
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

/// One picked file waiting to be read.
pub trait UploadSource {
    /// Returns the picker metadata for this file.
    fn descriptor(&self) -> UploadDescriptor;

    /// Reads the whole file and encodes it as a `data:` URL.
    fn read_data_url(&self) -> UploadFuture<'_, Result<String, String>>;
}

/// Encodes raw bytes as a base64 `data:` URL.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.trim().is_empty() {
        FALLBACK_MIME_TYPE
    } else {
        mime_type
    };
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

#[derive(Debug, Clone)]
/// Upload source backed by bytes already in memory.
pub struct MemoryUploadSource {
    descriptor: UploadDescriptor,
    bytes: Vec<u8>,
    read_error: Option<String>,
}

impl MemoryUploadSource {
    /// Builds a readable in-memory file.
    pub fn new(name: &str, mime_type: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        Self {
            descriptor: UploadDescriptor {
                name: name.to_string(),
                mime_type: if mime_type.trim().is_empty() {
                    FALLBACK_MIME_TYPE.to_string()
                } else {
                    mime_type.to_string()
                },
                size: bytes.len() as u64,
            },
            bytes,
            read_error: None,
        }
    }

    /// Builds a file whose read always fails with `reason`.
    pub fn unreadable(name: &str, reason: &str) -> Self {
        let mut source = Self::new(name, "", Vec::new());
        source.read_error = Some(reason.to_string());
        source
    }
}

impl UploadSource for MemoryUploadSource {
    fn descriptor(&self) -> UploadDescriptor {
        self.descriptor.clone()
    }

    fn read_data_url(&self) -> UploadFuture<'_, Result<String, String>> {
        Box::pin(async move {
            match &self.read_error {
                Some(reason) => Err(reason.clone()),
                None => Ok(encode_data_url(&self.descriptor.mime_type, &self.bytes)),
            }
        })
    }
}

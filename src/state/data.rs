/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// intake, the edit request client and the UI layer.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use iced::widget::image::Handle;

/// An image the user supplied, ready to display and to send
#[derive(Clone)]
pub struct UploadedImage {
    /// Filename only (e.g., "photo.jpg")
    pub file_name: String,
    /// MIME type declared for the file (e.g., "image/jpeg")
    pub mime_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// Base64 encoding of `bytes`, as sent to the service
    pub base64: String,
    /// Display handle over the in-memory bytes. Dropped with the image.
    pub handle: Handle,
}

impl UploadedImage {
    /// Build an uploaded image from file contents
    pub fn from_bytes(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let base64 = STANDARD.encode(&bytes);
        let handle = Handle::from_bytes(bytes.clone());

        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
            base64,
            handle,
        }
    }
}

/// The edited image returned by the service
#[derive(Clone)]
pub struct EditResult {
    /// Base64 payload exactly as the service returned it
    pub base64: String,
    pub handle: Handle,
}

impl EditResult {
    /// Decode a base64 inline image payload into a displayable result
    pub fn from_base64(base64: String) -> Result<Self, base64::DecodeError> {
        let bytes = STANDARD.decode(base64.trim())?;

        Ok(Self {
            handle: Handle::from_bytes(bytes),
            base64,
        })
    }
}

// Payloads can be megabytes, print sizes instead
impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl std::fmt::Debug for EditResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditResult")
            .field("base64_len", &self.base64.len())
            .finish()
    }
}

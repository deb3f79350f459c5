/// Image intake module
///
/// This module handles:
/// - Validating that a picked or dropped file is an image
/// - Reading it into memory and preparing its base64 payload and display handle
/// - The native file picker and the invalid-file warning

pub mod loader;

pub use loader::{declared_mime_type, load_image, pick_image_file, show_warning};

/// Image file loader
///
/// Turns a path from the file picker or a window drop into an
/// `UploadedImage`. The declared type is derived from the file extension,
/// the same way a browser fills in `File.type`.

use image::ImageFormat;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::IntakeError;
use crate::state::UploadedImage;

/// Extensions offered by the file picker
pub const PICKER_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

/// Filename only, for messages
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Determine the declared MIME type of a file
///
/// # Returns
/// * `Ok(mime)` - an `image/*` MIME type
/// * `Err(IntakeError::NotAnImage)` - the extension is missing or not an image format
pub fn declared_mime_type(path: &Path) -> Result<&'static str, IntakeError> {
    let format = ImageFormat::from_path(path)
        .map_err(|_| IntakeError::NotAnImage(display_name(path)))?;

    let mime = format.to_mime_type();
    if !mime.starts_with("image/") {
        return Err(IntakeError::NotAnImage(display_name(path)));
    }

    Ok(mime)
}

/// Read an image file into memory
///
/// Validates the declared type first, so a non-image never gets read.
pub async fn load_image(path: PathBuf) -> Result<UploadedImage, IntakeError> {
    let mime_type = declared_mime_type(&path)?;
    let file_name = display_name(&path);

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        warn!("⚠️  Failed to read {}: {}", path.display(), e);
        IntakeError::Read {
            name: file_name.clone(),
            reason: e.to_string(),
        }
    })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(UploadedImage::from_bytes(file_name, mime_type, bytes))
}

/// Show the native file picker, filtered to images
pub async fn pick_image_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose an image to edit")
        .add_filter("Images", &PICKER_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Show a warning dialog and wait for the user to dismiss it
pub async fn show_warning(message: String) {
    rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Invalid file")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_mime_types() {
        assert_eq!(declared_mime_type(Path::new("photo.jpg")).unwrap(), "image/jpeg");
        assert_eq!(declared_mime_type(Path::new("photo.JPEG")).unwrap(), "image/jpeg");
        assert_eq!(declared_mime_type(Path::new("/tmp/shot.png")).unwrap(), "image/png");
        assert_eq!(declared_mime_type(Path::new("anim.gif")).unwrap(), "image/gif");
        assert_eq!(declared_mime_type(Path::new("pic.webp")).unwrap(), "image/webp");
    }

    #[test]
    fn test_non_images_rejected() {
        for name in ["document.pdf", "notes.txt", "archive.zip", "no_extension"] {
            let err = declared_mime_type(Path::new(name)).unwrap_err();
            assert!(matches!(err, IntakeError::NotAnImage(_)), "{}", name);
        }
    }

    #[tokio::test]
    async fn test_load_image_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let image = load_image(path).await.unwrap();
        assert_eq!(image.file_name, "photo.jpg");
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(image.base64, "/9j/4A==");
    }

    #[tokio::test]
    async fn test_load_image_rejects_pdf_without_reading() {
        // The file does not even exist; the extension alone decides
        let err = load_image(PathBuf::from("/nonexistent/document.pdf")).await.unwrap_err();
        assert_eq!(err, IntakeError::NotAnImage("document.pdf".to_string()));
    }

    #[tokio::test]
    async fn test_load_image_missing_file() {
        let err = load_image(PathBuf::from("/nonexistent/path.png")).await.unwrap_err();
        assert!(matches!(err, IntakeError::Read { ref name, .. } if name == "path.png"));
    }
}

//! Asset Loading
//!
//! Reads client files from disk into attachment parts: binary files become
//! base64 inline data with an extension-derived mime type, instruction files
//! are read as UTF-8 text.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::types::{AdforgeError, Attachment, Result};

/// Load one binary asset as an inline attachment.
pub fn load_attachment(path: &Path) -> Result<Attachment> {
    let bytes = std::fs::read(path)
        .map_err(|e| AdforgeError::config(format!("cannot read {}: {e}", path.display())))?;

    Ok(Attachment {
        mime_type: mime_for_path(path).to_string(),
        data: BASE64.encode(bytes),
    })
}

/// Load a text-instruction file as UTF-8.
pub fn load_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| AdforgeError::config(format!("cannot read {}: {e}", path.display())))
}

/// Mime type from the file extension. The intake form only accepts a known
/// set of image/audio/text formats; anything else is sent as a generic
/// binary stream and left for the model to reject.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "txt" | "md" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mime_detection() {
        assert_eq!(mime_for_path(Path::new("logo.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("card.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("note.mp3")), "audio/mpeg");
        assert_eq!(
            mime_for_path(Path::new("mystery.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_path(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_load_attachment_encodes_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"fakepng").unwrap();

        let attachment = load_attachment(&path).unwrap();
        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.data, BASE64.encode(b"fakepng"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = load_attachment(&PathBuf::from("/nonexistent/logo.png")).unwrap_err();
        assert!(matches!(err, AdforgeError::Config(_)));
    }

    #[test]
    fn test_load_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "emphasize the anniversary offer").unwrap();

        assert_eq!(
            load_text(&path).unwrap(),
            "emphasize the anniversary offer"
        );
    }
}

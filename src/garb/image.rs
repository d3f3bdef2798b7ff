//! Attached item photos are stored inline as `data:` URLs, matching the
//! legacy stored shape. Only the encoding lives here; capture and picking
//! are the user's shell and filesystem.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fs;
use std::path::Path;

use crate::error::{GarbError, Result};

const IMAGE_TYPES: [(&str, &str); 5] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

/// Read an image file and encode it as a base64 data URL.
///
/// A non-image extension is a validation failure; an unreadable file is a
/// capability failure (the caller keeps the item flow alive either way).
pub fn encode_image(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let mime = IMAGE_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, m)| *m)
        .ok_or_else(|| GarbError::Validation("Please select an image file.".to_string()))?;

    let bytes = fs::read(path).map_err(|e| {
        GarbError::Capability(format!("Could not read {}: {}", path.display(), e))
    })?;

    Ok(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png_as_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shirt.PNG");
        fs::write(&path, [0x89, 0x50, 0x4e, 0x47]).unwrap();

        let url = encode_image(&path).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn rejects_non_image_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hi").unwrap();

        assert!(matches!(
            encode_image(&path),
            Err(GarbError::Validation(_))
        ));
    }

    #[test]
    fn missing_file_is_a_capability_failure() {
        let err = encode_image(Path::new("/nonexistent/photo.jpg")).unwrap_err();
        assert!(matches!(err, GarbError::Capability(_)));
    }
}

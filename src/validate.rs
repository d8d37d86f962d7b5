use std::path::{Path, PathBuf};

use crate::client::ClientError;

/// Upload ceiling enforced before any network I/O, matching the backend's
/// advertised limit.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Extension-to-MIME table for the formats the backend accepts. The CLI
/// analog of the browser's `file.type` check.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

/// A file that passed the pre-flight checks for `/api/analyze`.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub len: u64,
    pub mime: &'static str,
}

impl ImageFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }

    /// Size in megabytes, for user-facing messages.
    pub fn size_mb(&self) -> f64 {
        self.len as f64 / (1024.0 * 1024.0)
    }
}

/// Validate a candidate upload: must exist, look like an image, and be at
/// most [`MAX_IMAGE_BYTES`]. Violations never reach the network.
pub fn inspect(path: &Path) -> Result<ImageFile, ClientError> {
    let meta = std::fs::metadata(path)
        .map_err(|e| ClientError::Validation(format!("cannot read {}: {e}", path.display())))?;
    if !meta.is_file() {
        return Err(ClientError::Validation(format!(
            "{} is not a file",
            path.display()
        )));
    }

    let mime = image_mime(path).ok_or_else(|| {
        ClientError::Validation("please select a valid image file".to_string())
    })?;

    if meta.len() > MAX_IMAGE_BYTES {
        return Err(ClientError::Validation(
            "image file size must be less than 10MB".to_string(),
        ));
    }

    Ok(ImageFile {
        path: path.to_path_buf(),
        len: meta.len(),
        mime,
    })
}

fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Verification document slots, the profile photo, and the checks applied to
//! a picked file.

use crate::errors::SignupError;
use std::path::Path;

pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

/// Profile photos must be images.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot {
    IdProof,
    License,
}

impl DocumentSlot {
    pub fn all() -> &'static [DocumentSlot] {
        &[DocumentSlot::IdProof, DocumentSlot::License]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentSlot::IdProof => "ID proof",
            DocumentSlot::License => "license",
        }
    }
}

/// A file accepted for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub file_name: String,
    pub size_bytes: u64,
}

impl UploadedDocument {
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }

    /// e.g. `passport.pdf (0.25 MB)`
    pub fn display(&self) -> String {
        format!("{} ({:.2} MB)", self.file_name, self.size_mb())
    }
}

fn extension_in(path: &Path, accepted: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            accepted.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

pub fn has_accepted_extension(path: &Path) -> bool {
    extension_in(path, ACCEPTED_EXTENSIONS)
}

/// Check that `path` names an existing regular file of an accepted type.
pub fn inspect_document(path: &Path) -> Result<UploadedDocument, SignupError> {
    if !has_accepted_extension(path) {
        return Err(SignupError::UnsupportedDocument(path.display().to_string()));
    }
    inspect_file(path)
}

/// Like [`inspect_document`], but only image types are accepted.
pub fn inspect_photo(path: &Path) -> Result<UploadedDocument, SignupError> {
    if !extension_in(path, PHOTO_EXTENSIONS) {
        return Err(SignupError::UnsupportedPhoto(path.display().to_string()));
    }
    inspect_file(path)
}

fn inspect_file(path: &Path) -> Result<UploadedDocument, SignupError> {
    let metadata = std::fs::metadata(path)
        .map_err(|_| SignupError::DocumentNotFound(path.display().to_string()))?;
    if !metadata.is_file() {
        return Err(SignupError::DocumentNotFound(path.display().to_string()));
    }
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(UploadedDocument {
        file_name,
        size_bytes: metadata.len(),
    })
}

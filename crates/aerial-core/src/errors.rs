use thiserror::Error;

/// Result type alias for signup operations
pub type Result<T> = anyhow::Result<T>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("You can invite up to {limit} members")]
    MemberLimit { limit: usize },

    #[error("Step {step} cannot save {data} data")]
    StepMismatch { step: u8, data: &'static str },

    #[error("Unsupported document type: {0} (accepted: .pdf, .jpg, .jpeg, .png)")]
    UnsupportedDocument(String),

    #[error("Profile photo must be an image: {0} (accepted: .jpg, .jpeg, .png, .gif, .webp)")]
    UnsupportedPhoto(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Storage failed: {0}")]
    Storage(String),
}

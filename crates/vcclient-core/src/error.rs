use thiserror::Error;

#[derive(Error, Debug)]
pub enum VcClientError {
    #[error("Upload failed: {0}")]
    Upload(#[from] crate::UploadFailure),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VcClientError>;

//! Upload requests that install a sample into a server model slot.

use crate::{SampleKind, SampleModel};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per voice changer parameters sent with a sample upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadParams {
    Rvc {
        #[serde(rename = "useIndex")]
        use_index: bool,
    },
    DiffusionSvc {},
}

impl UploadParams {
    /// Defaults used when installing a sample; `None` for unsupported types.
    pub fn for_kind(kind: &SampleKind) -> Option<Self> {
        match kind {
            SampleKind::Rvc { .. } => Some(UploadParams::Rvc { use_index: true }),
            SampleKind::DiffusionSvc { .. } => Some(UploadParams::DiffusionSvc {}),
            SampleKind::Other { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub voice_changer_type: String,
    pub slot: u32,
    pub is_sample_mode: bool,
    pub sample_id: String,
    pub files: Vec<String>,
    pub params: UploadParams,
}

impl UploadRequest {
    /// Request that installs `sample` into `slot`.
    pub fn for_sample(sample: &SampleModel, slot: u32) -> Option<Self> {
        let params = UploadParams::for_kind(&sample.kind)?;
        Some(Self {
            voice_changer_type: sample.voice_changer_type().to_string(),
            slot,
            is_sample_mode: true,
            sample_id: sample.id.clone(),
            files: Vec::new(),
            params,
        })
    }
}

/// A rejected upload. Only the display text is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct UploadFailure(pub String);

impl UploadFailure {
    pub fn new(message: impl ToString) -> Self {
        Self(message.to_string())
    }
}

/// Transfers a model into a server slot.
#[async_trait(?Send)]
pub trait UploadGateway {
    async fn upload_model(&self, request: &UploadRequest) -> Result<(), UploadFailure>;
}

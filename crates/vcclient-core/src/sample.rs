//! Sample model descriptors published by the voice-changer server.

use serde::{Deserialize, Serialize};

pub const RVC: &str = "RVC";
pub const DIFFUSION_SVC: &str = "Diffusion-SVC";

/// Variant-specific part of a sample, selected by its `voiceChangerType` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleKind {
    Rvc {
        model_type: String,
        f0: bool,
        sample_rate: u32,
    },
    DiffusionSvc {
        num_of_native_layers: u32,
        num_of_diff_layers: u32,
        max_k_step: u32,
    },
    /// A voice changer this client has no sample support for.
    Other { voice_changer_type: String },
}

impl SampleKind {
    pub fn voice_changer_type(&self) -> &str {
        match self {
            SampleKind::Rvc { .. } => RVC,
            SampleKind::DiffusionSvc { .. } => DIFFUSION_SVC,
            SampleKind::Other { voice_changer_type } => voice_changer_type,
        }
    }

    /// One-line summary of the variant fields, empty for unsupported types.
    pub fn info(&self) -> String {
        match self {
            SampleKind::Rvc {
                model_type,
                f0,
                sample_rate,
            } => format!(
                "type:{}, f0:{}, sr:{}",
                model_type,
                if *f0 { "f0" } else { "nof0" },
                sample_rate
            ),
            SampleKind::DiffusionSvc {
                num_of_native_layers,
                num_of_diff_layers,
                max_k_step,
            } => format!(
                "native_l:{}, diff_l:{}, max_kstep:{}",
                num_of_native_layers, num_of_diff_layers, max_k_step
            ),
            SampleKind::Other { .. } => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SampleModelRecord", into = "SampleModelRecord")]
pub struct SampleModel {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub lang: String,
    pub terms_of_use_url: Option<String>,
    pub tag: Vec<String>,
    pub model_url: Option<String>,
    pub credit: Option<String>,
    pub description: Option<String>,
    pub kind: SampleKind,
}

impl SampleModel {
    pub fn voice_changer_type(&self) -> &str {
        self.kind.voice_changer_type()
    }

    pub fn info(&self) -> String {
        self.kind.info()
    }

    /// Terms-of-use link, only when the server sent a non-empty URL.
    pub fn terms_of_use(&self) -> Option<&str> {
        self.terms_of_use_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Flat wire shape of a sample. Variant fields the tag does not use are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleModelRecord {
    id: String,
    #[serde(default)]
    voice_changer_type: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    terms_of_use_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tag: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    // RVC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    f0: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_rate: Option<u32>,

    // Diffusion-SVC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_of_native_layers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_of_diff_layers: Option<u32>,
    #[serde(rename = "maxKStep", default, skip_serializing_if = "Option::is_none")]
    max_k_step: Option<u32>,
}

impl From<SampleModelRecord> for SampleModel {
    fn from(record: SampleModelRecord) -> Self {
        let kind = match record.voice_changer_type.as_str() {
            RVC => SampleKind::Rvc {
                model_type: record.model_type.unwrap_or_default(),
                f0: record.f0.unwrap_or_default(),
                sample_rate: record.sample_rate.unwrap_or_default(),
            },
            DIFFUSION_SVC => SampleKind::DiffusionSvc {
                num_of_native_layers: record.num_of_native_layers.unwrap_or_default(),
                num_of_diff_layers: record.num_of_diff_layers.unwrap_or_default(),
                max_k_step: record.max_k_step.unwrap_or_default(),
            },
            _ => SampleKind::Other {
                voice_changer_type: record.voice_changer_type,
            },
        };

        Self {
            id: record.id,
            name: record.name,
            icon: record.icon,
            lang: record.lang,
            terms_of_use_url: record.terms_of_use_url,
            tag: record.tag,
            model_url: record.model_url,
            credit: record.credit,
            description: record.description,
            kind,
        }
    }
}

impl From<SampleModel> for SampleModelRecord {
    fn from(sample: SampleModel) -> Self {
        let mut record = SampleModelRecord {
            id: sample.id,
            voice_changer_type: sample.kind.voice_changer_type().to_string(),
            name: sample.name,
            icon: sample.icon,
            lang: sample.lang,
            terms_of_use_url: sample.terms_of_use_url,
            tag: sample.tag,
            model_url: sample.model_url,
            credit: sample.credit,
            description: sample.description,
            ..Default::default()
        };

        match sample.kind {
            SampleKind::Rvc {
                model_type,
                f0,
                sample_rate,
            } => {
                record.model_type = Some(model_type);
                record.f0 = Some(f0);
                record.sample_rate = Some(sample_rate);
            }
            SampleKind::DiffusionSvc {
                num_of_native_layers,
                num_of_diff_layers,
                max_k_step,
            } => {
                record.num_of_native_layers = Some(num_of_native_layers);
                record.num_of_diff_layers = Some(num_of_diff_layers);
                record.max_k_step = Some(max_k_step);
            }
            SampleKind::Other { .. } => {}
        }

        record
    }
}

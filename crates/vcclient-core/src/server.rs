use crate::SampleModel;
use serde::{Deserialize, Deserializer, Serialize};

/// The part of the server's `/info` payload the slot manager reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSetting {
    /// Absent until the server has reported its slots.
    #[serde(default)]
    pub model_slots: Option<Vec<ModelSlot>>,
    #[serde(default)]
    pub sample_models: Vec<SampleModel>,
}

impl ServerSetting {
    pub fn has_model_slots(&self) -> bool {
        self.model_slots.is_some()
    }

    pub fn slots(&self) -> &[ModelSlot] {
        self.model_slots.as_deref().unwrap_or_default()
    }
}

/// The server writes `null` for unset fields of a blank slot.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSlot {
    /// `-1` for a blank slot.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slot_index: i32,
    #[serde(default)]
    pub voice_changer_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_file: String,
}

impl ModelSlot {
    pub fn is_empty(&self) -> bool {
        self.slot_index < 0
            || matches!(self.voice_changer_type.as_deref(), None | Some("") | Some("None"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_slots_is_absent() {
        let setting: ServerSetting = serde_json::from_str(r#"{"sampleModels": []}"#).unwrap();
        assert!(!setting.has_model_slots());
        assert!(setting.slots().is_empty());
    }

    #[test]
    fn test_ignores_unrelated_server_fields() {
        let json = r#"{
            "status": "OK",
            "gpu": 0,
            "modelSlots": [
                {"slotIndex": 0, "voiceChangerType": "RVC", "name": "tsukuyomi", "iconFile": "icon.png", "f0": true},
                {"slotIndex": 1}
            ],
            "sampleModels": [
                {"id": "a", "voiceChangerType": "RVC", "lang": "ja", "name": "a", "icon": ""}
            ]
        }"#;

        let setting: ServerSetting = serde_json::from_str(json).unwrap();
        assert_eq!(setting.slots().len(), 2);
        assert_eq!(setting.slots()[0].name, "tsukuyomi");
        assert_eq!(setting.sample_models[0].id, "a");
        assert!(!setting.slots()[0].is_empty());
        assert!(setting.slots()[1].is_empty());
    }

    #[test]
    fn test_blank_slot_written_with_nulls() {
        let json = r#"{
            "modelSlots": [
                {"slotIndex": 0, "voiceChangerType": "RVC", "name": "tsukuyomi", "iconFile": "icon.png"},
                {"slotIndex": -1, "voiceChangerType": null, "name": null, "iconFile": null}
            ],
            "sampleModels": []
        }"#;

        let setting: ServerSetting = serde_json::from_str(json).unwrap();
        assert!(setting.has_model_slots());
        assert_eq!(setting.slots().len(), 2);

        let blank = &setting.slots()[1];
        assert_eq!(blank.slot_index, -1);
        assert_eq!(blank.voice_changer_type, None);
        assert_eq!(blank.name, "");
        assert!(blank.is_empty());
    }

    #[test]
    fn test_negative_index_is_blank_even_with_type() {
        let slot: ModelSlot =
            serde_json::from_str(r#"{"slotIndex": -1, "voiceChangerType": "RVC"}"#).unwrap();
        assert!(slot.is_empty());

        let slot: ModelSlot =
            serde_json::from_str(r#"{"slotIndex": 1, "voiceChangerType": "None"}"#).unwrap();
        assert!(slot.is_empty());
    }
}

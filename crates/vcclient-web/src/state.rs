use async_trait::async_trait;
use leptos::prelude::*;
use vcclient_core::{
    ClientConfig, MessageBuilder, ServerSetting, UploadFailure, UploadGateway, UploadRequest,
};
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::api;

/// Shared application state provided at the root of the app.
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: StoredValue<ClientConfig>,
    pub server_setting: RwSignal<ServerSetting>,
    pub messages: StoredValue<MessageBuilder>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        let messages = MessageBuilder::new(config.ui.lang.clone());
        Self {
            config: StoredValue::new(config),
            server_setting: RwSignal::new(ServerSetting::default()),
            messages: StoredValue::new(messages),
        }
    }

    pub async fn reload_server_setting(&self) -> Result<(), String> {
        let server = self.config.with_value(|c| c.server.clone());
        let setting = api::fetch_info(&server).await?;
        self.server_setting.set(setting);
        Ok(())
    }

    pub fn message(&self, component: &str, key: &str) -> String {
        self.messages.with_value(|m| m.get_message(component, key))
    }
}

#[async_trait(?Send)]
impl UploadGateway for AppState {
    async fn upload_model(&self, request: &UploadRequest) -> Result<(), UploadFailure> {
        let server = self.config.with_value(|c| c.server.clone());
        api::load_model(&server, request)
            .await
            .map_err(UploadFailure::new)?;

        // The slot list changed on the server; a stale list is not an upload failure.
        if let Err(e) = self.reload_server_setting().await {
            console::warn_1(&JsValue::from_str(&format!("Failed to refresh server info: {}", e)));
        }
        Ok(())
    }
}

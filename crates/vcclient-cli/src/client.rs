use async_trait::async_trait;
use reqwest::multipart::Form;
use vcclient_core::{
    Result, ServerConfig, ServerSetting, UploadFailure, UploadGateway, UploadRequest,
    VcClientError,
};

/// HTTP client for the voice-changer server.
#[derive(Debug, Clone)]
pub struct ServerClient {
    server: ServerConfig,
    client: reqwest::Client,
}

impl ServerClient {
    pub fn new(server: ServerConfig) -> Self {
        Self {
            server,
            client: reqwest::Client::new(),
        }
    }

    pub fn host(&self) -> &str {
        &self.server.host
    }

    pub async fn fetch_info(&self) -> Result<ServerSetting> {
        let resp = self
            .client
            .get(self.server.url("/info"))
            .send()
            .await
            .map_err(|e| VcClientError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(VcClientError::Http(format!(
                "Failed to fetch server info: {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| VcClientError::Http(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn load_model(&self, request: &UploadRequest) -> Result<()> {
        let form = Form::new()
            .text("slot", request.slot.to_string())
            .text("isHalf", "false")
            .text("params", serde_json::to_string(request)?);

        let resp = self
            .client
            .post(self.server.url("/load_model"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| VcClientError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(VcClientError::Http(format!(
                "Failed to load model: {} - {}",
                status,
                body.chars().take(500).collect::<String>()
            )));
        }

        tracing::debug!("load_model accepted for slot {}", request.slot);
        Ok(())
    }
}

#[async_trait(?Send)]
impl UploadGateway for ServerClient {
    async fn upload_model(&self, request: &UploadRequest) -> std::result::Result<(), UploadFailure> {
        self.load_model(request).await.map_err(UploadFailure::new)
    }
}

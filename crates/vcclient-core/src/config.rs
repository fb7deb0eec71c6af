use crate::{Result, VcClientError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "http://localhost:18888";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, lang: impl Into<String>) -> Result<Self> {
        let host = host.into();
        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(VcClientError::Config(format!(
                "server host must be an http(s) URL: {host}"
            )));
        }
        Ok(Self {
            server: ServerConfig {
                host: host.trim_end_matches('/').to_string(),
            },
            ui: UiConfig { lang: lang.into() },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub lang: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            lang: crate::messages::FALLBACK_LANG.to_string(),
        }
    }
}

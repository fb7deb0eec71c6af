use gloo_net::http::Request;
use vcclient_core::{ServerConfig, ServerSetting, UploadRequest};
use wasm_bindgen::JsValue;
use web_sys::FormData;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

pub async fn fetch_info(server: &ServerConfig) -> Result<ServerSetting, String> {
    Request::get(&server.url("/info"))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Installs a model into a slot. Sample uploads carry no files, only the request JSON.
pub async fn load_model(server: &ServerConfig, request: &UploadRequest) -> Result<(), String> {
    let params = serde_json::to_string(request).map_err(|e| e.to_string())?;

    let form = FormData::new().map_err(js_err)?;
    form.append_with_str("slot", &request.slot.to_string())
        .map_err(js_err)?;
    form.append_with_str("isHalf", "false").map_err(js_err)?;
    form.append_with_str("params", &params).map_err(js_err)?;

    let resp = Request::post(&server.url("/load_model"))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.ok() {
        Ok(())
    } else {
        Err(format!("Failed to load model: {}", resp.status()))
    }
}

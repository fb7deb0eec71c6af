use leptos::prelude::*;
use vcclient_core::downloader::{keys, COMPONENT_ID};
use vcclient_core::{register_messages, ClientConfig, ServerSetting};
use vcclient_web::state::AppState;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn app_state(lang: &str) -> AppState {
    AppState::new(ClientConfig::new("http://localhost:18888", lang).unwrap())
}

#[wasm_bindgen_test]
fn labels_follow_browser_language() {
    let owner = Owner::new();
    owner.set();

    let state = app_state("ja-JP");
    state.messages.update_value(register_messages);
    assert_eq!(state.message(COMPONENT_ID, keys::BACK), "戻る");

    let state = app_state("de");
    state.messages.update_value(register_messages);
    assert_eq!(state.message(COMPONENT_ID, keys::DOWNLOAD), "download");
}

#[wasm_bindgen_test]
fn server_setting_starts_without_slots() {
    let owner = Owner::new();
    owner.set();

    let state = app_state("en");
    assert_eq!(state.server_setting.get_untracked(), ServerSetting::default());
    assert!(!state.server_setting.with_untracked(|s| s.has_model_slots()));
}

use leptos::prelude::*;
use vcclient_core::ClientConfig;
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::components::header::Header;
use crate::components::slot_manager::ModelSlotManagerDialog;
use crate::state::AppState;

/// The client is served by the voice-changer server, so API calls go to the page origin.
fn browser_config() -> ClientConfig {
    let Some(window) = web_sys::window() else {
        return ClientConfig::default();
    };
    let lang = window
        .navigator()
        .language()
        .unwrap_or_else(|| ClientConfig::default().ui.lang);

    let origin = window.location().origin().unwrap_or_default();
    ClientConfig::new(origin, lang).unwrap_or_else(|e| {
        console::warn_1(&JsValue::from_str(&e.to_string()));
        ClientConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(browser_config());
    provide_context(state);

    let (dialog_open, set_dialog_open) = signal(true);
    let (connected, set_connected) = signal(false);

    // Fetch server info on mount
    Effect::new(move || {
        wasm_bindgen_futures::spawn_local(async move {
            match state.reload_server_setting().await {
                Ok(()) => set_connected.set(true),
                Err(e) => {
                    console::error_1(&JsValue::from_str(&format!("Failed to fetch server info: {}", e)));
                    set_connected.set(false);
                }
            }
        });
    });

    view! {
        <div class="app">
            <Header connected=connected />
            <main class="content">
                <button class="run-btn" on:click=move |_| set_dialog_open.set(true)>"Model Slots"</button>
                {move || dialog_open.get().then(|| view! {
                    <ModelSlotManagerDialog close=move || set_dialog_open.set(false) />
                })}
            </main>
        </div>
    }
}

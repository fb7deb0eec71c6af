use leptos::mount::mount_to;
use leptos::prelude::*;
use vcclient_core::{ClientConfig, DialogScreen, ServerSetting};
use vcclient_web::components::sample_downloader::SampleDownloaderScreen;
use vcclient_web::state::AppState;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

const SETTING: &str = r#"{
    "modelSlots": [{"slotIndex": 0, "voiceChangerType": "RVC", "name": "tsukuyomi", "iconFile": ""}],
    "sampleModels": [
        {"id": "KikotoKurage_o", "voiceChangerType": "RVC", "lang": "ja", "name": "Kurage", "icon": "",
         "termsOfUseUrl": "", "modelType": "pyTorchRVCv2", "f0": true, "sampleRate": 40000},
        {"id": "Tsukuyomi", "voiceChangerType": "RVC", "lang": "ja", "name": "Tsukuyomi", "icon": "",
         "termsOfUseUrl": "https://example.com/terms", "modelType": "pyTorchRVCv2", "f0": true, "sampleRate": 40000}
    ]
}"#;

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn screen(setting: ServerSetting) -> impl IntoView {
    let state = AppState::new(ClientConfig::new("http://localhost:18888", "en").unwrap());
    state.server_setting.set(setting);
    provide_context(state);

    view! {
        <SampleDownloaderScreen
            screen=Signal::stored(DialogScreen::SampleDownloader)
            target_index=Signal::stored(2u32)
            close=|| {}
            back_to_slot_manager=|| {}
        />
    }
}

#[wasm_bindgen_test]
fn terms_link_only_for_samples_with_url() {
    let parent = container();
    let setting: ServerSetting = serde_json::from_str(SETTING).unwrap();
    let _handle = mount_to(parent.clone(), move || screen(setting));

    let html = parent.inner_html();
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains("Slot[2]"));

    let link = parent.query_selector("a").unwrap().unwrap();
    assert_eq!(
        link.get_attribute("href").as_deref(),
        Some("https://example.com/terms")
    );
    assert_eq!(link.get_attribute("target").as_deref(), Some("_blank"));
    assert_eq!(
        link.get_attribute("rel").as_deref(),
        Some("noopener noreferrer")
    );
}

#[wasm_bindgen_test]
fn renders_nothing_before_slots_are_reported() {
    let parent = container();
    let setting = ServerSetting {
        model_slots: None,
        ..serde_json::from_str(SETTING).unwrap()
    };
    let _handle = mount_to(parent.clone(), move || screen(setting));

    assert!(!parent.inner_html().contains("dialog-frame"));
}

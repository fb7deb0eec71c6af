use leptos::callback::Callable;
use leptos::prelude::*;
use vcclient_core::downloader::{keys, COMPONENT_ID};
use vcclient_core::{
    download_sample, register_messages, DialogScreen, DownloaderView, LanguageFilter,
    UploadRequest,
};

use crate::notify::BrowserAlert;
use crate::state::AppState;

#[component]
pub fn SampleDownloaderScreen(
    #[prop(into)] screen: Signal<DialogScreen>,
    #[prop(into)] target_index: Signal<u32>,
    #[prop(into)] close: Callback<()>,
    #[prop(into)] back_to_slot_manager: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let (lang, set_lang) = signal(LanguageFilter::All);

    // Labels are registered once per mount
    state.messages.update_value(register_messages);
    let label = move |key: &str| state.message(COMPONENT_ID, key);

    let screen_view = Memo::new(move |_| {
        let selected = lang.get();
        state.server_setting.with(|setting| {
            DownloaderView::build(screen.get(), target_index.get(), &selected, setting)
        })
    });

    let on_download = move |request: UploadRequest| {
        wasm_bindgen_futures::spawn_local(async move {
            download_sample(&request, &state, &BrowserAlert, || {
                back_to_slot_manager.run(())
            })
            .await;
        });
    };

    move || {
        screen_view.get().map(|vm| {
            let selected = vm.selected.to_string();
            let lang_options = vm
                .language_options
                .into_iter()
                .map(|l| {
                    let is_selected = l == selected;
                    view! { <option value=l.clone() selected=is_selected>{l.clone()}</option> }
                })
                .collect_view();

            let entries = vm
                .entries
                .into_iter()
                .map(|entry| {
                    let terms_link = entry.terms_of_use_url.map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="body-item-text-small">
                                "[" {label(keys::TERMS_OF_USE)} "]"
                            </a>
                        }
                    });
                    let request = entry.download;

                    view! {
                        <div class="model-slot">
                            <img src=entry.icon class="model-slot-icon" />
                            <div class="model-slot-detail">
                                <div class="model-slot-detail-row">
                                    <div class="model-slot-detail-row-label">"name:"</div>
                                    <div class="model-slot-detail-row-value">{entry.name}</div>
                                    <div>{terms_link}</div>
                                </div>
                                <div class="model-slot-detail-row">
                                    <div class="model-slot-detail-row-label">"VC Type: "</div>
                                    <div class="model-slot-detail-row-value">{entry.voice_changer_type}</div>
                                    <div></div>
                                </div>
                                <div class="model-slot-detail-row">
                                    <div class="model-slot-detail-row-label">"info: "</div>
                                    <div class="model-slot-detail-row-value">{entry.info}</div>
                                    <div></div>
                                </div>
                            </div>
                            <div class="model-slot-buttons">
                                <div
                                    class="model-slot-button"
                                    on:click=move |_| {
                                        if let Some(request) = request.clone() {
                                            on_download(request);
                                        }
                                    }
                                >
                                    {label(keys::DOWNLOAD)}
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="dialog-frame">
                    <div class="dialog-title">
                        "Sample Downloader"
                        <span class="dialog-close-button" on:click=move |_| close.run(())>"×"</span>
                    </div>
                    <div class="dialog-fixed-size-content">
                        <div class="model-slot-header">
                            {label(keys::HEADER_MESSAGE)} " Slot[" {vm.target_index} "]"
                            <span
                                class="model-slot-header-button"
                                on:click=move |_| back_to_slot_manager.run(())
                            >
                                "<<" {label(keys::BACK)}
                            </span>
                        </div>
                        <div>
                            {label(keys::LANG)} ":"
                            <select on:change=move |ev| {
                                set_lang.set(LanguageFilter::parse(&event_target_value(&ev)))
                            }>
                                {lang_options}
                            </select>
                        </div>
                        <div class="model-slot-container">{entries}</div>
                    </div>
                </div>
            }
        })
    }
}

use leptos::callback::Callable;
use leptos::prelude::*;
use vcclient_core::DialogScreen;

use crate::components::sample_downloader::SampleDownloaderScreen;
use crate::state::AppState;

/// Lists the server's model slots and hosts the per-slot screens.
#[component]
pub fn ModelSlotManagerDialog(#[prop(into)] close: Callback<()>) -> impl IntoView {
    let state = expect_context::<AppState>();
    let (screen, set_screen) = signal(DialogScreen::Main);
    let (target_index, set_target_index) = signal(0u32);

    let back_to_slot_manager = Callback::new(move |_: ()| set_screen.set(DialogScreen::Main));

    let slot_list = move || {
        state
            .server_setting
            .with(|s| s.slots().to_vec())
            .into_iter()
            .enumerate()
            .map(|(position, slot)| {
                // Blank slots report index -1, so the list position is the slot number.
                let index = position as u32;
                let name = if slot.is_empty() {
                    "blank".to_string()
                } else {
                    slot.name
                };
                view! {
                    <div class="model-slot">
                        <div class="model-slot-detail">
                            <div class="model-slot-detail-row">
                                <div class="model-slot-detail-row-label">{format!("[{}]", index)}</div>
                                <div class="model-slot-detail-row-value">{name}</div>
                                <div>{slot.voice_changer_type.unwrap_or_default()}</div>
                            </div>
                        </div>
                        <div class="model-slot-buttons">
                            <div
                                class="model-slot-button"
                                on:click=move |_| {
                                    set_target_index.set(index);
                                    set_screen.set(DialogScreen::SampleDownloader);
                                }
                            >
                                "from sample"
                            </div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dialog-container">
            {move || (screen.get() == DialogScreen::Main).then(|| view! {
                <div class="dialog-frame">
                    <div class="dialog-title">"Model Slot Configuration"</div>
                    <div class="dialog-fixed-size-content">
                        <div class="model-slot-container">{slot_list}</div>
                        <div class="model-slot-header-button" on:click=move |_| close.run(())>
                            "close"
                        </div>
                    </div>
                </div>
            })}
            <SampleDownloaderScreen
                screen=screen
                target_index=target_index
                close=close
                back_to_slot_manager=back_to_slot_manager
            />
        </div>
    }
}

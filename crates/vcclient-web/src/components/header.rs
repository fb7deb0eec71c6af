use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] connected: Signal<bool>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"VCClient"</h1>
            <span class="subtitle">"Realtime Voice Changer"</span>
            <span class={move || if connected.get() { "status-dot connected" } else { "status-dot disconnected" }}></span>
        </header>
    }
}

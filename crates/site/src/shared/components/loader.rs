//! Full-screen loading splash shown while the app boots.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long the splash stays up after mount. Purely cosmetic; once dismissed
/// it never reappears.
const SPLASH_MS: u32 = 600;

#[component]
pub fn Loader() -> impl IntoView {
    let (visible, set_visible) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(SPLASH_MS).await;
            set_visible.set(false);
        });
    });

    view! {
        <Show when=move || visible.get()>
            <div class="loader">
                <div class="loader__content">
                    <div class="loader__spinner">{icon("code")}</div>
                    <p class="loader__label">"Loading..."</p>
                </div>
            </div>
        </Show>
    }
}

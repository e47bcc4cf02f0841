//! Share action using the native share sheet with a clipboard fallback.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::components::toast::{show_toast, ToastKind, ToastMessage};

/// Whether the browser exposes `navigator.share`.
fn share_supported(navigator: &web_sys::Navigator) -> bool {
    js_sys::Reflect::has(navigator, &JsValue::from_str("share")).unwrap_or(false)
}

#[component]
pub fn ShareButton(
    title: String,
    text: String,
    toasts: RwSignal<Vec<ToastMessage>>,
) -> impl IntoView {
    let on_click = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let url = window.location().href().unwrap_or_default();

        if share_supported(&navigator) {
            let data = web_sys::ShareData::new();
            data.set_title(&title);
            data.set_text(&text);
            data.set_url(&url);
            let promise = navigator.share_with_data(&data);
            spawn_local(async move {
                // The user closing the share sheet rejects the promise
                if let Err(err) = JsFuture::from(promise).await {
                    debug!("share dismissed: {:?}", err);
                }
            });
        } else {
            let promise = navigator.clipboard().write_text(&url);
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => show_toast(toasts, "Link copied to clipboard!", ToastKind::Success),
                    Err(_) => show_toast(toasts, "Unable to copy link", ToastKind::Error),
                }
            });
        }
    };

    view! {
        <button class="share-btn" on:click=on_click title="Share this post">
            "Share"
        </button>
    }
}

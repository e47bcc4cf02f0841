//! Document-level keyboard shortcuts.
//!
//! Ctrl/Cmd+Enter submits the form enclosing the focused element (through
//! `requestSubmit`, so submit handlers run); Escape closes the open nav menu.

use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub fn install(nav_open: RwSignal<bool>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |ev: web_sys::KeyboardEvent| {
            if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "Enter" {
                submit_active_form();
            }

            if ev.key() == "Escape" {
                nav_open.set(false);
            }
        },
    );

    if document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .is_ok()
    {
        on_keydown.forget();
    }
}

fn submit_active_form() {
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let Some(active) = active else {
        return;
    };

    if let Ok(Some(form)) = active.closest("form") {
        let form: web_sys::HtmlFormElement = form.unchecked_into();
        if form.request_submit().is_err() {
            warn!("shortcut form submission failed");
        }
    }
}

//! Inkpad blog frontend.
//!
//! A client-side rendered Leptos application. Each page behavior lives in its
//! own component with behavior-local state; document and window level wiring
//! (keyboard shortcuts, smooth scrolling, error reporting) is installed once
//! at startup.

use leptos::prelude::*;

mod api;
mod app;
mod boot;
mod components;
mod debounce;
mod enhance;
mod hotkeys;
mod storage;
mod validate;

use app::App;

fn main() {
    // Readable panics and tracing output in the browser console
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    enhance::install_error_logging();

    leptos::mount::mount_to_body(|| view! { <App /> });
}

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Scroll offset past which the control appears.
const SCROLL_THRESHOLD_PX: f64 = 300.0;

#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    if let Some(window) = web_sys::window() {
        let win = window.clone();
        let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            let offset = win.scroll_y().unwrap_or(0.0);
            visible.set(offset > SCROLL_THRESHOLD_PX);
        });
        if window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .is_ok()
        {
            on_scroll.forget();
        }
    }

    let on_click = move |_| {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <button
            class="back-to-top"
            class:visible=move || visible.get()
            on:click=on_click
            title="Back to top"
        >
            "↑"
        </button>
    }
}

//! Document and window level enhancements that are not tied to a component.

use tracing::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Smooth-scroll clicks on in-page `#` anchors.
pub fn install_smooth_scroll() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let doc = document.clone();
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let anchor = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten());
        let Some(anchor) = anchor else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        // A bare "#" is not a target
        if href.len() < 2 {
            return;
        }

        if let Ok(Some(section)) = doc.query_selector(&href) {
            ev.prevent_default();
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    if document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_ok()
    {
        on_click.forget();
    }
}

/// Log unhandled errors and promise rejections to the console without
/// surfacing them to the user.
pub fn install_error_logging() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error =
        Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(|ev: web_sys::ErrorEvent| {
            error!("unhandled script error: {}", ev.message());
        });
    if window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_ok()
    {
        on_error.forget();
    }

    let on_rejection = Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(
        |ev: web_sys::PromiseRejectionEvent| {
            ev.prevent_default();
            error!("unhandled promise rejection: {:?}", ev.reason());
        },
    );
    if window
        .add_event_listener_with_callback(
            "unhandledrejection",
            on_rejection.as_ref().unchecked_ref(),
        )
        .is_ok()
    {
        on_rejection.forget();
    }
}

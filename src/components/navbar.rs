//! Top navigation bar with mobile menu toggling.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::app::Page;
use crate::components::search_bar::SearchBar;
use crate::components::toast::ToastMessage;

#[component]
pub fn Navbar(
    nav_open: RwSignal<bool>,
    #[prop(into)] on_navigate: Callback<Page>,
    toasts: RwSignal<Vec<ToastMessage>>,
) -> impl IntoView {
    // Close the mobile menu when clicking anywhere outside the navbar.
    // The listener lives for the page lifetime, like every other document
    // level hook in this app.
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let on_document_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
            move |ev: web_sys::MouseEvent| {
                if !nav_open.get_untracked() {
                    return;
                }
                let inside = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest(".navbar").ok().flatten())
                    .is_some();
                if !inside {
                    nav_open.set(false);
                }
            },
        );
        if document
            .add_event_listener_with_callback(
                "click",
                on_document_click.as_ref().unchecked_ref(),
            )
            .is_ok()
        {
            on_document_click.forget();
        }
    }

    let nav_link = move |label: &'static str, page: Page| {
        view! {
            <a
                href="#"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    on_navigate.run(page);
                    nav_open.set(false);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <nav class="navbar">
            <div class="nav-brand">
                <a
                    href="#"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        on_navigate.run(Page::Home);
                    }
                >
                    "Inkpad"
                </a>
            </div>

            <button
                class="nav-toggle"
                class:open=move || nav_open.get()
                aria-label="Toggle navigation"
                on:click=move |_| nav_open.update(|open| *open = !*open)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>

            <div class="nav-links" class:active=move || nav_open.get()>
                {nav_link("Home", Page::Home)}
                {nav_link("Write", Page::Write)}
                {nav_link("Sign Up", Page::SignUp)}
                <SearchBar toasts=toasts />
            </div>
        </nav>
    }
}

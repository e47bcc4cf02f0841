//! Debounced search box.

use leptos::html;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::JsCast;

use crate::components::toast::{show_toast, ToastKind, ToastMessage};
use crate::debounce::Debouncer;

pub const SEARCH_DEBOUNCE_MS: u32 = 500;
pub const MIN_QUERY_CHARS: usize = 3;

/// Queries shorter than the minimum never navigate.
pub fn should_search(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

fn search_url(query: &str) -> String {
    format!("/search?q={}", String::from(js_sys::encode_uri_component(query)))
}

fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(url).is_err() {
            warn!("navigation to {} failed", url);
        }
    }
}

#[component]
pub fn SearchBar(toasts: RwSignal<Vec<ToastMessage>>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let input_ref = NodeRef::<html::Input>::new();
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        query.set(input.value());

        debouncer.schedule(move || {
            let q = query.get_untracked();
            if should_search(&q) {
                navigate_to(&search_url(&q));
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        let q = q.trim();
        if q.is_empty() {
            show_toast(toasts, "Please enter a search term", ToastKind::Warning);
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        } else {
            navigate_to(&search_url(q));
        }
    };

    view! {
        <form class="search-form" action="/search" method="get" on:submit=on_submit>
            <input
                node_ref=input_ref
                class="search-input"
                type="search"
                name="q"
                placeholder="Search posts..."
                prop:value=move || query.get()
                on:input=on_input
            />
            <button type="submit" class="search-btn">"Search"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_queries_never_navigate() {
        assert!(!should_search(""));
        assert!(!should_search("ab"));
        assert!(should_search("abc"));
        assert!(should_search("rustlang"));
    }
}

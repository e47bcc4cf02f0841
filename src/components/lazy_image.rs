//! Lazily loaded image using intersection detection.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[component]
pub fn LazyImage(src: String, alt: String) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let loaded = RwSignal::new(false);
    let data_src = src.clone();

    Effect::new(move |_| {
        let Some(img) = img_ref.get() else {
            return;
        };
        if loaded.get_untracked() {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<web_sys::IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if intersecting {
                    loaded.set(true);
                    observer.disconnect();
                }
            },
        );

        match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&img);
                callback.forget();
            }
            // No observer support: load eagerly
            Err(_) => loaded.set(true),
        }
    });

    view! {
        <img
            node_ref=img_ref
            class="blog-image"
            class:lazy=move || !loaded.get()
            data-src=data_src
            src=move || loaded.get().then(|| src.clone())
            alt=alt
        />
    }
}

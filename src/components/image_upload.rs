//! Cover image picker with inline preview.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::toast::{show_toast, ToastKind, ToastMessage};

pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Gate a selected file on size and MIME type. Exactly 5MB is accepted.
pub fn validate_image(size: f64, mime: &str) -> Result<(), &'static str> {
    if size > MAX_IMAGE_BYTES {
        return Err("Image size must be less than 5MB");
    }
    if !mime.starts_with("image/") {
        return Err("Please select a valid image file");
    }
    Ok(())
}

#[component]
pub fn ImageUpload(toasts: RwSignal<Vec<ToastMessage>>) -> impl IntoView {
    // Data URL of the selected image
    let preview = RwSignal::new(None::<String>);
    let input_ref = NodeRef::<html::Input>::new();

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Err(msg) = validate_image(file.size(), &file.type_()) {
            show_toast(toasts, msg, ToastKind::Error);
            input.set_value("");
            preview.set(None);
            return;
        }

        let Ok(reader) = web_sys::FileReader::new() else {
            show_toast(toasts, "Failed to read image file", ToastKind::Error);
            return;
        };

        let reader_for_load = reader.clone();
        let onload = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            if let Ok(result) = reader_for_load.result() {
                if let Some(data_url) = result.as_string() {
                    preview.set(Some(data_url));
                }
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        if reader.read_as_data_url(&file).is_err() {
            show_toast(toasts, "Failed to read image file", ToastKind::Error);
        }
    };

    let remove_preview = move |_| {
        preview.set(None);
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    view! {
        <div class="image-upload form-group">
            <label for="blog-image">"Cover image"</label>
            <input
                node_ref=input_ref
                id="blog-image"
                name="image"
                type="file"
                accept="image/*"
                on:change=on_change
            />
            {move || preview.get().map(|src| view! {
                <div class="image-preview">
                    <img src=src alt="Preview" />
                    <button
                        type="button"
                        class="remove-preview"
                        on:click=remove_preview
                        title="Remove image"
                    >
                        "×"
                    </button>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_megabytes_exactly_is_accepted() {
        assert!(validate_image(MAX_IMAGE_BYTES, "image/png").is_ok());
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        assert_eq!(
            validate_image(MAX_IMAGE_BYTES + 1.0, "image/png"),
            Err("Image size must be less than 5MB")
        );
    }

    #[test]
    fn test_non_image_mime_is_rejected() {
        assert_eq!(
            validate_image(1024.0, "text/plain"),
            Err("Please select a valid image file")
        );
        assert_eq!(
            validate_image(1024.0, ""),
            Err("Please select a valid image file")
        );
    }

    #[test]
    fn test_small_image_is_accepted() {
        assert!(validate_image(1024.0, "image/jpeg").is_ok());
    }
}

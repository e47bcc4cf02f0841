//! Blog editor form with draft auto-save.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

use crate::components::form_field::{TextAreaField, ValidatedInput, SUBMIT_REENABLE_MS};
use crate::components::image_upload::ImageUpload;
use crate::components::toast::ToastMessage;
use crate::components::word_count::WordCount;
use crate::debounce::Debouncer;
use crate::storage::draft::{self, Draft};

/// Quiet period after the last keystroke before the draft is written.
pub const AUTOSAVE_DEBOUNCE_MS: u32 = 2000;
/// How long the "Draft saved" indicator stays visible.
pub const SAVE_INDICATOR_MS: u32 = 2000;

#[component]
pub fn BlogEditor(toasts: RwSignal<Vec<ToastMessage>>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let indicator_visible = RwSignal::new(false);
    let autosave = Debouncer::new(AUTOSAVE_DEBOUNCE_MS);

    // Offer to restore a saved draft before the user starts typing
    if let Some(saved) = draft::load() {
        let restore = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("A draft was found. Would you like to restore it?")
                    .ok()
            })
            .unwrap_or(false);
        if restore {
            title.set(saved.title);
            content.set(saved.content);
        }
    }

    // Debounced write of whatever the fields hold once typing pauses. The
    // first run only subscribes; it sees the restored values.
    let schedule_save = {
        let autosave = autosave.clone();
        move || {
            autosave.schedule(move || {
                let saved = draft::save(&Draft::new(
                    title.get_untracked(),
                    content.get_untracked(),
                ));
                if saved {
                    indicator_visible.set(true);
                    spawn_local(async move {
                        TimeoutFuture::new(SAVE_INDICATOR_MS).await;
                        indicator_visible.set(false);
                    });
                }
            });
        }
    };
    Effect::new(move |prev: Option<()>| {
        let _ = (title.get(), content.get());
        if prev.is_some() {
            schedule_save();
        }
    });

    // The form posts natively; we only clear the draft and flip the button
    // into its processing state on the way out.
    let on_submit = move |_ev: web_sys::SubmitEvent| {
        autosave.cancel();
        draft::clear();
        if !submitting.get_untracked() {
            submitting.set(true);
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_REENABLE_MS).await;
                submitting.set(false);
            });
        }
    };

    view! {
        <section class="editor-section">
            <h1>"Write a new post"</h1>
            <form
                id="blog-form"
                action="/write"
                method="post"
                enctype="multipart/form-data"
                on:submit=on_submit
            >
                <ValidatedInput
                    id="title"
                    name="title"
                    label="Title"
                    required=true
                    value=title
                />
                <TextAreaField
                    id="content"
                    name="content"
                    label="Content"
                    rows=12
                    required=true
                    value=content
                />
                <WordCount content=content.into() />
                <ImageUpload toasts=toasts />
                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Processing..." } else { "Publish" }}
                </button>
            </form>
            <div class="save-indicator" class:visible=move || indicator_visible.get()>
                "Draft saved"
            </div>
        </section>
    }
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client::{like_post, ApiError};
use crate::components::toast::{show_toast, ToastKind, ToastMessage};

#[component]
pub fn LikeButton(
    post_id: i64,
    initial_likes: u32,
    toasts: RwSignal<Vec<ToastMessage>>,
) -> impl IntoView {
    let likes = RwSignal::new(initial_likes);
    let liked = RwSignal::new(false);
    let is_busy = RwSignal::new(false);

    let on_click = move |_| {
        if is_busy.get_untracked() {
            return;
        }
        is_busy.set(true);

        spawn_local(async move {
            match like_post(post_id).await {
                Ok(response) => {
                    likes.set(response.likes);
                    liked.set(true);
                    show_toast(toasts, "Post liked!", ToastKind::Success);
                }
                Err(ApiError::Status(_)) => {
                    show_toast(toasts, "Please log in to like posts", ToastKind::Error);
                }
                Err(_) => {
                    show_toast(toasts, "Failed to like post", ToastKind::Error);
                }
            }
            // Re-enabled on every path
            is_busy.set(false);
        });
    };

    view! {
        <button
            class="like-btn"
            class:liked=move || liked.get()
            data-blog-id=post_id.to_string()
            disabled=move || is_busy.get()
            on:click=on_click
            title="Like this post"
        >
            <span class="like-icon">"♥"</span>
            " "
            <span class="like-count">{move || likes.get()}</span>
        </button>
    }
}

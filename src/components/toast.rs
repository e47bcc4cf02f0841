//! Toast notification system.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicUsize, Ordering};

use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_VISIBLE_MS: u32 = 4000;
/// Fade-out duration shared with the flash banners.
pub const DISMISS_FADE_MS: u32 = 300;

/// Toast notification type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

/// A single toast message.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
    pub leaving: bool,
}

/// Global counter for toast IDs.
static TOAST_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_toast_id() -> usize {
    TOAST_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Show a toast notification that auto-dismisses after 4 seconds.
pub fn show_toast(toasts: RwSignal<Vec<ToastMessage>>, message: &str, kind: ToastKind) {
    let id = next_toast_id();

    toasts.update(|t| {
        t.push(ToastMessage {
            id,
            message: message.to_string(),
            kind,
            leaving: false,
        });
    });

    spawn_local(async move {
        TimeoutFuture::new(TOAST_VISIBLE_MS).await;
        dismiss_toast(toasts, id);
    });
}

/// Fade a toast out, then remove it. Safe to call for an id that is already
/// leaving or gone.
pub fn dismiss_toast(toasts: RwSignal<Vec<ToastMessage>>, id: usize) {
    let mut found = false;
    toasts.update(|t| {
        if let Some(toast) = t.iter_mut().find(|m| m.id == id && !m.leaving) {
            toast.leaving = true;
            found = true;
        }
    });
    if !found {
        return;
    }

    spawn_local(async move {
        TimeoutFuture::new(DISMISS_FADE_MS).await;
        toasts.update(|t| t.retain(|m| m.id != id));
    });
}

/// Container component for rendering toast notifications.
#[component]
pub fn ToastContainer(
    toasts: Signal<Vec<ToastMessage>>,
    #[prop(into)] on_dismiss: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="toast-container">
            {move || toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div
                        class=format!("toast toast-{}", toast.kind.as_str())
                        class:dismissing=toast.leaving
                    >
                        <span class="toast-message">{toast.message}</span>
                        <button
                            class="toast-dismiss"
                            on:click=move |_| on_dismiss.run(id)
                        >
                            "×"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

//! Flash message banners handed over by the server.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

use crate::boot::Flash;
use crate::components::toast::DISMISS_FADE_MS;

/// How long a flash banner stays before auto-dismissing.
pub const FLASH_VISIBLE_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashKind {
    Info,
    Success,
    Warning,
    Error,
}

impl FlashKind {
    /// Map a flask flash category; unknown categories render as info.
    pub fn from_category(category: &str) -> Self {
        match category {
            "success" => FlashKind::Success,
            "warning" => FlashKind::Warning,
            "error" => FlashKind::Error,
            _ => FlashKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlashKind::Info => "info",
            FlashKind::Success => "success",
            FlashKind::Warning => "warning",
            FlashKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlashBanner {
    pub id: usize,
    pub kind: FlashKind,
    pub message: String,
    pub leaving: bool,
}

pub fn banners_from(flashes: Vec<Flash>) -> Vec<FlashBanner> {
    flashes
        .into_iter()
        .enumerate()
        .map(|(id, flash)| FlashBanner {
            id,
            kind: FlashKind::from_category(&flash.category),
            message: flash.message,
            leaving: false,
        })
        .collect()
}

/// Fade a banner out, then remove it. Shares the toast fade timing.
pub fn dismiss_flash(flashes: RwSignal<Vec<FlashBanner>>, id: usize) {
    let mut found = false;
    flashes.update(|list| {
        if let Some(banner) = list.iter_mut().find(|b| b.id == id && !b.leaving) {
            banner.leaving = true;
            found = true;
        }
    });
    if !found {
        return;
    }

    spawn_local(async move {
        TimeoutFuture::new(DISMISS_FADE_MS).await;
        flashes.update(|list| list.retain(|b| b.id != id));
    });
}

#[component]
pub fn FlashMessages(flashes: RwSignal<Vec<FlashBanner>>) -> impl IntoView {
    // Auto-dismiss every banner present at mount after 5 seconds
    for banner in flashes.get_untracked() {
        let id = banner.id;
        spawn_local(async move {
            TimeoutFuture::new(FLASH_VISIBLE_MS).await;
            dismiss_flash(flashes, id);
        });
    }

    view! {
        <div class="flash-messages">
            {move || flashes.get().into_iter().map(|banner| {
                let id = banner.id;
                view! {
                    <div
                        class=format!("alert alert-{}", banner.kind.as_str())
                        class:dismissing=banner.leaving
                    >
                        <span class="alert-message">{banner.message}</span>
                        <button
                            class="alert-close"
                            on:click=move |_| dismiss_flash(flashes, id)
                            title="Dismiss"
                        >
                            "×"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_kind_from_category() {
        assert_eq!(FlashKind::from_category("success"), FlashKind::Success);
        assert_eq!(FlashKind::from_category("warning"), FlashKind::Warning);
        assert_eq!(FlashKind::from_category("error"), FlashKind::Error);
        assert_eq!(FlashKind::from_category("info"), FlashKind::Info);
        assert_eq!(FlashKind::from_category("anything-else"), FlashKind::Info);
    }

    #[test]
    fn test_banners_get_sequential_ids() {
        let banners = banners_from(vec![
            Flash {
                category: "success".to_string(),
                message: "Blog published successfully!".to_string(),
            },
            Flash {
                category: "error".to_string(),
                message: "Blog not found!".to_string(),
            },
        ]);
        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].id, 0);
        assert_eq!(banners[1].id, 1);
        assert_eq!(banners[1].kind, FlashKind::Error);
        assert!(!banners[0].leaving);
    }
}

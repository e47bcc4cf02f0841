//! Local draft persistence for the blog editor.
//!
//! Storage failures degrade to "no auto-save": they are logged and never
//! surfaced to the user.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The locally cached unsaved post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: String, // ISO-8601
}

impl Draft {
    pub fn new(title: String, content: String) -> Self {
        Self {
            title,
            content,
            timestamp: super::now_iso(),
        }
    }
}

/// Load the saved draft, if any.
pub fn load() -> Option<Draft> {
    LocalStorage::get(super::STORAGE_DRAFT).ok()
}

/// Persist the draft. Returns whether the write succeeded.
pub fn save(draft: &Draft) -> bool {
    match LocalStorage::set(super::STORAGE_DRAFT, draft) {
        Ok(()) => true,
        Err(e) => {
            warn!("unable to save draft: {}", e);
            false
        }
    }
}

/// Remove the saved draft.
pub fn clear() {
    LocalStorage::delete(super::STORAGE_DRAFT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_serializes_with_stable_keys() {
        let draft = Draft {
            title: "First post".to_string(),
            content: "Hello".to_string(),
            timestamp: "2026-08-07T12:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["title"], "First post");
        assert_eq!(value["content"], "Hello");
        assert_eq!(value["timestamp"], "2026-08-07T12:00:00.000Z");
    }

    #[test]
    fn test_draft_tolerates_missing_fields() {
        let draft: Draft = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(draft.title, "Only title");
        assert_eq!(draft.content, "");
        assert_eq!(draft.timestamp, "");
    }
}

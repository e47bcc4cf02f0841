//! Bootstrap payload handed over by the server-rendered host page.
//!
//! The host page embeds flash messages and the visible post list as a JSON
//! string on `window.__INKPAD_BOOT__`. A missing or malformed payload
//! degrades to an empty one.

use serde::Deserialize;
use tracing::warn;
use wasm_bindgen::JsValue;

pub const BOOT_GLOBAL: &str = "__INKPAD_BOOT__";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BootData {
    #[serde(default)]
    pub flashes: Vec<Flash>,
    #[serde(default)]
    pub posts: Vec<PostSummary>,
}

/// A server flash message, category as flask emits it.
#[derive(Debug, Clone, Deserialize)]
pub struct Flash {
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Read the boot payload from the window object.
pub fn load() -> BootData {
    let Some(window) = web_sys::window() else {
        return BootData::default();
    };

    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(BOOT_GLOBAL)) {
        Ok(value) => value,
        Err(_) => return BootData::default(),
    };
    if raw.is_undefined() || raw.is_null() {
        return BootData::default();
    }

    let Some(json) = raw.as_string() else {
        warn!("boot payload is not a JSON string");
        return BootData::default();
    };

    parse(&json).unwrap_or_else(|e| {
        warn!("invalid boot payload: {}", e);
        BootData::default()
    })
}

fn parse(json: &str) -> Result<BootData, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let boot = parse(
            r#"{
                "flashes": [{"category": "success", "message": "Blog published successfully!"}],
                "posts": [{"id": 7, "title": "Hello", "author": "Ada", "excerpt": "Hi", "likes": 3, "image_url": "/static/uploads/7.png"}]
            }"#,
        )
        .unwrap();

        assert_eq!(boot.flashes.len(), 1);
        assert_eq!(boot.flashes[0].category, "success");
        assert_eq!(boot.posts.len(), 1);
        assert_eq!(boot.posts[0].id, 7);
        assert_eq!(boot.posts[0].likes, 3);
    }

    #[test]
    fn test_parse_tolerates_missing_sections() {
        let boot = parse("{}").unwrap();
        assert!(boot.flashes.is_empty());
        assert!(boot.posts.is_empty());

        let boot = parse(r#"{"posts": [{"id": 1, "title": "T", "author": "A"}]}"#).unwrap();
        assert_eq!(boot.posts[0].excerpt, "");
        assert_eq!(boot.posts[0].likes, 0);
        assert!(boot.posts[0].image_url.is_none());
    }
}

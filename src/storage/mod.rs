//! Centralized storage module for localStorage operations.

pub mod draft;

// Storage keys
pub const STORAGE_DRAFT: &str = "blog_draft";

/// Current time as an ISO-8601 string using js_sys::Date.
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

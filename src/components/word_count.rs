use leptos::prelude::*;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Display class by word-count thresholds.
fn count_class(words: usize) -> &'static str {
    if words < 50 {
        "word-count-display count-low"
    } else if words < 100 {
        "word-count-display count-mid"
    } else {
        "word-count-display count-ok"
    }
}

#[component]
pub fn WordCount(content: Signal<String>) -> impl IntoView {
    let words = Memo::new(move |_| word_count(&content.get()));
    let chars = Memo::new(move |_| char_count(&content.get()));

    view! {
        <div class=move || count_class(words.get())>
            {move || format!("{} words, {} characters", words.get(), chars.get())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_splits_on_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("  spaced   out\twords\nhere  "), 4);
    }

    #[test]
    fn test_char_count_is_raw_length() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("abc"), 3);
        assert_eq!(char_count("héllo"), 5);
    }

    #[test]
    fn test_word_count_never_exceeds_char_count() {
        for text in ["a", "a b c", "hello world", "x           y"] {
            assert!(word_count(text) <= char_count(text));
        }
    }

    #[test]
    fn test_count_class_thresholds() {
        assert!(count_class(0).ends_with("count-low"));
        assert!(count_class(49).ends_with("count-low"));
        assert!(count_class(50).ends_with("count-mid"));
        assert!(count_class(99).ends_with("count-mid"));
        assert!(count_class(100).ends_with("count-ok"));
    }
}

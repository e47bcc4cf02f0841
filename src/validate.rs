//! Field validation and password scoring.
//!
//! Pure functions so the components stay thin and the rules are testable
//! without a browser.

pub const MIN_PASSWORD_LEN: usize = 6;

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PASSWORD: &str = "Password must be at least 6 characters long";
pub const MSG_CONFIRM: &str = "Passwords do not match";

/// Validate a text-like input on blur. `input_type` is the HTML type
/// attribute ("text", "email", ...).
pub fn validate_field(value: &str, input_type: &str, required: bool) -> Option<&'static str> {
    let value = value.trim();

    if required && value.is_empty() {
        return Some(MSG_REQUIRED);
    }

    if input_type == "email" && !value.is_empty() && !is_valid_email(value) {
        return Some(MSG_EMAIL);
    }

    None
}

/// Minimum-length check for the primary password field. Empty values are
/// left to the required check.
pub fn validate_password(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if !value.is_empty() && value.chars().count() < MIN_PASSWORD_LEN {
        Some(MSG_PASSWORD)
    } else {
        None
    }
}

pub fn validate_confirm(value: &str, primary: &str) -> Option<&'static str> {
    if value != primary {
        Some(MSG_CONFIRM)
    } else {
        None
    }
}

/// Same shape the server accepts: one `@`, no whitespace, and a dot with
/// non-empty sides in the domain part.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Password strength as the count of satisfied criteria, with hints for the
/// ones still missing.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordStrength {
    pub score: usize,
    pub missing: Vec<&'static str>,
}

const STRENGTH_LABELS: [&str; 5] = ["Very Weak", "Weak", "Fair", "Good", "Strong"];
const STRENGTH_CLASSES: [&str; 5] = [
    "strength-very-weak",
    "strength-weak",
    "strength-fair",
    "strength-good",
    "strength-strong",
];

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        let mut score = 0;
        let mut missing = Vec::new();

        let mut check = |ok: bool, hint: &'static str| {
            if ok {
                score += 1;
            } else {
                missing.push(hint);
            }
        };

        check(password.chars().count() >= 8, "At least 8 characters");
        check(
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Lowercase letter",
        );
        check(
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Uppercase letter",
        );
        check(password.chars().any(|c| c.is_ascii_digit()), "Number");
        check(
            password
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
            "Special character",
        );

        Self { score, missing }
    }

    pub fn label(&self) -> &'static str {
        STRENGTH_LABELS[self.score.min(STRENGTH_LABELS.len() - 1)]
    }

    pub fn css_class(&self) -> &'static str {
        STRENGTH_CLASSES[self.score.min(STRENGTH_CLASSES.len() - 1)]
    }

    /// Display text for the indicator element.
    pub fn summary(&self) -> String {
        if self.missing.is_empty() {
            self.label().to_string()
        } else {
            format!("{} (Missing: {})", self.label(), self.missing.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field() {
        assert_eq!(validate_field("", "text", true), Some(MSG_REQUIRED));
        assert_eq!(validate_field("   ", "text", true), Some(MSG_REQUIRED));
        assert_eq!(validate_field("", "text", false), None);
        assert_eq!(validate_field("hello", "text", true), None);
    }

    #[test]
    fn test_email_validation() {
        assert_eq!(validate_field("ada@example.com", "email", true), None);
        assert_eq!(validate_field("ada@mail.co.uk", "email", true), None);
        assert_eq!(validate_field("ada", "email", true), Some(MSG_EMAIL));
        assert_eq!(validate_field("ada@example", "email", true), Some(MSG_EMAIL));
        assert_eq!(validate_field("ada@.com", "email", true), Some(MSG_EMAIL));
        assert_eq!(validate_field("ada@example.", "email", true), Some(MSG_EMAIL));
        assert_eq!(validate_field("a da@example.com", "email", true), Some(MSG_EMAIL));
        // Empty non-required email is not an error
        assert_eq!(validate_field("", "email", false), None);
    }

    #[test]
    fn test_password_length() {
        assert_eq!(validate_password("12345"), Some(MSG_PASSWORD));
        assert_eq!(validate_password("123456"), None);
        assert_eq!(validate_password(""), None);
    }

    #[test]
    fn test_confirm_mismatch() {
        assert_eq!(validate_confirm("abc", "abd"), Some(MSG_CONFIRM));
        assert_eq!(validate_confirm("abc", "abc"), None);
    }

    #[test]
    fn test_strength_each_criterion_counts_once() {
        assert_eq!(PasswordStrength::evaluate("").score, 0);
        assert_eq!(PasswordStrength::evaluate("aaaaaaaa").score, 2); // length + lowercase
        assert_eq!(PasswordStrength::evaluate("a").score, 1);
        assert_eq!(PasswordStrength::evaluate("aA").score, 2);
        assert_eq!(PasswordStrength::evaluate("aA1").score, 3);
        assert_eq!(PasswordStrength::evaluate("aA1!").score, 4);
        assert_eq!(PasswordStrength::evaluate("aA1!aaaa").score, 5);
    }

    #[test]
    fn test_strength_label_clamps_at_strong() {
        let all = PasswordStrength::evaluate("aA1!aaaa");
        assert_eq!(all.score, 5);
        assert_eq!(all.label(), "Strong");
        assert!(all.missing.is_empty());
        assert_eq!(all.summary(), "Strong");
    }

    #[test]
    fn test_strength_hints_list_missing_criteria() {
        let s = PasswordStrength::evaluate("abc");
        assert_eq!(s.score, 1);
        assert_eq!(s.label(), "Weak");
        assert_eq!(
            s.missing,
            vec![
                "At least 8 characters",
                "Uppercase letter",
                "Number",
                "Special character"
            ]
        );
        assert!(s.summary().starts_with("Weak (Missing: At least 8 characters"));
    }
}

//! Validation primitives for the order form schema
//!
//! Field rules live on the models as `validator` derive attributes; the
//! helpers here cover what the declarative rules cannot express (trim-aware
//! required checks) plus the literal phone display pattern.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Display-format phone pattern: `+7 (999) 999-99-99`
pub static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+7 \(\d{3}\) \d{3}-\d{2}-\d{2}$").expect("phone pattern compiles")
});

fn required_error(message: &'static str) -> ValidationError {
    let mut err = ValidationError::new("required");
    err.message = Some(message.into());
    err
}

/// Required check that ignores surrounding whitespace.
fn not_blank(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required_error(message));
    }
    Ok(())
}

pub fn phone_required(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "Enter the client's phone number")
}

pub fn address_required(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "Enter the client's address")
}

pub fn product_name_required(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "Enter the product name")
}

pub fn article_required(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "Enter the article number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern_accepts_display_format() {
        assert!(PHONE_RE.is_match("+7 (900) 111-22-33"));
    }

    #[test]
    fn phone_pattern_rejects_canonical_digits() {
        assert!(!PHONE_RE.is_match("79001112233"));
        assert!(!PHONE_RE.is_match("+7 (900) 111-2233"));
        assert!(!PHONE_RE.is_match(" +7 (900) 111-22-33"));
    }

    #[test]
    fn required_checks_trim_whitespace() {
        assert!(phone_required("   ").is_err());
        assert!(address_required("\t").is_err());
        assert!(address_required("Moscow, 1").is_ok());
    }
}

//! Field validation as pure functions over strings.
//!
//! Format checks apply on user creation only; updates are persisted
//! as-is. That asymmetry is part of the service contract.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9-.]+$")
        .expect("email regex is valid")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10,15}$").expect("phone regex is valid"));

/// Returns true when `email` has a `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns true when `phone` is 10 to 15 decimal digits.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@example.co.uk"));
        assert!(is_valid_email("user+tag@some-host.org"));
        assert!(is_valid_email("x_1@a-b.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@@double.com"));
        assert!(!is_valid_email("spaces in@local.com"));
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("123456789012345"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("123456789")); // 9 digits
        assert!(!is_valid_phone("1234567890123456")); // 16 digits
        assert!(!is_valid_phone("12345abcde"));
        assert!(!is_valid_phone("+1234567890"));
        assert!(!is_valid_phone("123 456 7890"));
    }
}

//! Input validation helpers shared between the API boundary and tests.

use once_cell::sync::Lazy;
use regex::Regex;

/// Email shape check: something, an `@`, something, a dot, something.
/// Deliberately permissive; deliverability is proven by the OTP flow,
/// not by the regex.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Check whether a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check a password against the minimum-length policy
pub fn meets_password_policy(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
}

/// Mask an email address for logging: keeps the first character of the
/// local part and the full domain. `alice@example.com` -> `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{first}***@{domain}")
        }
        _ => "***".to_string(),
    }
}

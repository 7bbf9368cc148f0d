//! One-time-password entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the OTP code
pub const CODE_LENGTH: usize = 6;

/// Default validity window for OTP codes (10 minutes)
pub const DEFAULT_EXPIRY_MINUTES: i64 = 10;

/// A one-time password issued for an email address.
///
/// Entries are keyed by email, not account id, so they can exist
/// independently of any account mutation. At most one live entry per
/// email: issuing a new code deletes any prior entry first, and a
/// successful verification deletes the entry. Entries are never
/// updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// Email address the code was issued for
    pub email: String,

    /// The 6-digit numeric code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Create a new entry with a freshly generated code and the given
    /// validity window.
    pub fn new(email: String, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            email,
            code: generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiry_minutes),
        }
    }

    /// Whether the validity window has elapsed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Exact match against a candidate code
    pub fn matches(&self, candidate: &str) -> bool {
        self.code == candidate
    }
}

/// Generate a 6-digit numeric code, uniform over 100000-999999.
///
/// The lower bound excludes leading zeros so the code survives being
/// treated as a number by clients.
pub fn generate_code() -> String {
    let code: u32 = rand::thread_rng().gen_range(100_000..=999_999);
    code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_codes_are_six_digits_without_leading_zero() {
        for _ in 0..200 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn codes_vary_between_calls() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn fresh_entry_is_not_expired() {
        let entry = OtpEntry::new("a@x.com".to_string(), DEFAULT_EXPIRY_MINUTES);
        assert!(!entry.is_expired());
        assert_eq!(entry.expires_at, entry.created_at + Duration::minutes(10));
    }

    #[test]
    fn zero_minute_window_expires_immediately() {
        let entry = OtpEntry::new("a@x.com".to_string(), 0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(entry.is_expired());
    }

    #[test]
    fn matches_is_exact() {
        let mut entry = OtpEntry::new("a@x.com".to_string(), DEFAULT_EXPIRY_MINUTES);
        entry.code = "123456".to_string();
        assert!(entry.matches("123456"));
        assert!(!entry.matches("123457"));
        assert!(!entry.matches("12345"));
    }
}

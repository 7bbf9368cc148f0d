//! Account, profile and health-identifier entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix stamped on every externally visible health identifier
pub const HEALTH_ID_PREFIX: &str = "HID-";

/// A registered account as stored in the `users` table.
///
/// The password hash is an opaque bcrypt digest; the raw password
/// never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal account identifier
    pub id: Uuid,

    /// Email address, unique across accounts (case-sensitive as stored)
    pub email: String,

    /// bcrypt digest of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Optional contact phone number
    pub phone_number: Option<String>,

    /// Externally facing health identifier, `HID-<uuid>`
    pub health_id: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

/// Profile data created alongside the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
}

/// Everything needed to create an account, its profile and its health
/// identifier in one atomic unit. Built by the auth service after
/// validation and hashing; the repository persists all three rows in a
/// single transaction.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub health_id: String,
    pub profile: Profile,
}

impl NewAccount {
    /// Assemble a new account with a fresh internal id and health id
    pub fn new(
        email: String,
        password_hash: String,
        phone_number: Option<String>,
        profile: Profile,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            phone_number,
            health_id: generate_health_id(),
            profile,
        }
    }
}

/// Generate an opaque health identifier, distinct from the internal
/// account id. Generated once at signup and never changed.
pub fn generate_health_id() -> String {
    format!("{HEALTH_ID_PREFIX}{}", Uuid::new_v4())
}

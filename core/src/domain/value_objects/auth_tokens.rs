//! Authentication result returned by login and token refresh.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;

/// The identity plus token pair handed back to the caller after a
/// successful login or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub user_id: Uuid,
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthTokens {
    pub fn from_pair(user_id: Uuid, pair: TokenPair) -> Self {
        Self {
            user_id,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

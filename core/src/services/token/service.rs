//! JWT token service.
//!
//! Mints and validates signed, time-bounded access and refresh tokens.
//! Tokens are not tracked server-side: a refresh token stays valid
//! until its own expiry, and rotation does not revoke the previous
//! one. Revocation-on-rotation is a deliberate non-feature, matching
//! the observed system.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair, TokenUse, JWT_ISSUER};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenConfig;

/// Service for issuing and verifying JWTs
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a fresh access/refresh pair for the identity
    pub fn issue_pair(&self, user_id: Uuid, email: &str) -> DomainResult<TokenPair> {
        let access = Claims::new(
            user_id,
            email.to_string(),
            TokenUse::Access,
            self.config.access_ttl_days,
        );
        let refresh = Claims::new(
            user_id,
            email.to_string(),
            TokenUse::Refresh,
            self.config.refresh_ttl_days,
        );

        Ok(TokenPair {
            access_token: self.encode(&access)?,
            refresh_token: self.encode(&refresh)?,
        })
    }

    /// Verify an access token and return its claims
    pub fn verify_access(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.decode(token)?;
        if claims.token_use != TokenUse::Access {
            return Err(TokenError::InvalidClaims.into());
        }
        Ok(claims)
    }

    /// Verify a refresh token and return its claims
    pub fn verify_refresh(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.decode(token)?;
        if claims.token_use != TokenUse::Refresh {
            return Err(TokenError::InvalidClaims.into());
        }
        Ok(claims)
    }

    fn encode(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    fn decode(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let kind = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(kind)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenConfig::with_secret("test-secret"))
    }

    #[test]
    fn issued_access_token_verifies_with_matching_claims() {
        let service = service();
        let user_id = Uuid::new_v4();

        let pair = service.issue_pair(user_id, "a@x.com").unwrap();
        let claims = service.verify_access(&pair.access_token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.token_use, TokenUse::Access);
    }

    #[test]
    fn refresh_token_is_rejected_as_access_token() {
        let service = service();
        let pair = service.issue_pair(Uuid::new_v4(), "a@x.com").unwrap();

        let result = service.verify_access(&pair.refresh_token);
        assert_eq!(
            result.unwrap_err(),
            DomainError::Token(TokenError::InvalidClaims)
        );

        // and the other way round
        let result = service.verify_refresh(&pair.access_token);
        assert_eq!(
            result.unwrap_err(),
            DomainError::Token(TokenError::InvalidClaims)
        );
    }

    #[test]
    fn token_signed_with_other_secret_fails() {
        let issuer = TokenService::new(TokenConfig::with_secret("secret-a"));
        let verifier = TokenService::new(TokenConfig::with_secret("secret-b"));

        let pair = issuer.issue_pair(Uuid::new_v4(), "a@x.com").unwrap();
        let result = verifier.verify_access(&pair.access_token);
        assert_eq!(
            result.unwrap_err(),
            DomainError::Token(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn malformed_token_fails() {
        let service = service();
        let result = service.verify_access("not-a-jwt");
        assert_eq!(
            result.unwrap_err(),
            DomainError::Token(TokenError::InvalidTokenFormat)
        );
    }

    #[test]
    fn expired_token_fails() {
        // negative TTL puts exp a full day in the past, well beyond
        // the default validation leeway
        let service = TokenService::new(TokenConfig {
            secret: "test-secret".to_string(),
            access_ttl_days: -1,
            refresh_ttl_days: -1,
        });

        let pair = service.issue_pair(Uuid::new_v4(), "a@x.com").unwrap();
        let result = service.verify_access(&pair.access_token);
        assert_eq!(
            result.unwrap_err(),
            DomainError::Token(TokenError::TokenExpired)
        );
    }
}

//! Session service - issues and verifies session tokens.
//!
//! Credential checks live in the user directory; this service only turns
//! an established identity into a signed token and back.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{Config, SECONDS_PER_HOUR};
use crate::domain::Identity;
use crate::errors::AppResult;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated user
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Signed session token
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    pub expires_in: i64,
}

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait AuthService: Send + Sync {
    /// Issue a session token for an authenticated identity
    fn issue_token(&self, identity: &Identity) -> AppResult<SessionToken>;

    /// Verify a session token and return the identity it carries
    fn verify_token(&self, token: &str) -> AppResult<Identity>;
}

/// HS256 JWT implementation of AuthService.
pub struct Authenticator {
    config: Config,
}

impl Authenticator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl AuthService for Authenticator {
    fn issue_token(&self, identity: &Identity) -> AppResult<SessionToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: identity.username.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(SessionToken {
            token,
            expires_in: self.config.jwt_expiration_hours * SECONDS_PER_HOUR,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Identity> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(Identity::new(token_data.claims.sub))
    }
}

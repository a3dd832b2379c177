use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject of the token: the user's id.
    pub sub: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Signing and verification keys for bearer tokens.
///
/// Built once from configuration and shared with handlers and the auth middleware
/// through `web::Data`. Tokens are HS256 and carry no server-side state.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl,
        }
    }

    /// Issues a token for `user_id` that expires after the configured lifetime.
    ///
    /// # Returns
    /// The encoded JWT, or `AppError::InternalServerError` if encoding fails.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::InternalServerError("Token lifetime out of range".to_string()))?;
        let claims = Claims {
            sub: user_id,
            iat: timestamp(now.timestamp())?,
            exp: timestamp(expires_at.timestamp())?,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Returns
    /// `AppError::Unauthorized` if the token is malformed, signed with another key, or expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

fn timestamp(secs: i64) -> Result<usize, AppError> {
    usize::try_from(secs)
        .map_err(|_| AppError::InternalServerError(format!("Invalid token timestamp: {}", secs)))
}

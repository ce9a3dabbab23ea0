//! JWT access token issuance and validation
//!
//! Access tokens are short-lived, self-contained HS256 tokens carrying
//! the fixed issuer "chirpy" and the user id as subject. Validation is a
//! pure function of the token bytes, the secret and the clock; it never
//! touches the store. Encoding/decoding keys are pre-computed once at
//! startup and shared via Arc.

use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Issuer claim on every access token
pub const TOKEN_ISSUER: &str = "chirpy";

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer (always "chirpy")
    pub iss: String,
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for access token operations
///
/// Uses pre-computed keys to avoid expensive key derivation on every
/// request. Keys are wrapped in Arc for cheap cloning. Create once at
/// application startup and store in AppState, not per-request.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    default_ttl_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    pub fn new(secret: &str, default_ttl_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            default_ttl_secs,
        }
    }

    /// Issue an access token for a user with an explicit lifetime
    ///
    /// The service imposes no ceiling on `ttl_secs`; callers clamp
    /// requested lifetimes before getting here.
    pub fn issue(&self, user_id: Uuid, ttl_secs: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(ttl_secs);

        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow!("Failed to sign access token: {}", e))
    }

    /// Issue an access token with the configured default lifetime
    #[inline]
    pub fn issue_default(&self, user_id: Uuid) -> Result<String> {
        self.issue(user_id, self.default_ttl_secs)
    }

    /// Validate a token and return the authenticated user id
    ///
    /// Fails on a bad signature, an expired token, a wrong issuer, or a
    /// subject that is not a UUID. The error carries no detail callers
    /// could leak; handlers map it to the uniform auth failure.
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);

        let token_data = decode::<Claims>(token, &self.keys.decoding, &validation)
            .map_err(|e| anyhow!("Invalid token: {}", e))?;

        Uuid::parse_str(&token_data.claims.sub)
            .map_err(|_| anyhow!("Invalid subject in token"))
    }

    /// Default access token lifetime in seconds
    #[inline]
    pub fn default_ttl_secs(&self) -> i64 {
        self.default_ttl_secs
    }
}

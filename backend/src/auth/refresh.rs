//! Opaque refresh token generation
//!
//! Refresh tokens are 32 cryptographically random bytes, hex-encoded to
//! a fixed 64-character string. They carry no structure; all meaning
//! (owner, expiry, revocation) lives in the refresh_tokens table.

use anyhow::Result;
use argon2::password_hash::rand_core::{OsRng, RngCore};

/// Byte length of a refresh token before hex encoding
const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate a new opaque refresh token string
pub fn make_refresh_token() -> Result<String> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| anyhow::anyhow!("Entropy source failure: {}", e))?;
    Ok(hex::encode(bytes))
}

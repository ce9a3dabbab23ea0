//! Authentication primitives
//!
//! Argon2 password hashing, HS256 access tokens, opaque refresh token
//! generation, and strict Authorization header parsing. Revocation state
//! lives in the refresh_tokens table, never in memory; access tokens are
//! stateless and therefore unrevocable before expiry by design.

mod extract;
mod jwt;
mod password;
mod refresh;

pub use extract::{api_key, bearer_token, AuthUser};
pub use jwt::{Claims, JwtService};
pub use password::PasswordService;
pub use refresh::make_refresh_token;

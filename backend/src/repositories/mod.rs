//! Data access layer
//!
//! Repositories own all SQL. Each mutation is a single atomic statement
//! against the pool; nothing in this layer caches rows in memory.

mod chirp;
mod refresh_token;
mod user;

pub use chirp::{ChirpRecord, ChirpRepository};
pub use refresh_token::RefreshTokenRepository;
pub use user::{UserRecord, UserRepository};

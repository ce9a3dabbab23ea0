//! Business logic layer

mod chirp;
mod session;
mod user;

pub use chirp::ChirpService;
pub use session::SessionService;
pub use user::UserService;

//! Domain model types.

pub mod application;
pub mod session;
pub mod user;

pub use application::{Application, ApplicationWithUser, LinkedUser};
pub use session::{CurrentUser, keys as session_keys};
pub use user::User;

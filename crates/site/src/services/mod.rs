//! Business logic services.

pub mod auth;
pub mod leads;
pub mod setup;

pub use auth::AuthService;
pub use leads::LeadService;
pub use setup::SetupService;

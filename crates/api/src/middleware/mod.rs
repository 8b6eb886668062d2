//! HTTP middleware.

pub mod auth;
pub mod logging;

pub use auth::{require_admin, require_auth, AuthUser};

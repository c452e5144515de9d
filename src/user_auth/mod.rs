//! Bearer token issuance, verification and the authentication gate.

pub mod handlers;
pub mod middleware;
pub mod service;

pub use service::{AuthError, Claims, TokenService, resolve_secret};

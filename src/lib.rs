//! Pokedex Server - a token-gated read API over a fixed creature catalog.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing initialization
//! - [`user_auth`] - JWT issuance, verification and the auth gate
//! - [`catalog`] - record store and the batch key resolver
//! - [`gateway`] - HTTP router, handlers and wire types

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod user_auth;

// Convenient re-exports at crate root
pub use catalog::models::Pokemon;
pub use catalog::resolver::{LookupError, Resolution, parse_keys, resolve};
pub use user_auth::service::{AuthError, Claims, TokenService};

use std::sync::Arc;

use crate::catalog::Database;
use crate::user_auth::TokenService;

/// Shared gateway state. Established once at startup and read-only
/// afterwards - safe for unsynchronized concurrent reads.
#[derive(Clone)]
pub struct AppState {
    /// Catalog record store
    pub db: Arc<Database>,
    /// Stateless token authority (holds the process secret)
    pub token_service: Arc<TokenService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, token_service: Arc<TokenService>) -> Self {
        Self { db, token_service }
    }
}

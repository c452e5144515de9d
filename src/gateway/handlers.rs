//! Catalog route handlers

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use super::state::AppState;
use super::types::{ApiError, ApiResult, CatalogBody, ok};
use crate::catalog::resolver::{self, LookupError};
use crate::user_auth::Claims;

/// Service banner
///
/// GET /
pub async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Pokemon Server API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "POST /auth/token - Generate a bearer token",
            "pokemon": {
                "all": "GET /pokemon - Get all pokemon (token required)",
                "byNumbers": "GET /pokemon/{numbers} - Get pokemon by number(s) (token required)"
            }
        }
    }))
}

/// Full catalog read
///
/// GET /pokemon
pub async fn get_all_pokemon(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<CatalogBody> {
    tracing::debug!(subject = %claims.sub, "catalog read");

    match resolver::get_all(state.db.pool()).await {
        Ok(records) => {
            let count = records.len();
            ok(CatalogBody {
                success: true,
                data: records,
                count,
                requested: None,
                not_found: None,
            })
        }
        Err(e) => {
            tracing::error!("Catalog query failed: {:?}", e);
            ApiError::internal("Internal server error").into_err()
        }
    }
}

/// Batch lookup by key list
///
/// GET /pokemon/{numbers} - `{numbers}` is comma-delimited
pub async fn get_pokemon_by_numbers(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(numbers): Path<String>,
) -> ApiResult<CatalogBody> {
    tracing::debug!(subject = %claims.sub, raw = %numbers, "batch lookup");

    let keys = parse_or_reject(&numbers)?;

    match resolver::resolve(state.db.pool(), &keys).await {
        Ok(res) => {
            let count = res.records.len();
            ok(CatalogBody {
                success: true,
                data: res.records,
                count,
                requested: Some(res.requested),
                not_found: (!res.not_found.is_empty()).then_some(res.not_found),
            })
        }
        Err(LookupError::Store(e)) => {
            tracing::error!("Catalog query failed: {:?}", e);
            ApiError::internal("Internal server error").into_err()
        }
        Err(e) => ApiError::bad_request(e.to_string()).into_err(),
    }
}

fn parse_or_reject(raw: &str) -> Result<Vec<i64>, ApiError> {
    resolver::parse_keys(raw).map_err(|e| ApiError::bad_request(e.to_string()))
}

/// Fallback for unknown routes
pub async fn endpoint_not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}

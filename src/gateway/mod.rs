//! HTTP gateway: router assembly and the server loop.

pub mod handlers;
pub mod state;
pub mod types;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{from_fn, from_fn_with_state},
    response::Response,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use state::AppState;

/// Request logging middleware.
async fn log_request(request: Request<Body>, next: axum::middleware::Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    tracing::info!(%method, %path, status = %response.status(), "request");
    response
}

/// Assemble the full router. Split out from [`run_server`] so tests can
/// drive it against an ephemeral listener.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Protected routes: every call passes the auth gate first.
    let protected_routes = Router::new()
        .route("/pokemon", get(handlers::get_all_pokemon))
        .route("/pokemon/{numbers}", get(handlers::get_pokemon_by_numbers))
        .layer(from_fn_with_state(
            state.clone(),
            crate::user_auth::middleware::jwt_auth_middleware,
        ));

    Router::new()
        .route("/", get(handlers::service_info))
        .route(
            "/auth/token",
            post(crate::user_auth::handlers::generate_token),
        )
        .merge(protected_routes)
        .fallback(handlers::endpoint_not_found)
        .layer(from_fn(log_request))
        .with_state(state)
}

/// Start the HTTP gateway and serve until a shutdown signal arrives.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Pokedex server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}

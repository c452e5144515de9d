//! Pokedex Server entry point.
//!
//! Startup order matters: config, logging, secret resolution (fatal in
//! production when absent), store schema + seed, then the gateway.

use std::sync::Arc;

use pokedex_server::catalog::db::{self, Database};
use pokedex_server::config::AppConfig;
use pokedex_server::gateway::{run_server, state::AppState};
use pokedex_server::user_auth::{TokenService, resolve_secret};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = pokedex_server::logging::init_logging(&config);

    tracing::info!("Starting Pokedex Server in {} mode", env);

    let secret = resolve_secret(&config.auth, config.production)?;

    let database = Database::connect(&config.database.url).await?;
    db::init_schema(database.pool()).await?;
    db::seed(database.pool()).await?;

    let state = Arc::new(AppState::new(
        Arc::new(database),
        Arc::new(TokenService::new(secret)),
    ));

    let port = get_port_override().unwrap_or(config.gateway.port);
    run_server(&config.gateway.host, port, state).await
}

//! End-to-end wire contract tests: the router served on an ephemeral
//! listener, exercised over real HTTP.

use std::sync::Arc;

use pokedex_server::catalog::db::{self, Database};
use pokedex_server::gateway::{build_router, state::AppState};
use pokedex_server::user_auth::TokenService;

/// Spin up a fully seeded server on an ephemeral port, return its base URL.
async fn spawn_server() -> String {
    let database = Database::connect_in_memory().await.unwrap();
    db::init_schema(database.pool()).await.unwrap();
    db::seed(database.pool()).await.unwrap();

    let state = Arc::new(AppState::new(
        Arc::new(database),
        Arc::new(TokenService::new("integration-test-secret".to_string())),
    ));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn issue_token(client: &reqwest::Client, base: &str, username: &str) -> String {
    let body: serde_json::Value = client
        .post(format!("{base}/auth/token"))
        .json(&serde_json::json!({ "username": username }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["expiresIn"], "24h");
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn issued_token_grants_access_to_catalog() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let token = issue_token(&client, &base, "ash").await;

    let resp = client
        .get(format!("{base}/pokemon"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 10);
    assert_eq!(body["data"][0]["number"], 1);
    assert_eq!(body["data"][0]["name"], "Bulbasaur");
    assert_eq!(body["data"][0]["type"], "Grass/Poison");
    // Full read carries no batch accounting fields.
    assert!(body.get("requested").is_none());
    assert!(body.get("notFound").is_none());
}

#[tokio::test]
async fn missing_token_is_401_and_bad_token_is_403() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/pokemon"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Access token required");

    let resp = client
        .get(format!("{base}/pokemon"))
        .bearer_auth("not.a.token")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn token_signed_elsewhere_is_rejected() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let foreign = TokenService::new("some-other-secret".to_string())
        .issue("ash")
        .unwrap();
    let resp = client
        .get(format!("{base}/pokemon"))
        .bearer_auth(&foreign)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn missing_username_variants_all_yield_400() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    // No body at all
    let resp = client
        .post(format!("{base}/auth/token"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Username required");

    // Empty JSON object
    let resp = client
        .post(format!("{base}/auth/token"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Empty username
    let resp = client
        .post(format!("{base}/auth/token"))
        .json(&serde_json::json!({ "username": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn batch_lookup_reports_partial_success() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let token = issue_token(&client, &base, "misty").await;

    let resp = client
        .get(format!("{base}/pokemon/1,3,99"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 2);
    assert_eq!(body["requested"], 3);
    assert_eq!(body["notFound"], serde_json::json!([99]));
    assert_eq!(body["data"][0]["number"], 1);
    assert_eq!(body["data"][1]["number"], 3);
}

#[tokio::test]
async fn batch_lookup_omits_not_found_when_complete() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let token = issue_token(&client, &base, "brock").await;

    // Duplicates count toward `requested` but produce no spurious misses.
    let resp = client
        .get(format!("{base}/pokemon/1,1,2"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 2);
    assert_eq!(body["requested"], 3);
    assert!(body.get("notFound").is_none());
}

#[tokio::test]
async fn batch_lookup_validation_failures_are_400() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let token = issue_token(&client, &base, "ash").await;

    for raw in ["1,a,3", "1,0,3", ",,"] {
        let resp = client
            .get(format!("{base}/pokemon/{raw}"))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "expected 400 for {raw:?}");
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().len() > 0);
    }
}

#[tokio::test]
async fn unknown_route_is_404_with_envelope() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/teams"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn service_banner_is_public() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(&base).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Pokemon Server API");
}

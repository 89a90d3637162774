#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use catapi_db::DbPool;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use catapi_api::config::ServerConfig;
use catapi_api::router::build_app_router;
use catapi_api::state::AppState;

/// Directory holding the on-disk migration scripts.
pub fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../db/migrations")
}

/// Build a test `ServerConfig` pointing at `db_path`.
pub fn test_config(db_path: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_path,
        migrations_dir: migrations_dir(),
        request_timeout_secs: 30,
    }
}

/// Open a migrated database in a fresh temporary directory.
///
/// The returned `TempDir` must outlive every app built from the pool.
pub async fn test_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let pool = catapi_db::create_pool(&dir.path().join("cats.db"))
        .await
        .expect("open test database");
    catapi_db::run_migrations(&pool, &migrations_dir())
        .await
        .expect("apply migrations");
    (dir, pool)
}

/// Build the full application router (same middleware stack as production)
/// on top of the given pool.
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config(PathBuf::from("cats.db"));
    let state = AppState { pool };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

/// POST a raw, possibly malformed, body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a CORS preflight for `uri`.
pub async fn preflight(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response body is not JSON ({e}): {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a type through the API and return its id.
pub async fn create_type(app: &Router, name: &str) -> i64 {
    let response = post_json(app.clone(), "/types", serde_json::json!({ "name": name })).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a master through the API and return its id.
pub async fn create_master(app: &Router, first_name: &str, last_name: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/masters",
        serde_json::json!({
            "first_name": first_name,
            "last_name": last_name,
            "place": "Oslo",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a cat through the API and return the full JSON body.
pub async fn create_cat(app: &Router, name: &str, type_id: i64, master_id: i64) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/cats",
        serde_json::json!({
            "name": name,
            "cat_type_id": type_id,
            "master_id": master_id,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

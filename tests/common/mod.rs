//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, Response};
use tempfile::TempDir;
use ticket_practice::booking::{SeatLayout, SeatRegistry};
use ticket_practice::config::ServerConfig;
use ticket_practice::http::{AppState, HttpServer};
use ticket_practice::lifecycle::Shutdown;
use ticket_practice::net::Listener;

pub const INDEX_HTML: &str = "<!doctype html><title>tickets</title><div id=\"root\"></div>";
pub const APP_JS: &str = "console.log('tickets');";

/// A bundle directory with an index document and one script.
pub fn asset_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets").join("app.js"), APP_JS).unwrap();
    dir
}

/// Defaults with no artificial latency, serving `assets`.
pub fn test_config(assets: &TempDir) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.venue.dates_delay_ms = 0;
    config.assets.dir = assets.path().to_string_lossy().into_owned();
    config
}

/// Server whose seats all start out free.
pub fn server_with_free_seats(config: ServerConfig) -> HttpServer {
    let seats = SeatRegistry::new(SeatLayout {
        rows: config.venue.rows,
        cols: config.venue.cols,
    });
    let state = AppState::with_seats(&config, seats);
    HttpServer::with_state(config, state)
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// `name=value` pair from the first `Set-Cookie` header naming `name`.
pub fn set_cookie_pair(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}

/// Start a real server on an ephemeral local port.
pub async fn start_server(server: HttpServer) -> (Shutdown, SocketAddr) {
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let tcp = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = tcp.local_addr().unwrap();
    let listener = Listener::from_tcp(tcp, server.config().listener.max_connections);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (shutdown, addr)
}

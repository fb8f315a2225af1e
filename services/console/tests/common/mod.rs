#![allow(dead_code)]

use axum::body::Body;
use axum::routing::RouterIntoService;
use perceive_authz::Principal;
use perceive_console::app::{AppState, build_router};
use perceive_console::auth::session::{SessionCookie, encode_principal};
use perceive_console::directory::InMemoryUserStore;
use std::sync::Arc;

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub fn app() -> RouterIntoService<Body, ()> {
    let state = AppState::new(
        Arc::new(InMemoryUserStore::builtin()),
        SessionCookie::new(86_400, false),
    );
    build_router(state).into_service()
}

pub fn session_cookie(role: &str) -> String {
    let principal = Principal::new("Test User", "test@example.com", role);
    format!("user={}", encode_principal(&principal))
}

pub fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get("location")
        .expect("location header")
        .to_str()
        .expect("ascii location")
}

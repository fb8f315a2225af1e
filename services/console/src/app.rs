//! Console HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! The route guard wraps every route, public ones included, so each handler
//! sees the same [`crate::auth::guard::CurrentPrincipal`] snapshot.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::auth;
use crate::auth::session::SessionCookie;
use crate::directory::UserStore;
use axum::Router;
use axum::routing::{get, post};
use perceive_authz::{Evaluator, RouteGuard};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub api_version: String,
    pub users: Arc<dyn UserStore + Send + Sync>,
    pub cookie: SessionCookie,
    pub evaluator: Evaluator<'static>,
    pub guard: RouteGuard<'static>,
}

impl AppState {
    /// State over the built-in catalog and route table.
    pub fn new(users: Arc<dyn UserStore + Send + Sync>, cookie: SessionCookie) -> Self {
        Self {
            service_name: "perceive-console".to_string(),
            api_version: "v1".to_string(),
            users,
            cookie,
            evaluator: Evaluator::builtin(),
            guard: RouteGuard::builtin(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    Router::new()
        .route("/", get(api::home::home))
        .route(
            "/login",
            get(auth::login::login_page).post(auth::login::login),
        )
        .route("/logout", post(auth::login::logout))
        .route("/dashboard", get(api::dashboard::dashboard))
        .route("/dashboard/permissions", get(api::dashboard::permissions))
        .route("/dashboard/settings", get(api::dashboard::settings))
        .route("/settings", get(api::dashboard::settings))
        .route("/admin", get(api::admin::admin_users))
        .route("/v1/system/info", get(api::system::system_info))
        .route("/v1/system/health", get(api::system::system_health))
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/v1/openapi.json", ApiDoc::openapi()),
        )
        .fallback(api::home::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::guard::route_guard,
        ))
        .layer(trace_layer)
        .with_state(state)
}

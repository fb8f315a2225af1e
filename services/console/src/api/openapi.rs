//! OpenAPI schema aggregation for the console API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document for docs
//! and client generation.
use crate::api::{
    admin, dashboard, home, system,
    types::{
        AdminView, DashboardView, ErrorResponse, HealthStatus, HomeView, LoginPage, LoginRequest,
        NavEntry, PanelView, PermissionsView, PrincipalView, ResourceActions, SettingsView,
        SystemInfo,
    },
};
use crate::auth::login;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "perceive-console",
        version = "v1",
        description = "Perceive console HTTP API"
    ),
    paths(
        system::system_info,
        system::system_health,
        home::home,
        login::login_page,
        login::login,
        login::logout,
        dashboard::dashboard,
        dashboard::permissions,
        dashboard::settings,
        admin::admin_users
    ),
    components(schemas(
        SystemInfo,
        HealthStatus,
        ErrorResponse,
        PrincipalView,
        HomeView,
        LoginPage,
        LoginRequest,
        NavEntry,
        ResourceActions,
        PanelView,
        DashboardView,
        PermissionsView,
        SettingsView,
        AdminView
    )),
    tags(
        (name = "system", description = "Service metadata and health"),
        (name = "session", description = "Login and logout"),
        (name = "console", description = "Public console pages"),
        (name = "dashboard", description = "Dashboard model"),
        (name = "admin", description = "User administration")
    )
)]
pub struct ApiDoc;

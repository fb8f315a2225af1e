//! Request and response bodies of the console HTTP API.
//!
//! Enumerations from `perceive_authz` are rendered as their wire strings so
//! the OpenAPI document stays independent of the access-control crate.
use perceive_authz::{NavItem, Principal};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SystemInfo {
    pub service_name: String,
    pub api_version: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct PrincipalView {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&Principal> for PrincipalView {
    fn from(principal: &Principal) -> Self {
        Self {
            name: principal.name.clone(),
            email: principal.email.clone(),
            role: principal.role.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HomeView {
    pub app_name: String,
    pub principal: Option<PrincipalView>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LoginPage {
    /// Where a successful login will land.
    pub redirect: String,
    pub principal: Option<PrincipalView>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub redirect: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub name: String,
    pub href: String,
    pub feature: String,
    pub top: bool,
}

impl From<NavItem> for NavEntry {
    fn from(item: NavItem) -> Self {
        Self {
            name: item.name.to_string(),
            href: item.href.to_string(),
            feature: item.feature.as_str().to_string(),
            top: item.top,
        }
    }
}

/// Per-resource action flags for one panel.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
pub struct ResourceActions {
    pub view: bool,
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub id: String,
    pub title: String,
    pub feature: String,
    pub actions: Option<ResourceActions>,
    /// Label of the create button, present only when `create:<resource>` is granted.
    pub create_button: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DashboardView {
    pub principal: PrincipalView,
    pub navigation: Vec<NavEntry>,
    pub panels: Vec<PanelView>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PermissionsView {
    pub role: String,
    pub permissions: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SettingsView {
    pub editable: bool,
    pub session_max_age_secs: u64,
    pub cookie_secure: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AdminView {
    pub users: Vec<PrincipalView>,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

//! Dashboard handlers.
//!
//! # Purpose and responsibility
//! Builds the dashboard model the front end renders: sidebar navigation,
//! the panels the principal may see, and per-panel action flags.
//!
//! # Where it fits
//! Every route here sits under the protected `/dashboard` prefix (or
//! `/settings`), so the guard has already admitted the principal. Panel and
//! button visibility is decided with the same evaluator the guard uses.
//!
//! # Key invariants and assumptions
//! - A panel is listed iff its feature is granted.
//! - `create_button` is present iff `create:<resource>` is granted.
//! - Settings answer 403 without `view:settings` even though the
//!   `/dashboard` prefix admits every role.
use crate::api::error::{ApiError, api_forbidden};
use crate::api::require_principal;
use crate::api::types::{
    DashboardView, ErrorResponse, NavEntry, PanelView, PermissionsView, PrincipalView,
    ResourceActions, SettingsView,
};
use crate::app::AppState;
use crate::auth::guard::CurrentPrincipal;
use axum::extract::State;
use axum::{Extension, Json};
use perceive_authz::gate::visible_navigation;
use perceive_authz::{
    Action, ActionHook, Evaluator, Feature, Permission, PermissionGate, Principal, Resource,
    Target,
};

struct Panel {
    id: &'static str,
    title: &'static str,
    feature: Feature,
    resource: Option<Resource>,
    create_label: Option<&'static str>,
}

const PANELS: [Panel; 6] = [
    Panel {
        id: "metrics",
        title: "Metric Overview",
        feature: Feature::Metrics,
        resource: None,
        create_label: None,
    },
    Panel {
        id: "workflows",
        title: "Workflows",
        feature: Feature::Workflows,
        resource: Some(Resource::Workflows),
        create_label: Some("Create Workflow"),
    },
    Panel {
        id: "agents",
        title: "Agents",
        feature: Feature::Agents,
        resource: Some(Resource::Agents),
        create_label: Some("Create Agent"),
    },
    Panel {
        id: "policies",
        title: "Policies",
        feature: Feature::Policies,
        resource: Some(Resource::Policies),
        create_label: Some("Create Policy"),
    },
    Panel {
        id: "users",
        title: "Access Control",
        feature: Feature::Users,
        resource: Some(Resource::Users),
        create_label: Some("Manage Users"),
    },
    Panel {
        id: "logs",
        title: "Logs",
        feature: Feature::Logs,
        resource: None,
        create_label: None,
    },
];

const VIEW_SETTINGS: Permission = Permission::new(Action::View, Target::Settings);
const EDIT_SETTINGS: Permission = Permission::new(Action::Edit, Target::Settings);

pub(crate) fn resource_actions(
    evaluator: &Evaluator<'_>,
    principal: Option<&Principal>,
    resource: Resource,
) -> ResourceActions {
    let allowed = |action| ActionHook::new(resource, action).is_allowed_with(evaluator, principal);
    ResourceActions {
        view: allowed(Action::View),
        create: allowed(Action::Create),
        edit: allowed(Action::Edit),
        delete: allowed(Action::Delete),
    }
}

/// Panels visible to `principal`, in page order.
pub fn visible_panels(evaluator: &Evaluator<'_>, principal: Option<&Principal>) -> Vec<PanelView> {
    PANELS
        .iter()
        .filter(|panel| PermissionGate::feature(panel.feature).allows_with(evaluator, principal))
        .map(|panel| {
            let create_button = match (panel.resource, panel.create_label) {
                (Some(resource), Some(label)) => PermissionGate::permission(Permission::on(
                    Action::Create,
                    resource,
                ))
                .render_with(evaluator, principal, Some(label.to_string()), None),
                _ => None,
            };
            PanelView {
                id: panel.id.to_string(),
                title: panel.title.to_string(),
                feature: panel.feature.as_str().to_string(),
                actions: panel
                    .resource
                    .map(|resource| resource_actions(evaluator, principal, resource)),
                create_button,
            }
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard model for the signed-in principal", body = DashboardView),
        (status = 303, description = "Not signed in; redirect to login")
    )
)]
pub(crate) async fn dashboard(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentPrincipal>,
) -> Result<Json<DashboardView>, ApiError> {
    let principal = require_principal(current)?;
    let navigation = visible_navigation(&state.evaluator, Some(&principal))
        .into_iter()
        .map(NavEntry::from)
        .collect();
    let panels = visible_panels(&state.evaluator, Some(&principal));
    Ok(Json(DashboardView {
        principal: PrincipalView::from(&principal),
        navigation,
        panels,
    }))
}

#[utoipa::path(
    get,
    path = "/dashboard/permissions",
    tag = "dashboard",
    responses(
        (status = 200, description = "Effective permissions and features", body = PermissionsView)
    )
)]
pub(crate) async fn permissions(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentPrincipal>,
) -> Result<Json<PermissionsView>, ApiError> {
    let principal = require_principal(current)?;
    let mut permissions: Vec<String> = state
        .evaluator
        .user_permissions(Some(&principal))
        .iter()
        .map(Permission::to_string)
        .collect();
    permissions.sort();
    let mut features: Vec<String> = state
        .evaluator
        .user_features(Some(&principal))
        .iter()
        .map(|feature| feature.as_str().to_string())
        .collect();
    features.sort();
    Ok(Json(PermissionsView {
        role: principal.role,
        permissions,
        features,
    }))
}

#[utoipa::path(
    get,
    path = "/dashboard/settings",
    tag = "dashboard",
    responses(
        (status = 200, description = "Settings panel", body = SettingsView),
        (status = 403, description = "Missing view:settings", body = ErrorResponse)
    )
)]
pub(crate) async fn settings(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentPrincipal>,
) -> Result<Json<SettingsView>, ApiError> {
    let principal = require_principal(current)?;
    if !state.evaluator.has_permission(Some(&principal), VIEW_SETTINGS) {
        return Err(api_forbidden("settings are restricted"));
    }
    Ok(Json(SettingsView {
        editable: state.evaluator.has_permission(Some(&principal), EDIT_SETTINGS),
        session_max_age_secs: state.cookie.max_age_secs,
        cookie_secure: state.cookie.secure,
    }))
}

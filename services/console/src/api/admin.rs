//! Admin console handlers.
//!
//! # Purpose
//! Lists the user directory for principals allowed to manage users.
//!
//! # Security considerations
//! - The route guard restricts `/admin` by role; the handler additionally
//!   requires `view:users` so a custom route table cannot widen access.
//! - Credentials are never part of the listing.
use crate::api::dashboard::resource_actions;
use crate::api::error::{ApiError, api_forbidden};
use crate::api::require_principal;
use crate::api::types::{AdminView, ErrorResponse, PrincipalView};
use crate::app::AppState;
use crate::auth::guard::CurrentPrincipal;
use axum::extract::State;
use axum::{Extension, Json};
use perceive_authz::Resource;

#[utoipa::path(
    get,
    path = "/admin",
    tag = "admin",
    responses(
        (status = 200, description = "User directory", body = AdminView),
        (status = 303, description = "Not signed in or role not allowed"),
        (status = 403, description = "Missing view:users", body = ErrorResponse)
    )
)]
pub(crate) async fn admin_users(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentPrincipal>,
) -> Result<Json<AdminView>, ApiError> {
    let principal = require_principal(current)?;
    let actions = resource_actions(&state.evaluator, Some(&principal), Resource::Users);
    if !actions.view {
        return Err(api_forbidden("user management is restricted"));
    }
    let users = state
        .users
        .list_users()
        .await
        .iter()
        .map(PrincipalView::from)
        .collect();
    Ok(Json(AdminView {
        users,
        can_create: actions.create,
        can_edit: actions.edit,
        can_delete: actions.delete,
    }))
}

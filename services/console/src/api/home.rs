//! Public console pages.
//!
//! # Purpose and responsibility
//! Serves the landing page and the JSON 404 for paths no route matches.
//!
//! # Key invariants and assumptions
//! - `/` sits outside the protected prefixes; it is also where the guard
//!   sends signed-in principals whose role does not cover a path.
//! - The fallback runs behind the route guard, so unknown paths under a
//!   protected prefix still redirect before answering 404.
use crate::api::error::{ApiError, api_not_found};
use crate::api::types::{HomeView, PrincipalView};
use crate::app::AppState;
use crate::auth::guard::CurrentPrincipal;
use axum::extract::State;
use axum::{Extension, Json};

/// Landing page; also the target of unauthorized redirects.
#[utoipa::path(
    get,
    path = "/",
    tag = "console",
    responses((status = 200, description = "Landing page descriptor", body = HomeView))
)]
pub(crate) async fn home(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentPrincipal>,
) -> Json<HomeView> {
    Json(HomeView {
        app_name: state.service_name.clone(),
        principal: current.as_ref().map(PrincipalView::from),
    })
}

pub(crate) async fn not_found() -> ApiError {
    api_not_found("no such page")
}

//! Route guard middleware.
//!
//! # Purpose
//! Runs the access-control route guard in front of every console route and
//! turns its decision into either the next handler or a `303 See Other`.
//!
//! # Where it fits
//! Installed by [`crate::app::build_router`]. The principal is resolved once
//! from the session cookie; the same snapshot is handed to the guard and, on
//! allow, stored in request extensions as [`CurrentPrincipal`].
//!
//! # Key invariants
//! - Handlers never decode the cookie themselves; they read the extension.
//! - A denied request never reaches a handler.
use crate::app::AppState;
use crate::auth::login::see_other;
use crate::auth::session::RequestSession;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use perceive_authz::{GuardDecision, Principal, PrincipalProvider};

/// Principal snapshot taken by the guard for the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentPrincipal(pub Option<Principal>);

impl CurrentPrincipal {
    pub fn as_ref(&self) -> Option<&Principal> {
        self.0.as_ref()
    }
}

pub async fn route_guard(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let principal = RequestSession::new(request.headers()).current_principal();
    let path = request.uri().path().to_string();
    let decision = state.guard.evaluate(&path, principal.as_ref());

    metrics::counter!(
        "perceive_console_guard_decisions_total",
        "decision" => decision.label()
    )
    .increment(1);
    tracing::debug!(
        path = %path,
        role = principal.as_ref().map(|p| p.role.as_str()).unwrap_or(""),
        decision = decision.label(),
        "route guard decision"
    );

    match decision {
        GuardDecision::Allow => {
            request.extensions_mut().insert(CurrentPrincipal(principal));
            next.run(request).await
        }
        GuardDecision::Redirect { target, reason } => {
            tracing::debug!(path = %path, reason = reason.as_str(), "navigation redirected");
            see_other(&target)
        }
    }
}

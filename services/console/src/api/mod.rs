//! Console HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules and the shared helper that turns the
//! guard's principal snapshot into a signed-in principal.
pub mod admin;
pub mod dashboard;
pub mod error;
pub mod home;
pub mod openapi;
pub mod system;
pub mod types;

use crate::api::error::{ApiError, api_unauthorized};
use crate::auth::guard::CurrentPrincipal;
use perceive_authz::Principal;

/// Signed-in principal for a guarded handler.
///
/// The guard already redirects anonymous requests on protected paths, so
/// this only fails when a handler is mounted outside the protected prefixes.
pub(crate) fn require_principal(current: CurrentPrincipal) -> Result<Principal, ApiError> {
    current
        .0
        .ok_or_else(|| api_unauthorized("sign in required"))
}

//! Login and logout handlers.
//!
//! # Purpose
//! Exchanges an email/password pair for a session cookie, and clears it
//! again on logout.
//!
//! # Key invariants
//! - The cookie is set on the same response that redirects, so the next
//!   request the browser makes already carries the new session.
//! - Redirect targets are restricted to same-origin paths.
//!
//! # Security considerations
//! - Passwords are never logged.
//! - Wrong email and wrong password produce the same 401.
use crate::api::error::{ApiError, api_bad_request, api_internal, api_unauthorized};
use crate::api::types::{ErrorResponse, LoginPage, LoginRequest, PrincipalView};
use crate::app::AppState;
use crate::auth::guard::CurrentPrincipal;
use axum::extract::{Query, State};
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;

pub const DEFAULT_LANDING: &str = "/dashboard";
const LOGIN_PATH: &str = "/login";

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub redirect: Option<String>,
}

/// Same-origin redirect target, falling back to the dashboard.
///
/// A target is accepted only when it is an absolute path (`/...`). Browsers
/// read `//host` and `/\host` as another origin, so a second `/` or any `\`
/// is rejected, as are control characters.
pub fn safe_redirect(target: Option<&str>) -> String {
    match target.map(str::trim) {
        Some(target) if is_local_path(target) => target.to_string(),
        _ => DEFAULT_LANDING.to_string(),
    }
}

fn is_local_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(char::is_control)
}

/// `303 See Other` to `target`, or to the dashboard if `target` is not a
/// valid header value.
pub(crate) fn see_other(target: &str) -> Response {
    let location = HeaderValue::try_from(target).unwrap_or_else(|_| {
        tracing::warn!("redirect target is not a valid header value");
        HeaderValue::from_static(DEFAULT_LANDING)
    });
    (StatusCode::SEE_OTHER, [(LOCATION, location)]).into_response()
}

#[utoipa::path(
    get,
    path = "/login",
    tag = "session",
    params(("redirect" = Option<String>, Query, description = "Path to return to after login")),
    responses((status = 200, description = "Login form descriptor", body = LoginPage))
)]
pub async fn login_page(
    Extension(current): Extension<CurrentPrincipal>,
    Query(query): Query<LoginQuery>,
) -> Json<LoginPage> {
    Json(LoginPage {
        redirect: safe_redirect(query.redirect.as_deref()),
        principal: current.as_ref().map(PrincipalView::from),
    })
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "session",
    request_body = LoginRequest,
    responses(
        (status = 303, description = "Signed in; session cookie set"),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 401, description = "Credentials rejected", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let email = body.email.trim();
    if email.is_empty() || body.password.is_empty() {
        metrics::counter!("perceive_console_logins_total", "result" => "invalid").increment(1);
        return Err(api_bad_request("email and password are required"));
    }

    let Some(principal) = state.users.authenticate(email, &body.password).await else {
        metrics::counter!("perceive_console_logins_total", "result" => "rejected").increment(1);
        tracing::warn!(email = %email, "login rejected");
        return Err(api_unauthorized("invalid email or password"));
    };

    let cookie = state
        .cookie
        .set_cookie(&principal)
        .map_err(|err| api_internal("failed to create session", &err))?;
    let target = safe_redirect(body.redirect.as_deref());

    metrics::counter!("perceive_console_logins_total", "result" => "success").increment(1);
    tracing::info!(email = %principal.email, role = %principal.role, "login succeeded");

    let mut response = see_other(&target);
    response.headers_mut().insert(SET_COOKIE, cookie);
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "session",
    responses((status = 303, description = "Session cleared; redirect to login"))
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentPrincipal>,
) -> Response {
    if let Some(principal) = current.as_ref() {
        tracing::info!(email = %principal.email, "logout");
    }
    let mut response = see_other(LOGIN_PATH);
    response
        .headers_mut()
        .insert(SET_COOKIE, state.cookie.clear_cookie());
    response
}

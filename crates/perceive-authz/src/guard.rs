//! Route guard: allow, redirect-to-login, or redirect-home per navigation.
//!
//! # Purpose
//! Decides what happens to an inbound navigation given the request path and
//! the principal resolved for that request.
//!
//! # How it fits
//! The console's HTTP middleware resolves the principal from the session
//! cookie, calls [`RouteGuard::evaluate`], and turns a redirect decision into
//! a `303 See Other`. The guard itself performs no I/O.
//!
//! # Key invariants
//! - Unprotected paths are always allowed, with or without a principal.
//! - No principal on a protected path: redirect to login with the requested
//!   path as the `redirect` parameter.
//! - A principal whose role does not grant the path (including unknown roles)
//!   is redirected home, never to login.
//!
//! # Examples
//! ```rust
//! use perceive_authz::{GuardDecision, Principal, RouteGuard};
//!
//! let guard = RouteGuard::builtin();
//! assert_eq!(
//!     guard.evaluate("/dashboard/settings", None).target(),
//!     Some("/login?redirect=/dashboard/settings")
//! );
//! let viewer = Principal::new("Hari", "hari@example.com", "Viewer");
//! assert_eq!(guard.evaluate("/admin", Some(&viewer)).target(), Some("/"));
//! assert_eq!(guard.evaluate("/about", None), GuardDecision::Allow);
//! ```
use crate::{Principal, RouteTable};
use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Why a navigation was redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No principal was resolved for the request.
    Unauthenticated,
    /// A principal was resolved but its role does not cover the path.
    Unauthorized,
}

impl DenyReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DenyReason::Unauthenticated => "unauthenticated",
            DenyReason::Unauthorized => "unauthorized",
        }
    }
}

/// Outcome of guarding one navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuardDecision {
    Allow,
    Redirect { target: String, reason: DenyReason },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::Redirect { target, .. } => Some(target),
        }
    }

    /// Label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            GuardDecision::Allow => "allow",
            GuardDecision::Redirect {
                reason: DenyReason::Unauthenticated,
                ..
            } => "redirect_login",
            GuardDecision::Redirect {
                reason: DenyReason::Unauthorized,
                ..
            } => "redirect_home",
        }
    }
}

/// Guard bound to a route table.
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard<'r> {
    routes: &'r RouteTable,
}

impl RouteGuard<'static> {
    pub fn builtin() -> Self {
        Self::new(RouteTable::builtin())
    }
}

impl<'r> RouteGuard<'r> {
    pub fn new(routes: &'r RouteTable) -> Self {
        Self { routes }
    }

    /// Decide the navigation to `path` for `principal`.
    pub fn evaluate(&self, path: &str, principal: Option<&Principal>) -> GuardDecision {
        // A stored principal without a role counts as not signed in.
        let role = principal
            .map(|principal| principal.role.as_str())
            .filter(|role| !role.is_empty());

        if !self.routes.is_protected(path) {
            return GuardDecision::Allow;
        }

        let Some(role) = role else {
            return GuardDecision::Redirect {
                target: login_redirect(path),
                reason: DenyReason::Unauthenticated,
            };
        };

        if self.routes.has_access(Some(role), path) {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect {
                target: HOME_PATH.to_string(),
                reason: DenyReason::Unauthorized,
            }
        }
    }
}

/// Build `/login?redirect=<path>`.
///
/// `/` stays literal; characters that would change the meaning of the query
/// string are percent-encoded.
pub fn login_redirect(path: &str) -> String {
    let mut target = String::with_capacity(LOGIN_PATH.len() + 10 + path.len());
    target.push_str(LOGIN_PATH);
    target.push_str("?redirect=");
    for ch in path.chars() {
        match ch {
            '%' => target.push_str("%25"),
            '&' => target.push_str("%26"),
            '+' => target.push_str("%2B"),
            '#' => target.push_str("%23"),
            _ => target.push(ch),
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: &str) -> Principal {
        Principal::new("Test User", "test@example.com", role)
    }

    #[test]
    fn unauthenticated_protected_path_redirects_to_login() {
        let decision = RouteGuard::builtin().evaluate("/dashboard/settings", None);
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                target: "/login?redirect=/dashboard/settings".to_string(),
                reason: DenyReason::Unauthenticated,
            }
        );
        assert_eq!(decision.label(), "redirect_login");
    }

    #[test]
    fn viewer_on_admin_redirects_home() {
        let viewer = principal("Viewer");
        let decision = RouteGuard::builtin().evaluate("/admin", Some(&viewer));
        assert_eq!(decision.target(), Some("/"));
        assert_eq!(decision.label(), "redirect_home");
    }

    #[test]
    fn unprotected_path_always_allowed() {
        let guard = RouteGuard::builtin();
        assert!(guard.evaluate("/about", None).is_allowed());
        assert!(guard.evaluate("/about", Some(&principal("Owner"))).is_allowed());
        assert!(guard.evaluate("/login", None).is_allowed());
    }

    #[test]
    fn unknown_role_goes_home_not_login() {
        let guard = RouteGuard::builtin();
        for path in ["/admin", "/dashboard", "/settings/profile"] {
            let decision = guard.evaluate(path, Some(&principal("moderator")));
            assert_eq!(decision.target(), Some(HOME_PATH), "{path}");
        }
    }

    #[test]
    fn empty_role_counts_as_signed_out() {
        let decision = RouteGuard::builtin().evaluate("/dashboard", Some(&principal("")));
        assert_eq!(decision.target(), Some("/login?redirect=/dashboard"));
    }

    #[test]
    fn granted_roles_are_allowed() {
        let guard = RouteGuard::builtin();
        assert!(guard.evaluate("/admin", Some(&principal("Admin"))).is_allowed());
        assert!(guard.evaluate("/settings", Some(&principal("Admin"))).is_allowed());
        assert!(guard.evaluate("/dashboard", Some(&principal("Viewer"))).is_allowed());
        assert!(!guard.evaluate("/settings", Some(&principal("Analyst"))).is_allowed());
    }

    #[test]
    fn login_redirect_escapes_query_characters() {
        assert_eq!(login_redirect("/admin"), "/login?redirect=/admin");
        assert_eq!(
            login_redirect("/dashboard/a&b+c%20"),
            "/login?redirect=/dashboard/a%26b%2Bc%2520"
        );
    }

    #[test]
    fn deny_reason_strings_match_wire_names() {
        for reason in [DenyReason::Unauthenticated, DenyReason::Unauthorized] {
            let json = serde_json::to_value(reason).expect("reason");
            assert_eq!(json, reason.as_str());
        }
    }

    #[test]
    fn decision_serialization_shape() {
        let allow = serde_json::to_value(GuardDecision::Allow).expect("allow");
        assert_eq!(allow, serde_json::json!({"decision": "ALLOW"}));
        let redirect = serde_json::to_value(RouteGuard::builtin().evaluate("/admin", None))
            .expect("redirect");
        assert_eq!(
            redirect,
            serde_json::json!({
                "decision": "REDIRECT",
                "target": "/login?redirect=/admin",
                "reason": "unauthenticated"
            })
        );
    }
}

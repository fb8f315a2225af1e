//! Route table and prefix matching for console paths.
//!
//! # Purpose
//! Holds the protected path prefixes and the per-role allowed prefixes the
//! route guard consults.
//!
//! # Key invariants
//! - A path is protected iff it starts with a protected prefix.
//! - A role may enter a path iff one of its allowed prefixes is a prefix of
//!   the path. Any single match suffices; overlapping prefixes only add.
//! - Matching is plain string prefix matching: `/dashboard` covers
//!   `/dashboard/settings` and also `/dashboards`.
//!
//! # Examples
//! ```rust
//! use perceive_authz::RouteTable;
//!
//! let routes = RouteTable::builtin();
//! assert!(routes.is_protected("/dashboard/settings"));
//! assert!(routes.has_access(Some("Viewer"), "/dashboard"));
//! assert!(!routes.has_access(Some("Viewer"), "/admin"));
//! ```
use crate::catalog::RoleTable;
use crate::{AuthzResult, Role};
use std::collections::HashMap;
use std::sync::OnceLock;

const PROTECTED_ROUTES: &[&str] = &["/admin", "/dashboard", "/settings"];

const ROLE_ROUTES: RoleTable<'static> = &[
    (
        "Admin",
        &[
            "/admin",
            "/dashboard",
            "/settings",
            "/workflows",
            "/agents",
            "/policies",
        ],
    ),
    ("Analyst", &["/dashboard", "/workflows", "/agents", "/policies"]),
    ("Viewer", &["/dashboard"]),
];

static BUILTIN: OnceLock<RouteTable> = OnceLock::new();

/// Protected prefixes plus the prefixes each role may enter.
#[derive(Debug, Clone)]
pub struct RouteTable {
    protected: Vec<String>,
    allowed: HashMap<Role, Vec<String>>,
}

impl RouteTable {
    /// The console's built-in route table.
    pub fn builtin() -> &'static RouteTable {
        BUILTIN.get_or_init(|| {
            RouteTable::from_tables(PROTECTED_ROUTES, ROLE_ROUTES)
                .expect("built-in route table must be valid")
        })
    }

    /// Build a route table, validating role names.
    ///
    /// # Errors
    /// - [`crate::AuthzError::InvalidRole`] for an unknown role name.
    pub fn from_tables(protected: &[&str], allowed: RoleTable<'_>) -> AuthzResult<Self> {
        let mut table = Self {
            protected: protected.iter().map(|prefix| prefix.to_string()).collect(),
            allowed: Role::ALL.iter().map(|role| (*role, Vec::new())).collect(),
        };
        for (role, prefixes) in allowed {
            let role: Role = role.parse()?;
            let entry = table.allowed.entry(role).or_default();
            for prefix in *prefixes {
                if !entry.iter().any(|existing| existing == prefix) {
                    entry.push(prefix.to_string());
                }
            }
        }
        Ok(table)
    }

    pub fn protected_prefixes(&self) -> &[String] {
        &self.protected
    }

    /// Allowed prefixes for `role`; empty for unknown role strings.
    pub fn allowed_prefixes(&self, role: &str) -> &[String] {
        role.parse::<Role>()
            .ok()
            .and_then(|role| self.allowed.get(&role))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_protected(&self, path: &str) -> bool {
        starts_with_any(&self.protected, path)
    }

    /// Whether `role` may enter `path`.
    ///
    /// Without a role only unprotected paths are accessible.
    pub fn has_access(&self, role: Option<&str>, path: &str) -> bool {
        match role {
            None => !self.is_protected(path),
            Some(role) => starts_with_any(self.allowed_prefixes(role), path),
        }
    }
}

fn starts_with_any(prefixes: &[String], path: &str) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthzError;

    #[test]
    fn protected_prefixes() {
        let routes = RouteTable::builtin();
        assert!(routes.is_protected("/admin"));
        assert!(routes.is_protected("/admin/users"));
        assert!(routes.is_protected("/settings"));
        assert!(routes.is_protected("/dashboards"));
        assert!(!routes.is_protected("/"));
        assert!(!routes.is_protected("/about"));
        assert!(!routes.is_protected("/workflows"));
        assert!(!routes.is_protected("/login"));
    }

    #[test]
    fn role_access() {
        let routes = RouteTable::builtin();
        assert!(routes.has_access(Some("Admin"), "/admin/users"));
        assert!(routes.has_access(Some("Admin"), "/settings"));
        assert!(routes.has_access(Some("Analyst"), "/dashboard/settings"));
        assert!(!routes.has_access(Some("Analyst"), "/settings"));
        assert!(!routes.has_access(Some("Viewer"), "/workflows"));
        assert!(routes.has_access(Some("Viewer"), "/dashboard/logs"));
    }

    #[test]
    fn unknown_role_has_no_routes() {
        let routes = RouteTable::builtin();
        assert!(routes.allowed_prefixes("admin").is_empty());
        assert!(!routes.has_access(Some("admin"), "/dashboard"));
        assert!(!routes.has_access(Some("admin"), "/about"));
    }

    #[test]
    fn no_role_may_only_use_unprotected_paths() {
        let routes = RouteTable::builtin();
        assert!(routes.has_access(None, "/about"));
        assert!(!routes.has_access(None, "/dashboard"));
    }

    #[test]
    fn overlapping_prefixes_are_additive() {
        let routes = RouteTable::from_tables(
            &["/dashboard"],
            &[("Viewer", &["/dashboard/logs", "/dashboard", "/dashboard"])],
        )
        .expect("routes");
        assert_eq!(routes.allowed_prefixes("Viewer").len(), 2);
        assert!(routes.has_access(Some("Viewer"), "/dashboard/logs/today"));
        assert!(routes.has_access(Some("Viewer"), "/dashboard/metrics"));
    }

    #[test]
    fn rejects_unknown_role_names() {
        let err = RouteTable::from_tables(&[], &[("Root", &["/"])]).expect_err("unknown role");
        assert!(matches!(err, AuthzError::InvalidRole(_)));
    }
}

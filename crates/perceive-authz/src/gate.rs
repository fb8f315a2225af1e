//! UI gating adapters over the evaluator.
//!
//! # Purpose
//! Turns evaluator answers into presentation decisions: show this element or
//! its fallback, enable this action, list these navigation entries.
//!
//! # How it fits
//! Console handlers build gates per panel and evaluate them against the
//! request's principal snapshot. Gates hold selectors only, never a
//! principal, so the same gate can be reused across requests.
//!
//! # Key invariants
//! - Selector priority: `permission`, then `any_permission`, then
//!   `all_permissions`, then `feature`. An empty list counts as not supplied.
//! - No selector at all denies.
//! - `show_if_no_permission` inverts the final decision.
//!
//! # Examples
//! ```rust
//! use perceive_authz::{Action, Feature, Permission, PermissionGate, Principal, Resource};
//!
//! let viewer = Principal::new("Hari", "hari@example.com", "Viewer");
//! let gate = PermissionGate::feature(Feature::Logs);
//! assert_eq!(gate.render(Some(&viewer), "logs panel", "hidden"), "logs panel");
//!
//! let delete = PermissionGate::permission(Permission::on(Action::Delete, Resource::Agents));
//! assert!(!delete.allows(Some(&viewer)));
//! ```
use crate::{Action, Evaluator, Feature, Permission, Principal, Resource};
use serde::Serialize;

/// Conditional wrapper selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionGate {
    permission: Option<Permission>,
    any_permission: Vec<Permission>,
    all_permissions: Vec<Permission>,
    feature: Option<Feature>,
    show_if_no_permission: bool,
}

impl PermissionGate {
    /// Gate with no selectors; denies until one is added.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permission(permission: Permission) -> Self {
        Self::new().with_permission(permission)
    }

    pub fn any_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::new().with_any_permission(permissions)
    }

    pub fn all_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::new().with_all_permissions(permissions)
    }

    pub fn feature(feature: Feature) -> Self {
        Self::new().with_feature(feature)
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    pub fn with_any_permission(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.any_permission = permissions.into_iter().collect();
        self
    }

    pub fn with_all_permissions(
        mut self,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        self.all_permissions = permissions.into_iter().collect();
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.feature = Some(feature);
        self
    }

    /// Invert the decision: show the children only when access is missing.
    pub fn show_if_no_permission(mut self, invert: bool) -> Self {
        self.show_if_no_permission = invert;
        self
    }

    /// Evaluate against the built-in catalog.
    pub fn allows(&self, principal: Option<&Principal>) -> bool {
        self.allows_with(&Evaluator::builtin(), principal)
    }

    pub fn allows_with(&self, evaluator: &Evaluator<'_>, principal: Option<&Principal>) -> bool {
        let has_access = if let Some(permission) = self.permission {
            evaluator.has_permission(principal, permission)
        } else if !self.any_permission.is_empty() {
            evaluator.has_any_permission(principal, &self.any_permission)
        } else if !self.all_permissions.is_empty() {
            evaluator.has_all_permissions(principal, &self.all_permissions)
        } else if let Some(feature) = self.feature {
            evaluator.can_access_feature(principal, feature)
        } else {
            false
        };

        has_access != self.show_if_no_permission
    }

    /// Pick `children` when the gate allows, `fallback` otherwise.
    pub fn render<T>(&self, principal: Option<&Principal>, children: T, fallback: T) -> T {
        self.render_with(&Evaluator::builtin(), principal, children, fallback)
    }

    pub fn render_with<T>(
        &self,
        evaluator: &Evaluator<'_>,
        principal: Option<&Principal>,
        children: T,
        fallback: T,
    ) -> T {
        if self.allows_with(evaluator, principal) {
            children
        } else {
            fallback
        }
    }
}

/// Per-action check bound to a resource/action pair.
///
/// Holds no principal; every call evaluates the principal it is given, so a
/// login or logout between calls is reflected immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionHook {
    pub resource: Resource,
    pub action: Action,
}

impl ActionHook {
    pub fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    pub fn is_allowed(&self, principal: Option<&Principal>) -> bool {
        self.is_allowed_with(&Evaluator::builtin(), principal)
    }

    pub fn is_allowed_with(&self, evaluator: &Evaluator<'_>, principal: Option<&Principal>) -> bool {
        evaluator.can_perform_action(principal, self.resource, self.action)
    }
}

/// Dashboard sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub feature: Feature,
    /// Rendered above the main list.
    pub top: bool,
}

pub const NAVIGATION: [NavItem; 7] = [
    NavItem {
        name: "Metric Overview",
        href: "/dashboard#metrics",
        feature: Feature::Metrics,
        top: true,
    },
    NavItem {
        name: "Dashboard",
        href: "/dashboard",
        feature: Feature::Metrics,
        top: false,
    },
    NavItem {
        name: "Workflows",
        href: "/dashboard#workflows",
        feature: Feature::Workflows,
        top: false,
    },
    NavItem {
        name: "Agents",
        href: "/dashboard#agents",
        feature: Feature::Agents,
        top: false,
    },
    NavItem {
        name: "Policies",
        href: "/dashboard#policies",
        feature: Feature::Policies,
        top: false,
    },
    NavItem {
        name: "User Management",
        href: "/dashboard#users",
        feature: Feature::Users,
        top: false,
    },
    NavItem {
        name: "Logs",
        href: "/dashboard#logs",
        feature: Feature::Logs,
        top: false,
    },
];

/// Sidebar entries visible to `principal`, in display order.
pub fn visible_navigation(evaluator: &Evaluator<'_>, principal: Option<&Principal>) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .filter(|item| PermissionGate::feature(item.feature).allows_with(evaluator, principal))
        .copied()
        .collect()
}

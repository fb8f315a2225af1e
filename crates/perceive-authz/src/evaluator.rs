//! Permission evaluator.
//!
//! # Purpose
//! Answers "may this principal do X" against a [`PermissionCatalog`].
//!
//! # How it fits
//! The route guard, the UI gates and HTTP handlers all go through these
//! functions, so what the dashboard shows and what a request may do cannot
//! drift apart.
//!
//! # Key invariants
//! - Pure: same principal and arguments always give the same answer.
//! - Fail-closed: a `None` principal is denied everything, including the
//!   vacuous `has_all_permissions(None, [])`.
//! - Unknown roles resolve to empty grants, never to an error.
//!
//! # Examples
//! ```rust
//! use perceive_authz::{Action, Permission, Principal, Resource, evaluator};
//!
//! let admin = Principal::new("Ramesh Kumar", "ramesh@example.com", "Admin");
//! let delete_users = Permission::on(Action::Delete, Resource::Users);
//! assert!(evaluator::has_permission(Some(&admin), delete_users));
//! assert!(!evaluator::has_permission(None, delete_users));
//! ```
use crate::{Action, Feature, Permission, PermissionCatalog, Principal, Resource, Role};
use std::collections::BTreeSet;

/// Evaluator bound to a catalog.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'c> {
    catalog: &'c PermissionCatalog,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Evaluator<'static> {
    /// Evaluator over [`PermissionCatalog::builtin`].
    pub fn builtin() -> Self {
        Self::new(PermissionCatalog::builtin())
    }
}

impl<'c> Evaluator<'c> {
    pub fn new(catalog: &'c PermissionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c PermissionCatalog {
        self.catalog
    }

    fn granted(&self, principal: &Principal) -> &'c BTreeSet<Permission> {
        self.catalog.permissions_for(&principal.role)
    }

    pub fn has_permission(&self, principal: Option<&Principal>, permission: Permission) -> bool {
        principal.is_some_and(|principal| self.granted(principal).contains(&permission))
    }

    /// True if at least one of `permissions` is granted; false for an empty list.
    pub fn has_any_permission(
        &self,
        principal: Option<&Principal>,
        permissions: &[Permission],
    ) -> bool {
        let Some(principal) = principal else {
            return false;
        };
        let granted = self.granted(principal);
        permissions.iter().any(|permission| granted.contains(permission))
    }

    /// True if every one of `permissions` is granted; true for an empty list
    /// unless the principal is absent.
    pub fn has_all_permissions(
        &self,
        principal: Option<&Principal>,
        permissions: &[Permission],
    ) -> bool {
        let Some(principal) = principal else {
            return false;
        };
        let granted = self.granted(principal);
        permissions.iter().all(|permission| granted.contains(permission))
    }

    pub fn can_access_feature(&self, principal: Option<&Principal>, feature: Feature) -> bool {
        principal.is_some_and(|principal| {
            self.catalog.features_for(&principal.role).contains(&feature)
        })
    }

    /// Check `action:resource`.
    pub fn can_perform_action(
        &self,
        principal: Option<&Principal>,
        resource: Resource,
        action: Action,
    ) -> bool {
        self.has_permission(principal, Permission::on(action, resource))
    }

    /// String form of [`Evaluator::can_perform_action`] for callers at the
    /// request boundary. Values outside the enumerations are denied.
    pub fn can_perform_action_str(
        &self,
        principal: Option<&Principal>,
        resource: &str,
        action: &str,
    ) -> bool {
        match (resource.parse::<Resource>(), action.parse::<Action>()) {
            (Ok(resource), Ok(action)) => self.can_perform_action(principal, resource, action),
            _ => false,
        }
    }

    /// Every permission granted to the principal; empty when absent.
    pub fn user_permissions(&self, principal: Option<&Principal>) -> BTreeSet<Permission> {
        principal
            .map(|principal| self.granted(principal).clone())
            .unwrap_or_default()
    }

    /// Every feature granted to the principal; empty when absent.
    pub fn user_features(&self, principal: Option<&Principal>) -> BTreeSet<Feature> {
        principal
            .map(|principal| self.catalog.features_for(&principal.role).clone())
            .unwrap_or_default()
    }
}

pub fn has_permission(principal: Option<&Principal>, permission: Permission) -> bool {
    Evaluator::builtin().has_permission(principal, permission)
}

pub fn has_any_permission(principal: Option<&Principal>, permissions: &[Permission]) -> bool {
    Evaluator::builtin().has_any_permission(principal, permissions)
}

pub fn has_all_permissions(principal: Option<&Principal>, permissions: &[Permission]) -> bool {
    Evaluator::builtin().has_all_permissions(principal, permissions)
}

pub fn can_access_feature(principal: Option<&Principal>, feature: Feature) -> bool {
    Evaluator::builtin().can_access_feature(principal, feature)
}

pub fn can_perform_action(principal: Option<&Principal>, resource: Resource, action: Action) -> bool {
    Evaluator::builtin().can_perform_action(principal, resource, action)
}

pub fn get_user_permissions(principal: Option<&Principal>) -> BTreeSet<Permission> {
    Evaluator::builtin().user_permissions(principal)
}

/// Exact role match.
pub fn has_role(principal: Option<&Principal>, role: Role) -> bool {
    principal.is_some_and(|principal| principal.known_role() == Some(role))
}

pub fn has_any_role(principal: Option<&Principal>, roles: &[Role]) -> bool {
    principal
        .and_then(Principal::known_role)
        .is_some_and(|role| roles.contains(&role))
}

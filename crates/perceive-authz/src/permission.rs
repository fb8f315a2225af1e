//! Permission primitives.
//!
//! # Purpose
//! Defines the typed `action:target` permission and its fixed enumeration.
//!
//! # How it fits
//! Catalog tables are declared as strings and parsed into [`Permission`]
//! values at load time; everything past that boundary compares typed pairs,
//! so a typo in a permission name fails parsing instead of silently never
//! matching.
//!
//! # Key invariants
//! - Permission strings are `action:target`.
//! - [`Permission::ALL`] is the complete enumeration; parsing rejects any pair
//!   outside it.
//! - A pair built in code outside the enumeration is representable but is
//!   never granted by a validated catalog.
//!
//! # Examples
//! ```rust
//! use perceive_authz::{Action, Permission, Resource};
//!
//! let permission = Permission::on(Action::Delete, Resource::Users);
//! assert_eq!(permission.to_string(), "delete:users");
//! assert_eq!("delete:users".parse::<Permission>().ok(), Some(permission));
//! ```
//!
//! # Common pitfalls
//! - Parsing `create:logs` fails: `logs` only supports `view`.
use crate::{Action, AuthzError, AuthzResult, Resource, Target};
use serde::{Deserialize, Serialize};

/// Capability to perform `action` on `target`.
///
/// # Summary
/// Holds the typed action/target pair. Serializes as its `action:target`
/// string.
///
/// # Example
/// ```rust
/// use perceive_authz::{Action, Permission, Target};
///
/// let permission = Permission::new(Action::View, Target::Logs);
/// assert!(permission.is_known());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    pub action: Action,
    pub target: Target,
}

impl Permission {
    /// Every permission the console knows about.
    pub const ALL: [Permission; 20] = [
        Permission::new(Action::View, Target::Workflows),
        Permission::new(Action::Create, Target::Workflows),
        Permission::new(Action::Edit, Target::Workflows),
        Permission::new(Action::Delete, Target::Workflows),
        Permission::new(Action::View, Target::Agents),
        Permission::new(Action::Create, Target::Agents),
        Permission::new(Action::Edit, Target::Agents),
        Permission::new(Action::Delete, Target::Agents),
        Permission::new(Action::View, Target::Policies),
        Permission::new(Action::Create, Target::Policies),
        Permission::new(Action::Edit, Target::Policies),
        Permission::new(Action::Delete, Target::Policies),
        Permission::new(Action::View, Target::Users),
        Permission::new(Action::Create, Target::Users),
        Permission::new(Action::Edit, Target::Users),
        Permission::new(Action::Delete, Target::Users),
        Permission::new(Action::View, Target::Logs),
        Permission::new(Action::View, Target::Metrics),
        Permission::new(Action::View, Target::Settings),
        Permission::new(Action::Edit, Target::Settings),
    ];

    /// Create a permission from an action and target.
    pub const fn new(action: Action, target: Target) -> Self {
        Self { action, target }
    }

    /// Create a permission on one of the managed resources.
    ///
    /// # Returns
    /// - The `action:resource` permission.
    pub fn on(action: Action, resource: Resource) -> Self {
        Self::new(action, resource.into())
    }

    /// Whether the pair belongs to [`Permission::ALL`].
    pub fn is_known(&self) -> bool {
        Self::ALL.contains(self)
    }

    /// Parse a permission string.
    ///
    /// # Errors
    /// - [`AuthzError::InvalidPermission`] if the string is missing a colon.
    /// - [`AuthzError::InvalidAction`] / [`AuthzError::InvalidTarget`] for
    ///   unknown halves.
    /// - [`AuthzError::UnknownPermission`] when both halves parse but the pair
    ///   is outside the enumeration.
    pub fn parse(value: &str) -> AuthzResult<Self> {
        value.parse()
    }
}

impl std::str::FromStr for Permission {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (action, target) = value
            .split_once(':')
            .ok_or_else(|| AuthzError::InvalidPermission(value.to_string()))?;
        let permission = Self::new(action.parse()?, target.parse()?);
        if !permission.is_known() {
            return Err(AuthzError::UnknownPermission(value.to_string()));
        }
        Ok(permission)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.action, self.target)
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.to_string()
    }
}

impl TryFrom<String> for Permission {
    type Error = AuthzError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn enumeration_is_unique_and_parses_back() {
        let unique: HashSet<_> = Permission::ALL.iter().collect();
        assert_eq!(unique.len(), Permission::ALL.len());
        for permission in Permission::ALL {
            let rendered = permission.to_string();
            assert_eq!(Permission::parse(&rendered).expect("parse"), permission);
        }
    }

    #[test]
    fn parse_rejects_missing_colon() {
        let err = Permission::parse("viewworkflows").expect_err("missing colon");
        assert!(matches!(err, AuthzError::InvalidPermission(_)));
    }

    #[test]
    fn parse_rejects_unknown_halves() {
        assert!(matches!(
            Permission::parse("approve:workflows"),
            Err(AuthzError::InvalidAction(_))
        ));
        assert!(matches!(
            Permission::parse("view:billing"),
            Err(AuthzError::InvalidTarget(_))
        ));
    }

    #[test]
    fn parse_rejects_pairs_outside_enumeration() {
        let err = Permission::parse("delete:logs").expect_err("not enumerated");
        assert!(matches!(err, AuthzError::UnknownPermission(_)));
        assert!(!Permission::new(Action::Create, Target::Metrics).is_known());
    }

    #[test]
    fn serializes_as_string() {
        let permission = Permission::on(Action::Edit, Resource::Agents);
        let json = serde_json::to_string(&permission).expect("serialize");
        assert_eq!(json, "\"edit:agents\"");
        let back: Permission = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, permission);
        assert!(serde_json::from_str::<Permission>("\"edit:logs\"").is_err());
    }
}

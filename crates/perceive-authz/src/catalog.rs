//! Permission catalog: the static role -> permission and role -> feature tables.
//!
//! # Purpose
//! Declares which permissions and dashboard features each role is granted and
//! exposes read-only lookups over those tables.
//!
//! # How it fits
//! The evaluator is a thin layer of set queries over this catalog. The tables
//! are declared as strings (the form an operator reads and reviews) and parsed
//! once; parsing doubles as validation of every entry.
//!
//! # Key invariants
//! - Immutable after construction; safe to share across threads.
//! - Every [`Role`] has an entry in both maps, possibly empty.
//! - Lookups by an unknown role string return the empty set.
//!
//! # Examples
//! ```rust
//! use perceive_authz::{Action, Permission, PermissionCatalog, Resource};
//!
//! let catalog = PermissionCatalog::builtin();
//! assert!(catalog
//!     .permissions_for("Admin")
//!     .contains(&Permission::on(Action::Delete, Resource::Users)));
//! assert!(catalog.permissions_for("Guest").is_empty());
//! ```
use crate::{AuthzResult, Feature, Permission, Role};
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// String table mapping a role name to its grants.
pub type RoleTable<'a> = &'a [(&'a str, &'a [&'a str])];

const ROLE_PERMISSIONS: RoleTable<'static> = &[
    (
        "Admin",
        &[
            "view:workflows",
            "create:workflows",
            "edit:workflows",
            "delete:workflows",
            "view:agents",
            "create:agents",
            "edit:agents",
            "delete:agents",
            "view:policies",
            "create:policies",
            "edit:policies",
            "delete:policies",
            "view:users",
            "create:users",
            "edit:users",
            "delete:users",
            "view:logs",
            "view:metrics",
            "view:settings",
            "edit:settings",
        ],
    ),
    (
        "Analyst",
        &[
            "view:workflows",
            "create:workflows",
            "edit:workflows",
            "view:agents",
            "create:agents",
            "edit:agents",
            "view:policies",
            "create:policies",
            "edit:policies",
            "view:logs",
            "view:metrics",
        ],
    ),
    (
        "Viewer",
        &[
            "view:workflows",
            "view:agents",
            "view:policies",
            "view:logs",
            "view:metrics",
        ],
    ),
];

const ROLE_FEATURES: RoleTable<'static> = &[
    (
        "Admin",
        &[
            "metrics",
            "workflows",
            "agents",
            "policies",
            "users",
            "logs",
            "settings",
        ],
    ),
    (
        "Analyst",
        &["metrics", "workflows", "agents", "policies", "logs"],
    ),
    (
        "Viewer",
        &["metrics", "workflows", "agents", "policies", "logs"],
    ),
];

static BUILTIN: OnceLock<PermissionCatalog> = OnceLock::new();
static NO_PERMISSIONS: BTreeSet<Permission> = BTreeSet::new();
static NO_FEATURES: BTreeSet<Feature> = BTreeSet::new();

/// Immutable role grants.
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    permissions: HashMap<Role, BTreeSet<Permission>>,
    features: HashMap<Role, BTreeSet<Feature>>,
}

impl PermissionCatalog {
    /// The console's built-in catalog, parsed on first use.
    ///
    /// # Panics
    /// - If the built-in tables contain an entry that does not parse. This is
    ///   covered by tests and cannot happen at runtime.
    pub fn builtin() -> &'static PermissionCatalog {
        BUILTIN.get_or_init(|| {
            PermissionCatalog::from_tables(ROLE_PERMISSIONS, ROLE_FEATURES)
                .expect("built-in permission catalog must be valid")
        })
    }

    /// Build a catalog from string tables, validating every entry.
    ///
    /// # Errors
    /// - [`crate::AuthzError::InvalidRole`] for a role name outside [`Role`].
    /// - Any permission parse error for malformed or unknown permissions.
    /// - [`crate::AuthzError::InvalidFeature`] for unknown features.
    pub fn from_tables(permissions: RoleTable<'_>, features: RoleTable<'_>) -> AuthzResult<Self> {
        let mut catalog = Self {
            permissions: Role::ALL.iter().map(|role| (*role, BTreeSet::new())).collect(),
            features: Role::ALL.iter().map(|role| (*role, BTreeSet::new())).collect(),
        };

        for (role, entries) in permissions {
            let role: Role = role.parse()?;
            let granted = catalog.permissions.entry(role).or_default();
            for entry in *entries {
                granted.insert(entry.parse()?);
            }
        }
        for (role, entries) in features {
            let role: Role = role.parse()?;
            let granted = catalog.features.entry(role).or_default();
            for entry in *entries {
                granted.insert(entry.parse()?);
            }
        }
        Ok(catalog)
    }

    /// Permissions granted to `role`; empty for unknown role strings.
    pub fn permissions_for(&self, role: &str) -> &BTreeSet<Permission> {
        match role.parse::<Role>() {
            Ok(role) => self.role_permissions(role),
            Err(_) => &NO_PERMISSIONS,
        }
    }

    /// Features granted to `role`; empty for unknown role strings.
    pub fn features_for(&self, role: &str) -> &BTreeSet<Feature> {
        match role.parse::<Role>() {
            Ok(role) => self.role_features(role),
            Err(_) => &NO_FEATURES,
        }
    }

    pub fn role_permissions(&self, role: Role) -> &BTreeSet<Permission> {
        self.permissions.get(&role).unwrap_or(&NO_PERMISSIONS)
    }

    pub fn role_features(&self, role: Role) -> &BTreeSet<Feature> {
        self.features.get(&role).unwrap_or(&NO_FEATURES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, AuthzError, Resource, Target};

    #[test]
    fn builtin_catalog_counts() {
        let catalog = PermissionCatalog::builtin();
        assert_eq!(catalog.role_permissions(Role::Admin).len(), Permission::ALL.len());
        assert_eq!(catalog.role_permissions(Role::Analyst).len(), 11);
        assert_eq!(catalog.role_permissions(Role::Viewer).len(), 5);
        assert_eq!(catalog.role_features(Role::Admin).len(), Feature::ALL.len());
        assert_eq!(catalog.role_features(Role::Analyst).len(), 5);
        assert_eq!(catalog.role_features(Role::Viewer).len(), 5);
    }

    #[test]
    fn analyst_cannot_delete_or_manage_users() {
        let granted = PermissionCatalog::builtin().role_permissions(Role::Analyst);
        for resource in Resource::ALL {
            assert!(!granted.contains(&Permission::on(Action::Delete, resource)));
        }
        assert!(!granted.contains(&Permission::on(Action::View, Resource::Users)));
        assert!(!granted.contains(&Permission::new(Action::View, Target::Settings)));
    }

    #[test]
    fn unknown_role_strings_have_no_grants() {
        let catalog = PermissionCatalog::builtin();
        assert!(catalog.permissions_for("admin").is_empty());
        assert!(catalog.permissions_for("").is_empty());
        assert!(catalog.features_for("moderator").is_empty());
    }

    #[test]
    fn every_role_has_an_entry_even_when_table_omits_it() {
        let catalog =
            PermissionCatalog::from_tables(&[("Admin", &["view:logs"])], &[]).expect("catalog");
        assert!(catalog.role_permissions(Role::Viewer).is_empty());
        assert!(catalog.role_features(Role::Admin).is_empty());
        assert_eq!(catalog.permissions_for("Admin").len(), 1);
    }

    #[test]
    fn duplicate_entries_collapse() {
        let catalog = PermissionCatalog::from_tables(
            &[("Viewer", &["view:logs", "view:logs"])],
            &[("Viewer", &["logs", "logs"])],
        )
        .expect("catalog");
        assert_eq!(catalog.role_permissions(Role::Viewer).len(), 1);
        assert_eq!(catalog.role_features(Role::Viewer).len(), 1);
    }

    #[test]
    fn validation_rejects_bad_entries() {
        let err = PermissionCatalog::from_tables(&[("Admin", &["view:logz"])], &[])
            .expect_err("bad target");
        assert!(matches!(err, AuthzError::InvalidTarget(_)));

        let err = PermissionCatalog::from_tables(&[("Admin", &["edit:logs"])], &[])
            .expect_err("outside enumeration");
        assert!(matches!(err, AuthzError::UnknownPermission(_)));

        let err = PermissionCatalog::from_tables(&[("Owner", &["view:logs"])], &[])
            .expect_err("unknown role");
        assert!(matches!(err, AuthzError::InvalidRole(_)));

        let err = PermissionCatalog::from_tables(&[], &[("Admin", &["billing"])])
            .expect_err("unknown feature");
        assert!(matches!(err, AuthzError::InvalidFeature(_)));
    }
}

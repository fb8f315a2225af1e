//! Strongly typed role and feature identifiers.
//!
//! # Purpose
//! Wraps the closed role set and the coarse UI feature set so catalogs and
//! route tables cannot be keyed by misspelled strings.
//!
//! # How it fits
//! A [`crate::Principal`] carries its role as a raw string (it comes from a
//! cookie or a user table). Lookups parse it into a [`Role`]; a string that
//! does not parse simply has no grants.
//!
//! # Key invariants
//! - Role names are case-sensitive: `Admin`, `Analyst`, `Viewer`.
//! - Feature names are lowercase.
//!
//! # Examples
//! ```rust
//! use perceive_authz::{Feature, Role};
//!
//! assert_eq!("Analyst".parse::<Role>().ok(), Some(Role::Analyst));
//! assert!("admin".parse::<Role>().is_err());
//! assert_eq!(Feature::Users.as_str(), "users");
//! ```
use serde::{Deserialize, Serialize};

use crate::AuthzError;

/// Console role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Analyst,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Analyst, Role::Viewer];

    /// Access the canonical role name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Analyst => "Analyst",
            Role::Viewer => "Viewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Admin" => Ok(Role::Admin),
            "Analyst" => Ok(Role::Analyst),
            "Viewer" => Ok(Role::Viewer),
            _ => Err(AuthzError::InvalidRole(value.to_string())),
        }
    }
}

/// Coarse UI section used for visibility decisions.
///
/// # Summary
/// Distinct from [`crate::Permission`]: a feature says whether a dashboard
/// section is shown at all, not which operations it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Metrics,
    Workflows,
    Agents,
    Policies,
    Users,
    Logs,
    Settings,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Metrics,
        Feature::Workflows,
        Feature::Agents,
        Feature::Policies,
        Feature::Users,
        Feature::Logs,
        Feature::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Metrics => "metrics",
            Feature::Workflows => "workflows",
            Feature::Agents => "agents",
            Feature::Policies => "policies",
            Feature::Users => "users",
            Feature::Logs => "logs",
            Feature::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Feature {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str() == value)
            .ok_or_else(|| AuthzError::InvalidFeature(value.to_string()))
    }
}

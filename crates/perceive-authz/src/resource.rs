//! Resource and permission-target identifiers.
//!
//! # Purpose
//! Names the objects that permissions apply to.
//!
//! # How it fits
//! [`Resource`] is the closed set accepted by per-action checks
//! (`can_perform_action`). [`Target`] is the wider set that appears on the
//! right-hand side of a permission string, adding the standalone sections
//! (`logs`, `metrics`, `settings`) that have no create/delete variants.
//!
//! # Key invariants
//! - Every [`Resource`] converts to a [`Target`] with the same string form.
//! - String forms are lowercase and stable; they appear in catalogs and JSON.
//!
//! # Examples
//! ```rust
//! use perceive_authz::{Resource, Target};
//!
//! let target: Target = Resource::Workflows.into();
//! assert_eq!(target.as_str(), "workflows");
//! ```
use serde::{Deserialize, Serialize};

use crate::AuthzError;

/// Managed resource kinds that support the full view/create/edit/delete set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Workflows,
    Agents,
    Policies,
    Users,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Workflows,
        Resource::Agents,
        Resource::Policies,
        Resource::Users,
    ];

    pub fn as_str(self) -> &'static str {
        Target::from(self).as_str()
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Resource {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "workflows" => Ok(Resource::Workflows),
            "agents" => Ok(Resource::Agents),
            "policies" => Ok(Resource::Policies),
            "users" => Ok(Resource::Users),
            _ => Err(AuthzError::InvalidResource(value.to_string())),
        }
    }
}

/// Object half of an `action:target` permission.
///
/// # Invariants
/// - The four managed resources keep the same spelling as [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Workflows,
    Agents,
    Policies,
    Users,
    Logs,
    Metrics,
    Settings,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Workflows => "workflows",
            Target::Agents => "agents",
            Target::Policies => "policies",
            Target::Users => "users",
            Target::Logs => "logs",
            Target::Metrics => "metrics",
            Target::Settings => "settings",
        }
    }
}

impl From<Resource> for Target {
    fn from(resource: Resource) -> Self {
        match resource {
            Resource::Workflows => Target::Workflows,
            Resource::Agents => Target::Agents,
            Resource::Policies => Target::Policies,
            Resource::Users => Target::Users,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Target {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "workflows" => Ok(Target::Workflows),
            "agents" => Ok(Target::Agents),
            "policies" => Ok(Target::Policies),
            "users" => Ok(Target::Users),
            "logs" => Ok(Target::Logs),
            "metrics" => Ok(Target::Metrics),
            "settings" => Ok(Target::Settings),
            _ => Err(AuthzError::InvalidTarget(value.to_string())),
        }
    }
}

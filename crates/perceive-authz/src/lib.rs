//! Perceive console access control.
//!
//! # Purpose
//! Centralizes the role-based access model of the console: the fixed
//! permission catalog, the evaluator that answers permission questions, the
//! route guard for console paths, and the UI gates built on top of them.
//!
//! # How it fits
//! The console service resolves a [`Principal`] per request and passes it
//! explicitly to the guard, evaluator and gates from this crate. Because all
//! three read the same catalog, what a page shows and what a route allows
//! agree by construction.
//!
//! # Key invariants
//! - Permission strings follow `action:target` and are parsed into typed
//!   pairs at load time.
//! - Every check fails closed: no principal, unknown role or unknown
//!   permission means `false`, never an error.
//! - Catalog and route table are immutable after first use.
//!
//! # Examples
//! ```rust
//! use perceive_authz::{Action, Feature, Principal, Resource, RouteGuard, evaluator};
//!
//! let analyst = Principal::new("Sita Devi", "sita@example.com", "Analyst");
//! assert!(evaluator::can_perform_action(Some(&analyst), Resource::Agents, Action::Edit));
//! assert!(!evaluator::can_access_feature(Some(&analyst), Feature::Users));
//! assert!(RouteGuard::builtin().evaluate("/dashboard", Some(&analyst)).is_allowed());
//! ```
//!
//! # Common pitfalls
//! - Role names are case-sensitive; `admin` is an unknown role with no grants.
//! - Holding a principal across an await point and reusing it after logout;
//!   resolve it again from the provider instead.

mod action;
pub mod catalog;
mod errors;
pub mod evaluator;
pub mod gate;
pub mod guard;
mod permission;
mod principal;
mod resource;
pub mod route;
mod types;

pub use action::Action;
pub use catalog::PermissionCatalog;
pub use errors::{AuthzError, AuthzResult};
pub use evaluator::Evaluator;
pub use gate::{ActionHook, NavItem, PermissionGate};
pub use guard::{DenyReason, GuardDecision, RouteGuard};
pub use permission::Permission;
pub use principal::{Principal, PrincipalProvider, SessionStore};
pub use resource::{Resource, Target};
pub use route::RouteTable;
pub use types::{Feature, Role};

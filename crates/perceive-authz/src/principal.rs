//! Principal model and session provider interface.
//!
//! # Purpose
//! Defines the authenticated user record and the accessor through which
//! callers obtain the current one.
//!
//! # How it fits
//! Evaluators and the route guard never read session state themselves. A
//! caller asks a [`PrincipalProvider`] once per render or request and threads
//! the returned snapshot through every check it makes.
//!
//! # Key invariants
//! - `role` is kept as the raw string that was persisted; an unrecognized
//!   value is not an error, it just has no grants.
//! - After [`SessionStore::logout`] returns, `current_principal` yields `None`.
//! - [`SessionStore::login`] returns only once the new principal is visible
//!   to readers.
use crate::Role;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Authenticated user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Principal {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// The parsed role, if the stored name is one of the console roles.
    pub fn known_role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

/// Source of the current principal.
pub trait PrincipalProvider: Send + Sync {
    fn current_principal(&self) -> Option<Principal>;
}

/// In-memory session holding at most one principal.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Principal>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session principal.
    pub fn login(&self, principal: Principal) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(principal);
    }

    /// Clear the session principal.
    pub fn logout(&self) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = None;
    }
}

impl PrincipalProvider for SessionStore {
    fn current_principal(&self) -> Option<Principal> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

//! Static user directory backing the login form.
//!
//! # Purpose
//! Checks email/password pairs against a fixed user table and yields the
//! [`Principal`] that is stored in the session on success.
//!
//! # Notes
//! The built-in table holds one user per console role. A deployment can
//! replace it through the `users` list of the YAML config. Passwords never
//! leave this module: the returned principal carries name, email and role
//! only.
use async_trait::async_trait;
use perceive_authz::Principal;
use serde::Deserialize;

/// One row of the user table.
#[derive(Clone, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(name: &str, email: &str, role: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            password: password.to_string(),
        }
    }

    pub fn principal(&self) -> Principal {
        Principal::new(&self.name, &self.email, &self.role)
    }
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[async_trait]
pub trait UserStore {
    /// Principal for a matching email/password pair, `None` otherwise.
    async fn authenticate(&self, email: &str, password: &str) -> Option<Principal>;

    /// Every user, without credentials.
    async fn list_users(&self) -> Vec<Principal>;
}

/// In-memory user table.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: Vec<UserRecord>,
}

impl InMemoryUserStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            UserRecord::new("Ramesh Kumar", "ramesh@example.com", "Admin", "password123"),
            UserRecord::new("Sita Devi", "sita@example.com", "Analyst", "sita123"),
            UserRecord::new("Hari Shrestha", "hari@example.com", "Viewer", "hari456"),
        ])
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn authenticate(&self, email: &str, password: &str) -> Option<Principal> {
        self.users
            .iter()
            .find(|user| user.email == email && user.password == password)
            .map(UserRecord::principal)
    }

    async fn list_users(&self) -> Vec<Principal> {
        self.users.iter().map(UserRecord::principal).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn authenticate_requires_exact_match() {
        let store = InMemoryUserStore::builtin();
        let principal = store
            .authenticate("sita@example.com", "sita123")
            .await
            .expect("valid credentials");
        assert_eq!(principal.role, "Analyst");
        assert!(store.authenticate("sita@example.com", "wrong").await.is_none());
        assert!(store.authenticate("SITA@example.com", "sita123").await.is_none());
        assert!(store.authenticate("", "").await.is_none());
    }

    #[tokio::test]
    async fn builtin_covers_every_role() {
        let users = InMemoryUserStore::builtin().list_users().await;
        for role in perceive_authz::Role::ALL {
            assert!(users.iter().any(|user| user.known_role() == Some(role)));
        }
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!(
            "{:?}",
            UserRecord::new("Ops", "ops@example.com", "Admin", "hunter2")
        );
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("redacted"));
    }
}

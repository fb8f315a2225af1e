use thiserror::Error;

/// Parse and validation failures at the string boundary.
///
/// Access denial is never reported through this type; evaluators return
/// `false` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("invalid permission: {0}")]
    InvalidPermission(String),
    #[error("invalid permission target: {0}")]
    InvalidTarget(String),
    #[error("permission not in catalog enumeration: {0}")]
    UnknownPermission(String),
    #[error("invalid resource: {0}")]
    InvalidResource(String),
    #[error("invalid feature: {0}")]
    InvalidFeature(String),
    #[error("invalid role: {0}")]
    InvalidRole(String),
}

pub type AuthzResult<T> = Result<T, AuthzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            AuthzError::InvalidAction("bad".to_string()),
            AuthzError::InvalidPermission("bad".to_string()),
            AuthzError::InvalidTarget("bad".to_string()),
            AuthzError::UnknownPermission("create:logs".to_string()),
            AuthzError::InvalidResource("bad".to_string()),
            AuthzError::InvalidFeature("bad".to_string()),
            AuthzError::InvalidRole("bad".to_string()),
        ];

        for error in errors {
            let rendered = error.to_string();
            assert!(!rendered.is_empty());
        }
    }
}

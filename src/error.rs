//! Error types for monitor provisioning.

use thiserror::Error;

/// Errors that can occur when provisioning monitors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An actions key is not a numeric alert status.
    ///
    /// Raised while building the outgoing entity, before any remote call.
    #[error("invalid action key {key:?}: expected a numeric alert status")]
    InvalidActionKey {
        /// The offending map key.
        key: String,
    },

    /// The requested entity does not exist on the remote service.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other failure reported by the remote service or transport.
    #[error("remote API error: {0}")]
    Remote(String),
}

impl ApiError {
    /// Build a [`ApiError::NotFound`] describing the missing entity.
    pub fn not_found(entity: impl Into<String>) -> Self {
        ApiError::NotFound(entity.into())
    }

    /// Build a [`ApiError::Remote`] from any failure message.
    pub fn remote(message: impl Into<String>) -> Self {
        ApiError::Remote(message.into())
    }

    /// Whether this error means the entity is absent remotely.
    ///
    /// Delete treats an absent entity as success; existence checks map it
    /// to `false`. Every other error kind propagates.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_classifiable() {
        assert!(ApiError::not_found("monitor mon-1").is_not_found());
        assert!(!ApiError::remote("500 internal error").is_not_found());
        assert!(!ApiError::InvalidActionKey { key: "abc".into() }.is_not_found());
    }

    #[test]
    fn messages_carry_context() {
        let err = ApiError::InvalidActionKey { key: "down".into() };
        assert_eq!(
            err.to_string(),
            "invalid action key \"down\": expected a numeric alert status"
        );
        assert_eq!(
            ApiError::not_found("monitor mon-9").to_string(),
            "not found: monitor mon-9"
        );
    }
}

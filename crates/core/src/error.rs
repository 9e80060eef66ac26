//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (lookups,
/// stock checks, validation, conflicts). Console and IO concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// No item is stored under the requested name.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// A sale asked for more units than are in stock.
    #[error("insufficient quantity of {name}: requested {requested}, available {available}")]
    InsufficientQuantity {
        name: String,
        requested: u32,
        available: u32,
    },

    /// A value failed validation (e.g. blank name, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A conflict occurred (e.g. a name that is already taken).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ItemNotFound(name.into())
    }

    pub fn insufficient(name: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientQuantity {
            name: name.into(),
            requested,
            available,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_quantity_message_names_both_counts() {
        let err = DomainError::insufficient("Widget", 100, 6);
        assert_eq!(
            err.to_string(),
            "insufficient quantity of Widget: requested 100, available 6"
        );
    }

    #[test]
    fn not_found_is_detectable() {
        assert!(DomainError::not_found("Gadget").is_not_found());
        assert!(!DomainError::validation("bad").is_not_found());
    }
}

//! Domain error model.

use thiserror::Error;

use crate::id::{ItemId, ListId};

/// Result type used across the domain layer.
///
/// This is the sole error-propagation channel of the core: no operation
/// panics for an expected domain condition.
pub type DomainResult<T> = Result<T, DomainError>;

/// Machine-readable failure category.
///
/// The code is stable per failure kind and independent of the interpolated
/// message, so callers branch on the code rather than parsing text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    Conflict,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Conflict => "CONFLICT",
        }
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (lookups,
/// validation, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced shopping list does not exist.
    #[error("Shopping list {0} was not found")]
    ListNotFound(ListId),

    /// A referenced item does not exist in the targeted list.
    #[error("Item {0} was not found in the list")]
    ItemNotFound(ItemId),

    /// Another list already carries this name (compared ignoring case).
    #[error("A list with the name \"{0}\" already exists")]
    DuplicateList(String),

    /// A list name trimmed down to nothing.
    #[error("List name cannot be empty")]
    InvalidListName,

    /// An item's product reference trimmed down to nothing.
    #[error("Item name cannot be empty")]
    InvalidItemName,

    /// A value failed validation (quantity guard, status parse, id parse).
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Stable machine-readable code for this failure kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::ListNotFound(_) | DomainError::ItemNotFound(_) => ErrorCode::NotFound,
            DomainError::DuplicateList(_) => ErrorCode::Conflict,
            DomainError::InvalidListName
            | DomainError::InvalidItemName
            | DomainError::Validation(_) => ErrorCode::ValidationError,
        }
    }
}

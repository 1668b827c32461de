//! Error types for the items repository.
//!
//! Library callers get a structured [`RepositoryError`]; the binaries wrap it
//! in `anyhow` for reporting.

use std::fmt;

use thiserror::Error;

/// Repository operation that produced a store error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open,
    EnsureSchema,
    Insert,
    FindAll,
    FindByNameContains,
    FindById,
    CountById,
    UpdateFinishInDays,
    DeleteById,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Open => "open",
            Operation::EnsureSchema => "ensure_schema",
            Operation::Insert => "insert",
            Operation::FindAll => "find_all",
            Operation::FindByNameContains => "find_by_name_contains",
            Operation::FindById => "find_by_id",
            Operation::CountById => "count_by_id",
            Operation::UpdateFinishInDays => "update_finish_in_days",
            Operation::DeleteById => "delete_by_id",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Input rejected before reaching the store
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The store failed while running an operation
    #[error("{operation} failed: {source}")]
    Store {
        operation: Operation,
        #[source]
        source: rusqlite::Error,
    },
}

impl RepositoryError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The failing operation, for store errors.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Store { operation, .. } => Some(*operation),
            Self::Validation { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Attaches the failing [`Operation`] to a `rusqlite` result.
pub trait StoreContext<T> {
    fn store_context(self, operation: Operation) -> Result<T>;
}

impl<T> StoreContext<T> for rusqlite::Result<T> {
    fn store_context(self, operation: Operation) -> Result<T> {
        self.map_err(|source| RepositoryError::Store { operation, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_names_operation_and_cause() {
        let failed: rusqlite::Result<()> = Err(rusqlite::Error::InvalidQuery);
        let err = failed
            .store_context(Operation::UpdateFinishInDays)
            .unwrap_err();
        assert_eq!(err.operation(), Some(Operation::UpdateFinishInDays));
        assert!(err
            .to_string()
            .starts_with("update_finish_in_days failed: "));
    }

    #[test]
    fn validation_error_display() {
        let err = RepositoryError::validation("name", "must not be empty");
        assert!(err.is_validation());
        assert_eq!(err.operation(), None);
        assert_eq!(err.to_string(), "invalid name: must not be empty");
    }
}

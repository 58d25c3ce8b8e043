//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::Side;

/// Domain errors represent hierarchy rule violations.
/// All of them are recoverable: the tree is left untouched when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no team lead set, add a team lead before inserting employees")]
    NoRoot,

    #[error("invalid side '{0}', use 'left' or 'right'")]
    InvalidSide(String),

    #[error("manager named '{0}' not found")]
    ManagerNotFound(String),

    #[error("{manager} already has a {side} report ({occupant})")]
    SlotOccupied {
        manager: String,
        side: Side,
        occupant: String,
    },

    #[error("team lead already exists ({0})")]
    RootAlreadySet(String),

    #[error("employee name must not be empty")]
    EmptyName,
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! Error types

use thiserror::Error;

/// Errors raised by the checklist control and dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    #[error("no close listener registered before the control was created")]
    ListenerMissing,
    #[error("visible row count must be at least 1")]
    InvalidRowCount,
    #[error("the dialog is closed")]
    Closed,
    #[error("the dialog is still open")]
    StillOpen,
    #[error("item is not part of this checklist")]
    UnknownItem,
    #[error("row {index} out of range (len {len})")]
    RowOutOfRange { index: usize, len: usize },
}

/// Failure to read the current query text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryReadError {
    #[error("offset {offset} out of bounds (len {len})")]
    OutOfBounds { offset: usize, len: usize },
    #[error("offset {0} is not on a char boundary")]
    NotCharBoundary(usize),
}

//! Shell error type.

use checklist::ChecklistError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("checklist error: {0}")]
    Checklist(#[from] ChecklistError),
    #[error("invalid dialog config: {0}")]
    Config(#[from] serde_json::Error),
}

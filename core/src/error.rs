use thiserror::Error;

use crate::model::task::TaskId;

/// Errors reported back to the user. Neither variant touches the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Task not found (ID: {0}).")]
    NotFound(TaskId),
}

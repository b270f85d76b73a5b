/*
[INPUT]:  Failure paths of store mutations
[OUTPUT]: StoreError taxonomy returned to the presentation layer
[POS]:    Error handling layer - recoverable store errors
[UPDATE]: When adding new failure modes to store operations
*/

use thiserror::Error;

use crate::task::TaskId;
use crate::validation::FieldErrors;

/// Errors returned by [`crate::TaskStore`] mutations.
///
/// Both are recoverable: the collection is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// One or more fields failed validation
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// No task with this id is tracked
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl StoreError {
    /// Field errors when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            StoreError::Validation(errors) => Some(errors),
            StoreError::NotFound(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

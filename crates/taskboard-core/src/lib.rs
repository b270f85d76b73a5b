/*
[INPUT]:  Public API exports for taskboard-core crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod error;
pub mod event;
pub mod store;
pub mod task;
pub mod validation;

// Re-export main types for convenience
pub use error::StoreError;
pub use event::{Notification, Severity, StoreEvent, StoreListener};
pub use store::TaskStore;
pub use task::{DueDate, Priority, Task, TaskEdit, TaskId, TaskInput};
pub use validation::{FieldErrors, FormMode, TaskField, validate};

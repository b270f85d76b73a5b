/*
[INPUT]:  Successful store mutations
[OUTPUT]: StoreEvent values, user-facing Notification messages, listener trait
[POS]:    Event layer - decouples the store from any display mechanism
[UPDATE]: When store operations or outcome messages change
*/

use std::time::Duration;

use crate::task::Task;

/// How long an outcome message stays visible unless configured otherwise.
pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_secs(5);

pub const TASK_ADDED_MESSAGE: &str = "Task was added successfully!";
pub const TASK_UPDATED_MESSAGE: &str = "Task was updated successfully!";
pub const TASK_DELETED_MESSAGE: &str = "Task was deleted successfully!";

/// A successful mutation of the task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Task was appended to the collection
    Added(Task),

    /// Description, deadline or priority was replaced
    Updated(Task),

    /// Completion flag was flipped
    Toggled(Task),

    /// Task was removed (payload is the removed task)
    Deleted(Task),
}

impl StoreEvent {
    pub fn task(&self) -> &Task {
        match self {
            StoreEvent::Added(task)
            | StoreEvent::Updated(task)
            | StoreEvent::Toggled(task)
            | StoreEvent::Deleted(task) => task,
        }
    }

    /// Outcome message for transient display. Toggling is silent.
    pub fn notification(&self) -> Option<Notification> {
        let message = match self {
            StoreEvent::Added(_) => TASK_ADDED_MESSAGE,
            StoreEvent::Updated(_) => TASK_UPDATED_MESSAGE,
            StoreEvent::Deleted(_) => TASK_DELETED_MESSAGE,
            StoreEvent::Toggled(_) => return None,
        };
        Some(Notification::success(message))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
}

/// Human-readable message meant to be shown briefly and dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub auto_hide: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            auto_hide: DEFAULT_AUTO_HIDE,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
            auto_hide: DEFAULT_AUTO_HIDE,
        }
    }

    pub fn with_auto_hide(mut self, auto_hide: Duration) -> Self {
        self.auto_hide = auto_hide;
        self
    }
}

/// Receives every successful store mutation, in order.
pub trait StoreListener: Send {
    fn on_event(&mut self, event: &StoreEvent);
}

impl<F> StoreListener for F
where
    F: FnMut(&StoreEvent) + Send,
{
    fn on_event(&mut self, event: &StoreEvent) {
        self(event)
    }
}

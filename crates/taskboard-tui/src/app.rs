/*
[INPUT]:  TaskStore, notification settings, and user actions routed from events
[OUTPUT]: Mutated AppState for rendering (table selection, dialog, snackbar, status)
[POS]:    TUI application state and action coordinator
[UPDATE]: When adding board actions or changing how store results surface
*/

use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use taskboard_core::{
    DueDate, Notification, StoreError, StoreEvent, StoreListener, Task, TaskField, TaskStore,
};
use tokio::sync::mpsc;
use tracing::debug;

use crate::config::NotificationConfig;
use crate::form::{DEADLINE_FORMAT_MESSAGE, DialogMode, TaskDialog};
use crate::snackbar::Snackbar;

pub const COMPLETED_EDIT_MESSAGE: &str = "Completed tasks cannot be edited!";

/// Forwards store events to the UI loop over an unbounded channel.
pub struct EventForwarder {
    tx: mpsc::UnboundedSender<StoreEvent>,
}

impl StoreListener for EventForwarder {
    fn on_event(&mut self, event: &StoreEvent) {
        if self.tx.send(event.clone()).is_err() {
            debug!("store event receiver dropped");
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub(crate) store: TaskStore,
    store_events: mpsc::UnboundedReceiver<StoreEvent>,
    pub(crate) table_state: TableState,
    pub(crate) dialog: Option<TaskDialog>,
    pub(crate) snackbar: Snackbar,
    auto_hide: Duration,
    pub(crate) status_message: String,
}

impl AppState {
    pub fn new(mut store: TaskStore, notifications: &NotificationConfig) -> Self {
        let (tx, store_events) = mpsc::unbounded_channel();
        store.subscribe(EventForwarder { tx });

        let mut table_state = TableState::default();
        if !store.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            store,
            store_events,
            table_state,
            dialog: None,
            snackbar: Snackbar::new(notifications.max_visible),
            auto_hide: notifications.auto_hide(),
            status_message: "Ready".to_string(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn dialog(&self) -> Option<&TaskDialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut TaskDialog> {
        self.dialog.as_mut()
    }

    pub fn snackbar(&self) -> &Snackbar {
        &self.snackbar
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let idx = self.table_state.selected()?;
        self.store.list().get(idx)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.store.len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.table_state.select(Some(next));
    }

    pub fn open_add_dialog(&mut self) {
        self.dialog = Some(TaskDialog::new_add(DueDate::today()));
    }

    /// Open the edit dialog for the selected task. Completed tasks stay read-only.
    pub fn open_edit_dialog(&mut self, now: Instant) {
        let Some(task) = self.selected_task() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        if task.is_completed() {
            self.notify(Notification::warning(COMPLETED_EDIT_MESSAGE), now);
            return;
        }
        self.dialog = Some(TaskDialog::for_task(task));
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task().map(Task::id) else {
            self.status_message = "no task selected".to_string();
            return;
        };
        if let Err(err) = self.store.toggle_completion(id) {
            self.status_message = format!("toggle task failed: {err}");
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_task().map(Task::id) else {
            self.status_message = "no task selected".to_string();
            return;
        };
        self.store.delete(id);
        self.clamp_selection();
    }

    /// Save the open dialog. Validation failures stay in the dialog next to their fields.
    pub fn submit_dialog(&mut self) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        let (due_date, malformed_deadline) = match dialog.deadline() {
            Ok(due_date) => (due_date, false),
            Err(err) => {
                debug!(error = %err, "malformed deadline");
                (None, true)
            }
        };

        let result = match dialog.mode() {
            DialogMode::Add => self.store.add(dialog.to_input(due_date)),
            DialogMode::Edit(id) => self.store.update(id, dialog.to_edit(due_date)),
        };

        match result {
            Ok(task) => {
                self.dialog = None;
                if let Some(index) = self.store.list().iter().position(|t| t.id() == task.id()) {
                    self.table_state.select(Some(index));
                }
            }
            Err(StoreError::Validation(mut errors)) => {
                if malformed_deadline {
                    errors.insert(TaskField::DueDate, DEADLINE_FORMAT_MESSAGE);
                }
                dialog.set_errors(errors);
            }
            Err(err @ StoreError::NotFound(_)) => {
                self.dialog = None;
                self.status_message = format!("save task failed: {err}");
                self.clamp_selection();
            }
        }
    }

    /// Move store outcomes into the snackbar.
    pub fn drain_store_events(&mut self, now: Instant) {
        while let Ok(event) = self.store_events.try_recv() {
            if let Some(notification) = event.notification() {
                self.notify(notification, now);
            }
        }
    }

    /// Periodic housekeeping: pick up store events and hide expired messages.
    pub fn tick(&mut self, now: Instant) {
        self.drain_store_events(now);
        self.snackbar.expire(now);
    }

    fn notify(&mut self, notification: Notification, now: Instant) {
        self.snackbar
            .push(notification.with_auto_hide(self.auto_hide), now);
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.table_state.select(None);
        } else if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        } else if let Some(selected) = self.table_state.selected() {
            if selected >= len {
                self.table_state.select(Some(len.saturating_sub(1)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::{Priority, TaskInput};

    fn app_with(titles: &[&str]) -> AppState {
        let due = DueDate::from_ymd(2025, 1, 1).unwrap();
        let store = TaskStore::with_seed(
            titles
                .iter()
                .map(|title| TaskInput::new(*title, "Description01", due, Priority::Low)),
        )
        .unwrap();
        AppState::new(store, &NotificationConfig::default())
    }

    #[test]
    fn test_initial_selection() {
        assert_eq!(app_with(&["Task01"]).selected_index(), Some(0));
        assert_eq!(app_with(&[]).selected_index(), None);
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut app = app_with(&["A", "B", "C"]);
        app.move_selection(5);
        assert_eq!(app.selected_index(), Some(2));
        app.move_selection(-10);
        assert_eq!(app.selected_index(), Some(0));
    }

    #[test]
    fn test_delete_last_row_moves_selection_up() {
        let mut app = app_with(&["A", "B"]);
        app.move_selection(1);
        app.delete_selected();
        assert_eq!(app.selected_index(), Some(0));
        app.delete_selected();
        assert_eq!(app.selected_index(), None);
        app.delete_selected();
        assert_eq!(app.status_message(), "no task selected");
    }

    #[test]
    fn test_seed_events_are_not_replayed() {
        let mut app = app_with(&["A"]);
        app.drain_store_events(Instant::now());
        assert!(app.snackbar().is_empty());
    }

    #[test]
    fn test_toggle_is_silent() {
        let mut app = app_with(&["A"]);
        app.toggle_selected();
        app.drain_store_events(Instant::now());
        assert!(app.selected_task().unwrap().is_completed());
        assert!(app.snackbar().is_empty());
    }

    #[test]
    fn test_completed_task_cannot_be_edited() {
        let mut app = app_with(&["A"]);
        app.toggle_selected();
        app.open_edit_dialog(Instant::now());
        assert!(app.dialog().is_none());
        let messages: Vec<_> = app
            .snackbar()
            .entries()
            .map(|entry| entry.notification.message.as_str())
            .collect();
        assert_eq!(messages, vec![COMPLETED_EDIT_MESSAGE]);
    }
}

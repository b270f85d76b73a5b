/*
[INPUT]:  Validated task inputs/edits and task ids from the presentation layer
[OUTPUT]: Ordered in-memory task collection and StoreEvent notifications
[POS]:    Domain logic - authoritative owner of the task collection
[UPDATE]: When store operations or collection invariants change
*/

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::event::{StoreEvent, StoreListener};
use crate::task::{Task, TaskEdit, TaskId, TaskInput};

/// In-memory task collection in insertion order.
///
/// Ids are unique for the store's lifetime and titles are unique at creation time.
/// Every successful mutation is reported to the registered listeners.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    listeners: Vec<Box<dyn StoreListener>>,
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from initial inputs, each validated like a regular add.
    pub fn with_seed<I>(seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = TaskInput>,
    {
        let mut store = Self::new();
        for input in seed {
            store.add(input)?;
        }
        Ok(store)
    }

    /// Register a listener for subsequent mutations.
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: StoreListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(Task::title)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validate `input` as a create form and append it with a fresh id.
    pub fn add(&mut self, input: TaskInput) -> Result<Task> {
        let errors = input.validate(self.titles());
        let TaskInput {
            title,
            description,
            due_date,
            priority,
        } = input;

        let (Some(due_date), Some(priority), true) = (due_date, priority, errors.is_empty()) else {
            debug!(title = %title, errors = %errors, "rejected new task");
            return Err(StoreError::Validation(errors));
        };

        let task = Task::new(self.fresh_id(), title, description, due_date, priority);
        info!(task_id = %task.id(), title = %task.title(), "task added");
        self.tasks.push(task.clone());
        self.emit(StoreEvent::Added(task.clone()));
        Ok(task)
    }

    /// Replace description, deadline and priority. Id, title and completion are kept.
    pub fn update(&mut self, id: TaskId, edit: TaskEdit) -> Result<Task> {
        let errors = edit.validate();
        let TaskEdit {
            description,
            due_date,
            priority,
        } = edit;

        let (Some(due_date), Some(priority), true) = (due_date, priority, errors.is_empty()) else {
            debug!(task_id = %id, errors = %errors, "rejected task edit");
            return Err(StoreError::Validation(errors));
        };

        let task = self.find_mut(id)?;
        task.apply_edit(description, due_date, priority);
        let task = task.clone();
        info!(task_id = %id, "task updated");
        self.emit(StoreEvent::Updated(task.clone()));
        Ok(task)
    }

    pub fn toggle_completion(&mut self, id: TaskId) -> Result<Task> {
        let task = self.find_mut(id)?;
        task.toggle();
        let task = task.clone();
        info!(task_id = %id, completed = task.is_completed(), "task completion toggled");
        self.emit(StoreEvent::Toggled(task.clone()));
        Ok(task)
    }

    /// Remove the task with `id`. Deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        let task = self.tasks.remove(index);
        info!(task_id = %id, title = %task.title(), "task deleted");
        self.emit(StoreEvent::Deleted(task.clone()));
        Some(task)
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task> {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => Ok(task),
            None => {
                warn!(task_id = %id, "task not found");
                Err(StoreError::NotFound(id))
            }
        }
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new_v4();
            if self.get(id).is_none() {
                return id;
            }
        }
    }

    fn emit(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}

/*
[INPUT]:  Raw task form values and the titles already in the collection
[OUTPUT]: Field-keyed validation messages (empty means valid)
[POS]:    Domain logic - task form validation ahead of store mutations
[UPDATE]: When required fields or validation messages change
*/

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::task::{DueDate, Priority, TaskEdit, TaskInput};

pub const TITLE_REQUIRED: &str = "Title is required!";
pub const TITLE_NOT_UNIQUE: &str = "Title must be unique!";
pub const DESCRIPTION_REQUIRED: &str = "Description is required!";
pub const DEADLINE_REQUIRED: &str = "Deadline is required!";
pub const PRIORITY_REQUIRED: &str = "Priority is required!";

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    Title,
    Description,
    DueDate,
    Priority,
}

impl TaskField {
    /// Label shown next to the field in forms.
    pub fn label(&self) -> &'static str {
        match self {
            TaskField::Title => "Title",
            TaskField::Description => "Description",
            TaskField::DueDate => "Deadline",
            TaskField::Priority => "Priority",
        }
    }
}

/// Which form is being validated. Titles only exist on the create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<'a> {
    Create { title: &'a str },
    Edit,
}

/// Validation messages keyed by field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<TaskField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: TaskField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: TaskField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: TaskField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (TaskField, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (TaskField, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, message) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validate raw form values.
///
/// Every field is checked and all failures are collected, so a form can flag each
/// invalid field at once. On the create form a missing title is reported instead of,
/// never alongside, a duplicate one. Title matching is exact and case-sensitive.
pub fn validate<'t, I>(
    mode: FormMode<'_>,
    description: &str,
    due_date: Option<DueDate>,
    priority: Option<Priority>,
    existing_titles: I,
) -> FieldErrors
where
    I: IntoIterator<Item = &'t str>,
{
    let mut errors = FieldErrors::new();

    if let FormMode::Create { title } = mode {
        if title.is_empty() {
            errors.insert(TaskField::Title, TITLE_REQUIRED);
        } else if existing_titles.into_iter().any(|existing| existing == title) {
            errors.insert(TaskField::Title, TITLE_NOT_UNIQUE);
        }
    }
    if description.is_empty() {
        errors.insert(TaskField::Description, DESCRIPTION_REQUIRED);
    }
    if due_date.is_none() {
        errors.insert(TaskField::DueDate, DEADLINE_REQUIRED);
    }
    if priority.is_none() {
        errors.insert(TaskField::Priority, PRIORITY_REQUIRED);
    }

    errors
}

impl TaskInput {
    /// Validate as a create form against the titles already taken.
    pub fn validate<'t, I>(&self, existing_titles: I) -> FieldErrors
    where
        I: IntoIterator<Item = &'t str>,
    {
        validate(
            FormMode::Create { title: &self.title },
            &self.description,
            self.due_date,
            self.priority,
            existing_titles,
        )
    }
}

impl TaskEdit {
    pub fn validate(&self) -> FieldErrors {
        validate(
            FormMode::Edit,
            &self.description,
            self.due_date,
            self.priority,
            std::iter::empty(),
        )
    }
}

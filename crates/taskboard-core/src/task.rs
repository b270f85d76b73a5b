/*
[INPUT]:  Raw field values collected by the presentation layer
[OUTPUT]: Task record, identifiers, priority and due-date value types
[POS]:    Data layer - task model shared by store and validator
[UPDATE]: When task fields or their text formats change
*/

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Text format used for due dates at the presentation boundary (MM/DD/YY).
pub const DUE_DATE_FORMAT: &str = "%m/%d/%y";

/// Opaque task identifier, assigned once by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[serde(alias = "med")]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Next level, wrapping from high back to low.
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous level, wrapping from low to high.
    pub fn previous(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority level: {value:?}")]
pub struct ParsePriorityError {
    pub value: String,
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError {
                value: value.to_string(),
            }),
        }
    }
}

/// Calendar date without a time component, exchanged as `MM/DD/YY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueDate(NaiveDate);

impl DueDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_DATE_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid due date {value:?}, expected MM/DD/YY")]
pub struct ParseDueDateError {
    pub value: String,
}

impl FromStr for DueDate {
    type Err = ParseDueDateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ParseDueDateError {
                value: value.to_string(),
            })
    }
}

impl TryFrom<String> for DueDate {
    type Error = ParseDueDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for DueDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

/// A tracked task. Only the store can create or mutate one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: DueDate,
    priority: Priority,
    completed: bool,
}

impl Task {
    pub(crate) fn new(
        id: TaskId,
        title: String,
        description: String,
        due_date: DueDate,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title,
            description,
            due_date,
            priority,
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> DueDate {
        self.due_date
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn apply_edit(&mut self, description: String, due_date: DueDate, priority: Priority) {
        self.description = description;
        self.due_date = due_date;
        self.priority = priority;
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Raw values for a new task, as collected by an add form.
///
/// `None` stands for a picker that was left empty; empty strings count as missing text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<DueDate>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl TaskInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: DueDate,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: Some(due_date),
            priority: Some(priority),
        }
    }
}

/// Raw values for editing an existing task. Titles are fixed, so there is none here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub description: String,
    pub due_date: Option<DueDate>,
    pub priority: Option<Priority>,
}

impl TaskEdit {
    pub fn new(description: impl Into<String>, due_date: DueDate, priority: Priority) -> Self {
        Self {
            description: description.into(),
            due_date: Some(due_date),
            priority: Some(priority),
        }
    }
}

impl From<&Task> for TaskEdit {
    fn from(task: &Task) -> Self {
        Self::new(task.description.clone(), task.due_date, task.priority)
    }
}

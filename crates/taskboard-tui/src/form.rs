/*
[INPUT]:  Task being edited (or defaults for a new one) and key events
[OUTPUT]: TaskDialog field state, focus, inline errors, and dialog actions
[POS]:    TUI component state for the add/edit task dialog
[UPDATE]: When dialog fields or key bindings change
*/

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskboard_core::task::ParseDueDateError;
use taskboard_core::{DueDate, FieldErrors, Priority, Task, TaskEdit, TaskField, TaskId, TaskInput};

/// Shown when the deadline text does not parse.
pub const DEADLINE_FORMAT_MESSAGE: &str = "Deadline must be MM/DD/YY!";

const ADD_FIELDS: &[TaskField] = &[
    TaskField::Title,
    TaskField::Description,
    TaskField::DueDate,
    TaskField::Priority,
];
const EDIT_FIELDS: &[TaskField] = &[TaskField::Description, TaskField::DueDate, TaskField::Priority];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit(TaskId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAction {
    Submit,
    Cancel,
    None,
}

/// Task dialog form data for adding or editing tasks
#[derive(Debug, Clone)]
pub struct TaskDialog {
    mode: DialogMode,
    title: String,
    description: String,
    deadline: String,
    priority: Option<Priority>,
    focus: TaskField,
    errors: FieldErrors,
}

impl TaskDialog {
    /// Empty add form defaulting to `today` and low priority.
    pub fn new_add(today: DueDate) -> Self {
        Self {
            mode: DialogMode::Add,
            title: String::new(),
            description: String::new(),
            deadline: today.to_string(),
            priority: Some(Priority::Low),
            focus: TaskField::Title,
            errors: FieldErrors::new(),
        }
    }

    pub fn for_task(task: &Task) -> Self {
        Self {
            mode: DialogMode::Edit(task.id()),
            title: task.title().to_string(),
            description: task.description().to_string(),
            deadline: task.due_date().to_string(),
            priority: Some(task.priority()),
            focus: TaskField::Description,
            errors: FieldErrors::new(),
        }
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Add Task",
            DialogMode::Edit(_) => "Edit Task",
        }
    }

    /// Fields shown in this dialog, in focus order. Titles are only editable when adding.
    pub fn fields(&self) -> &'static [TaskField] {
        match self.mode {
            DialogMode::Add => ADD_FIELDS,
            DialogMode::Edit(_) => EDIT_FIELDS,
        }
    }

    pub fn focus(&self) -> TaskField {
        self.focus
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deadline_text(&self) -> &str {
        &self.deadline
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Parsed deadline; blank text means no date was picked.
    pub fn deadline(&self) -> Result<Option<DueDate>, ParseDueDateError> {
        if self.deadline.trim().is_empty() {
            return Ok(None);
        }
        self.deadline.parse().map(Some)
    }

    pub fn to_input(&self, due_date: Option<DueDate>) -> TaskInput {
        TaskInput {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date,
            priority: self.priority,
        }
    }

    pub fn to_edit(&self, due_date: Option<DueDate>) -> TaskEdit {
        TaskEdit {
            description: self.description.clone(),
            due_date,
            priority: self.priority,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogAction {
        match key.code {
            KeyCode::Esc => DialogAction::Cancel,
            KeyCode::Enter => DialogAction::Submit,
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(1);
                DialogAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(-1);
                DialogAction::None
            }
            KeyCode::Left if self.focus == TaskField::Priority => {
                self.priority = Some(self.priority.map_or(Priority::Low, Priority::previous));
                DialogAction::None
            }
            KeyCode::Right if self.focus == TaskField::Priority => {
                self.priority = Some(self.priority.map_or(Priority::Low, Priority::next));
                DialogAction::None
            }
            KeyCode::Backspace => {
                if let Some(value) = self.focused_text_mut() {
                    value.pop();
                }
                DialogAction::None
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(value) = self.focused_text_mut() {
                    value.push(ch);
                } else {
                    match ch {
                        'l' => self.priority = Some(Priority::Low),
                        'm' => self.priority = Some(Priority::Medium),
                        'h' => self.priority = Some(Priority::High),
                        _ => {}
                    }
                }
                DialogAction::None
            }
            _ => DialogAction::None,
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let fields = self.fields();
        let current = fields
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0) as isize;
        let len = fields.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = fields[next];
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            TaskField::Title if self.mode == DialogMode::Add => Some(&mut self.title),
            TaskField::Description => Some(&mut self.description),
            TaskField::DueDate => Some(&mut self.deadline),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut TaskDialog, text: &str) {
        for ch in text.chars() {
            dialog.handle_key(key(KeyCode::Char(ch)));
        }
    }

    fn today() -> DueDate {
        DueDate::from_ymd(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_add_defaults() {
        let dialog = TaskDialog::new_add(today());
        assert_eq!(dialog.mode(), DialogMode::Add);
        assert!(dialog.title().is_empty());
        assert!(dialog.description().is_empty());
        assert_eq!(dialog.deadline_text(), "01/01/25");
        assert_eq!(dialog.priority(), Some(Priority::Low));
        assert_eq!(dialog.focus(), TaskField::Title);
        assert!(dialog.errors().is_empty());
    }

    #[test]
    fn test_typing_fills_focused_fields() {
        let mut dialog = TaskDialog::new_add(today());
        type_text(&mut dialog, "Task02");
        dialog.handle_key(key(KeyCode::Tab));
        type_text(&mut dialog, "Desc");
        dialog.handle_key(key(KeyCode::Backspace));

        let input = dialog.to_input(dialog.deadline().unwrap());
        assert_eq!(input.title, "Task02");
        assert_eq!(input.description, "Des");
        assert_eq!(input.due_date, Some(today()));
        assert_eq!(input.priority, Some(Priority::Low));
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut dialog = TaskDialog::new_add(today());
        dialog.handle_key(key(KeyCode::BackTab));
        assert_eq!(dialog.focus(), TaskField::Priority);
        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.focus(), TaskField::Title);
    }

    #[rstest]
    #[case(KeyCode::Right, Priority::Medium)]
    #[case(KeyCode::Left, Priority::High)]
    #[case(KeyCode::Char('h'), Priority::High)]
    #[case(KeyCode::Char('m'), Priority::Medium)]
    fn test_priority_keys(#[case] code: KeyCode, #[case] expected: Priority) {
        let mut dialog = TaskDialog::new_add(today());
        dialog.handle_key(key(KeyCode::BackTab));
        dialog.handle_key(key(code));
        assert_eq!(dialog.priority(), Some(expected));
    }

    #[test]
    fn test_edit_dialog_skips_title() {
        let mut store = taskboard_core::TaskStore::new();
        let task = store
            .add(TaskInput::new("Task01", "Description01", today(), Priority::High))
            .unwrap();
        let mut dialog = TaskDialog::for_task(&task);

        assert_eq!(dialog.mode(), DialogMode::Edit(task.id()));
        assert_eq!(dialog.focus(), TaskField::Description);
        for _ in 0..3 {
            dialog.handle_key(key(KeyCode::Tab));
            assert_ne!(dialog.focus(), TaskField::Title);
        }
        let edit = dialog.to_edit(dialog.deadline().unwrap());
        assert_eq!(edit, TaskEdit::from(&task));
    }

    #[test]
    fn test_deadline_parsing() {
        let mut dialog = TaskDialog::new_add(today());
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Tab));
        for _ in 0..8 {
            dialog.handle_key(key(KeyCode::Backspace));
        }
        assert_eq!(dialog.deadline().unwrap(), None);

        type_text(&mut dialog, "1/2/2025");
        assert!(dialog.deadline().is_err());
    }

    #[test]
    fn test_enter_and_esc() {
        let mut dialog = TaskDialog::new_add(today());
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), DialogAction::Submit);
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), DialogAction::Cancel);
    }
}

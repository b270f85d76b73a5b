/*
[INPUT]:  AppState driven through key events
[OUTPUT]: End-to-end checks of add/edit/toggle/delete flows and snackbar feedback
[POS]:    Integration test layer - board interaction
[UPDATE]: When hotkeys, dialog flow, or outcome messages change
*/

use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskboard_core::event::{TASK_ADDED_MESSAGE, TASK_DELETED_MESSAGE, TASK_UPDATED_MESSAGE};
use taskboard_core::validation::{DESCRIPTION_REQUIRED, TITLE_NOT_UNIQUE, TITLE_REQUIRED};
use taskboard_core::{DueDate, Priority, TaskField, TaskInput, TaskStore};
use taskboard_tui::AppState;
use taskboard_tui::config::NotificationConfig;
use taskboard_tui::events::handle_key_event;
use taskboard_tui::form::DEADLINE_FORMAT_MESSAGE;

fn press(app: &mut AppState, code: KeyCode) -> bool {
    handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut AppState, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn clear_field(app: &mut AppState) {
    for _ in 0..32 {
        press(app, KeyCode::Backspace);
    }
}

fn board(titles: &[&str]) -> AppState {
    let due = DueDate::from_ymd(2025, 1, 1).unwrap();
    let store = TaskStore::with_seed(
        titles
            .iter()
            .map(|title| TaskInput::new(*title, "Description01", due, Priority::Low)),
    )
    .unwrap();
    AppState::new(store, &NotificationConfig::default())
}

fn snack_messages(app: &AppState) -> Vec<String> {
    app.snackbar()
        .entries()
        .map(|entry| entry.notification.message.clone())
        .collect()
}

#[test]
fn test_add_task_through_dialog() {
    let mut app = board(&["Task01"]);

    press(&mut app, KeyCode::Char('a'));
    assert!(app.dialog().is_some());
    type_text(&mut app, "Task02");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Description02");
    press(&mut app, KeyCode::Tab);
    clear_field(&mut app);
    type_text(&mut app, "06/30/25");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert!(app.dialog().is_none());
    let tasks = app.store().list();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].title(), "Task02");
    assert_eq!(tasks[1].description(), "Description02");
    assert_eq!(tasks[1].due_date().to_string(), "06/30/25");
    assert_eq!(tasks[1].priority(), Priority::Medium);
    assert!(!tasks[1].is_completed());
    assert_eq!(app.selected_index(), Some(1));
    assert_eq!(snack_messages(&app), vec![TASK_ADDED_MESSAGE]);
}

#[test]
fn test_add_dialog_shows_every_error_and_stays_open() {
    let mut app = board(&[]);

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);

    let dialog = app.dialog().expect("dialog stays open");
    assert_eq!(dialog.errors().get(TaskField::Title), Some(TITLE_REQUIRED));
    assert_eq!(
        dialog.errors().get(TaskField::Description),
        Some(DESCRIPTION_REQUIRED)
    );
    assert!(!dialog.errors().contains(TaskField::DueDate));
    assert!(!dialog.errors().contains(TaskField::Priority));
    assert!(app.store().is_empty());
    assert!(app.snackbar().is_empty());
}

#[test]
fn test_duplicate_title_and_bad_deadline() {
    let mut app = board(&["Task01"]);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Task01");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Again");
    press(&mut app, KeyCode::Tab);
    clear_field(&mut app);
    type_text(&mut app, "2025-06-30");
    press(&mut app, KeyCode::Enter);

    let dialog = app.dialog().expect("dialog stays open");
    assert_eq!(dialog.errors().get(TaskField::Title), Some(TITLE_NOT_UNIQUE));
    assert_eq!(
        dialog.errors().get(TaskField::DueDate),
        Some(DEADLINE_FORMAT_MESSAGE)
    );
    assert_eq!(app.store().len(), 1);
}

#[test]
fn test_cancel_add_dialog() {
    let mut app = board(&[]);
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Draft");
    assert!(!press(&mut app, KeyCode::Esc));
    assert!(app.dialog().is_none());
    assert!(app.store().is_empty());
}

#[test]
fn test_edit_selected_task() {
    let mut app = board(&["Task01", "Task02"]);
    let target = app.store().list()[1].clone();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));
    let dialog = app.dialog().expect("edit dialog");
    assert_eq!(dialog.focus(), TaskField::Description);

    clear_field(&mut app);
    type_text(&mut app, "Rewritten");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('h'));
    press(&mut app, KeyCode::Enter);

    assert!(app.dialog().is_none());
    let updated = app.store().get(target.id()).unwrap();
    assert_eq!(updated.title(), "Task02");
    assert_eq!(updated.description(), "Rewritten");
    assert_eq!(updated.priority(), Priority::High);
    assert_eq!(updated.due_date(), target.due_date());
    assert_eq!(snack_messages(&app), vec![TASK_UPDATED_MESSAGE]);
}

#[test]
fn test_edit_with_empty_description_is_rejected() {
    let mut app = board(&["Task01"]);
    press(&mut app, KeyCode::Enter);
    clear_field(&mut app);
    press(&mut app, KeyCode::Enter);

    let dialog = app.dialog().expect("dialog stays open");
    assert_eq!(
        dialog.errors().get(TaskField::Description),
        Some(DESCRIPTION_REQUIRED)
    );
    assert_eq!(dialog.errors().len(), 1);
    assert_eq!(app.store().list()[0].description(), "Description01");
}

#[test]
fn test_toggle_then_delete() {
    let mut app = board(&["Task01"]);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.store().list()[0].is_completed());
    press(&mut app, KeyCode::Char('e'));
    assert!(app.dialog().is_none());

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.store().list()[0].is_completed());

    press(&mut app, KeyCode::Char('d'));
    assert!(app.store().is_empty());
    assert_eq!(app.selected_index(), None);
    assert!(snack_messages(&app).contains(&TASK_DELETED_MESSAGE.to_string()));
}

#[test]
fn test_snackbar_hides_after_configured_interval() {
    let store = TaskStore::new();
    let config = NotificationConfig {
        auto_hide_secs: 1,
        max_visible: 5,
    };
    let mut app = AppState::new(store, &config);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Quick");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Short lived");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.snackbar().len(), 1);

    app.tick(Instant::now() + Duration::from_secs(2));
    assert!(app.snackbar().is_empty());
}

#[test]
fn test_quit_keys() {
    let mut app = board(&[]);
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(handle_key_event(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    ));
}

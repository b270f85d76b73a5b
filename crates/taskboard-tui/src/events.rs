/*
[INPUT]:  Key events from the terminal
[OUTPUT]: AppState actions (board hotkeys or dialog input) and quit requests
[POS]:    TUI event routing
[UPDATE]: When hotkeys or dialog submission flow change
*/

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;
use crate::form::DialogAction;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    let now = Instant::now();
    let quit = if app.dialog().is_some() {
        handle_dialog_key_event(app, key);
        false
    } else {
        handle_board_key_event(app, key, now)
    };
    app.drain_store_events(now);
    quit
}

fn handle_board_key_event(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.move_selection(isize::MIN / 2),
        KeyCode::End | KeyCode::Char('G') => app.move_selection(isize::MAX / 2),
        KeyCode::Char('a') => app.open_add_dialog(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_dialog(now),
        KeyCode::Char(' ') | KeyCode::Char('c') => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        _ => {}
    }
    false
}

fn handle_dialog_key_event(app: &mut AppState, key: KeyEvent) {
    let Some(dialog) = app.dialog_mut() else {
        return;
    };
    match dialog.handle_key(key) {
        DialogAction::Submit => app.submit_dialog(),
        DialogAction::Cancel => app.close_dialog(),
        DialogAction::None => {}
    }
}

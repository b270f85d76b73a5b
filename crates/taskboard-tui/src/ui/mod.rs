/*
[INPUT]:  AppState (store snapshot, selection, dialog, snackbar, status)
[OUTPUT]: Full-frame board rendering
[POS]:    TUI UI module root
[UPDATE]: When adding panels or changing the board layout
*/

mod dialog;
mod snackbar;
mod table;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;

pub(crate) use dialog::draw_task_dialog;
pub(crate) use snackbar::draw_snackbar;
pub(crate) use table::draw_task_table;

pub fn draw(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    draw_task_table(frame, layout[0], app);
    draw_footer(frame, layout[1], app);
    draw_snackbar(frame, layout[0], &app.snackbar);

    if let Some(dialog) = &app.dialog {
        draw_task_dialog(frame, area, dialog);
    }
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let hints = if app.dialog.is_some() {
        "[Tab] Next field  [Left/Right] Priority  [Enter] Save  [Esc] Cancel"
    } else {
        "[a] Add  [e] Edit  [Space] Toggle  [d] Delete  [Up/Down] Select  [q] Quit"
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::Cyan)),
        Span::raw("  |  Status: "),
        Span::raw(app.status_message.as_str()),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Hotkeys"));
    frame.render_widget(footer, area);
}

/// Create a centered rect for popups
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

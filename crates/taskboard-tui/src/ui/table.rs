/*
[INPUT]:  Tasks in insertion order and the current row selection
[OUTPUT]: Task table widget
[POS]:    TUI UI task table panel
[UPDATE]: When task columns change
*/

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use taskboard_core::{Priority, Task};

use crate::app::AppState;

pub(crate) fn draw_task_table(frame: &mut ratatui::Frame, area: Rect, app: &mut AppState) {
    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Description"),
        Cell::from("Deadline"),
        Cell::from("Priority"),
        Cell::from("Completed"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app.store.list().iter().map(task_row).collect();
    let title = format!("Tasks ({})", rows.len());

    let table = Table::new(rows, [
        Constraint::Percentage(22),
        Constraint::Percentage(38),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(11),
    ])
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");
    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn task_row(task: &Task) -> Row<'static> {
    let style = if task.is_completed() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    Row::new(vec![
        Cell::from(task.title().to_string()),
        Cell::from(task.description().to_string()),
        Cell::from(task.due_date().to_string()),
        Cell::from(task.priority().as_str()).style(priority_style(task.priority())),
        Cell::from(if task.is_completed() { "[x]" } else { "[ ]" }),
    ])
    .style(style)
}

fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::Low => Style::default().fg(Color::Gray),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::High => Style::default().fg(Color::Red),
    }
}

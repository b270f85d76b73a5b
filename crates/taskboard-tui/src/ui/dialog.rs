/*
[INPUT]:  TaskDialog field values, focus, and inline errors
[OUTPUT]: Add/edit dialog popup rendering
[POS]:    TUI UI task dialog
[UPDATE]: When dialog fields or error presentation change
*/

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use taskboard_core::{Priority, TaskField};

use super::centered_rect;
use crate::form::{DialogMode, TaskDialog};

const LABEL_WIDTH: usize = 13;

pub(crate) fn draw_task_dialog(frame: &mut ratatui::Frame, area: Rect, dialog: &TaskDialog) {
    let popup_area = centered_rect(70, 60, area);
    frame.render_widget(Clear, popup_area);

    let title = match dialog.mode() {
        DialogMode::Add => format!(" {} ", dialog.heading()),
        DialogMode::Edit(_) => format!(" {}: {} ", dialog.heading(), dialog.title()),
    };
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let mut content = vec![Line::from("")];
    for field in dialog.fields() {
        let focused = dialog.focus() == *field;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![Span::styled(
            format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
            label_style,
        )];
        match field {
            TaskField::Title => spans.push(Span::raw(dialog.title().to_string())),
            TaskField::Description => spans.push(Span::raw(dialog.description().to_string())),
            TaskField::DueDate => spans.push(Span::raw(dialog.deadline_text().to_string())),
            TaskField::Priority => spans.extend(priority_spans(dialog.priority())),
        }
        if focused && *field != TaskField::Priority {
            spans.push(Span::styled(" █", Style::default().fg(Color::Yellow)));
        }
        content.push(Line::from(spans));

        if let Some(message) = dialog.errors().get(*field) {
            content.push(Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH)),
                Span::styled(message.to_string(), Style::default().fg(Color::Red)),
            ]));
        }
        content.push(Line::from(""));
    }

    let action = match dialog.mode() {
        DialogMode::Add => "add  ",
        DialogMode::Edit(_) => "save  ",
    };
    content.push(Line::from(vec![
        Span::styled("Tab/↑↓ ", Style::default().fg(Color::Cyan)),
        Span::styled("switch fields  ", Style::default().fg(Color::Gray)),
        Span::styled("Enter ", Style::default().fg(Color::Cyan)),
        Span::styled(action, Style::default().fg(Color::Gray)),
        Span::styled("Esc ", Style::default().fg(Color::Cyan)),
        Span::styled("cancel", Style::default().fg(Color::Gray)),
    ]));

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}

fn priority_spans(selected: Option<Priority>) -> Vec<Span<'static>> {
    Priority::ALL
        .iter()
        .map(|level| {
            if Some(*level) == selected {
                Span::styled(
                    format!("(•) {level}  "),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(format!("( ) {level}  "))
            }
        })
        .collect()
}

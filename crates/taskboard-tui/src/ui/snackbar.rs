/*
[INPUT]:  Snackbar entries
[OUTPUT]: Stacked notification boxes anchored bottom-right
[POS]:    TUI UI snackbar overlay
[UPDATE]: When notification styling or placement changes
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use taskboard_core::Severity;
use unicode_width::UnicodeWidthStr;

use crate::snackbar::Snackbar;

const ENTRY_HEIGHT: u16 = 3;

pub(crate) fn draw_snackbar(frame: &mut ratatui::Frame, area: Rect, snackbar: &Snackbar) {
    if snackbar.is_empty() {
        return;
    }

    let widest = snackbar
        .entries()
        .map(|entry| entry.notification.message.width())
        .max()
        .unwrap_or(0) as u16;
    let width = (widest + 4).min(area.width);
    let x = area.right().saturating_sub(width);

    // Newest entry sits at the bottom of the stack.
    let mut bottom = area.bottom();
    for entry in snackbar.entries().collect::<Vec<_>>().into_iter().rev() {
        if bottom < area.y + ENTRY_HEIGHT {
            break;
        }
        let rect = Rect::new(x, bottom - ENTRY_HEIGHT, width, ENTRY_HEIGHT);
        let color = match entry.notification.severity {
            Severity::Success => Color::Green,
            Severity::Warning => Color::Yellow,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(entry.notification.message.as_str())
                .style(Style::default().fg(color))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                ),
            rect,
        );
        bottom -= ENTRY_HEIGHT;
    }
}

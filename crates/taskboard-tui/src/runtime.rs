/*
[INPUT]:  Seeded TaskStore, board configuration, terminal input
[OUTPUT]: Interactive board session until the user quits
[POS]:    TUI event loop
[UPDATE]: When changing tick cadence, input polling, or loop shutdown
*/

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use taskboard_core::TaskStore;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::app::AppState;
use crate::config::BoardConfig;
use crate::events::handle_key_event;
use crate::terminal::TerminalGuard;
use crate::ui;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

pub async fn run_tui(store: TaskStore, config: &BoardConfig) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut app = AppState::new(store, &config.notifications);
    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;
    info!(task_count = app.store().len(), "board started");

    while !should_quit {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            _ = tick.tick() => app.tick(Instant::now()),
            maybe_event = event_rx.recv() => match maybe_event {
                Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    should_quit = handle_key_event(&mut app, key);
                }
                Some(_) => {}
                None => should_quit = true,
            },
        }
    }

    input_shutdown.cancel();
    info!(task_count = app.store().len(), "board closed");
    Ok(())
}

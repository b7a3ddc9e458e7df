//! Terminal front-end for a [`GameSession`].
//!
//! Renders snapshots and turns key presses into session commands. All game
//! logic stays in the session.

mod input;
mod ui;

pub use input::{Intent, intent, move_cursor};

use crate::games::tictactoe::Position;
use crate::session::{GameEvent, GameSession};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub async fn run_tui(
    session: GameSession,
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    info!("Starting Grid Clash TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &session, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

async fn run_game(
    terminal: &mut Term,
    session: &GameSession,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    let mut cursor = Position::Center;
    let mut snapshot = session.snapshot();

    loop {
        while let Ok(event) = event_rx.try_recv() {
            if let GameEvent::CpuMoved { action, .. } = &event {
                debug!(%action, "Rendering CPU move");
            }
            snapshot = event.snapshot().clone();
        }

        terminal.draw(|f| ui::draw(f, &snapshot, cursor))?;

        // Poll with a short timeout so CPU moves show up promptly.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match intent(key.code, cursor) {
                Some(Intent::Quit) => {
                    info!("User quit");
                    return Ok(());
                }
                Some(Intent::Select(pos)) => {
                    cursor = pos;
                    session.select_cell(pos.to_index());
                }
                Some(Intent::MoveCursor(pos)) => cursor = pos,
                Some(Intent::NextRound) => session.next_round(),
                Some(Intent::ResetScores) => session.reset_scores(),
                Some(Intent::ToggleMode) => session.toggle_mode(),
                Some(Intent::SetMode(mode)) => session.set_mode(mode),
                None => {}
            }
        }

        tokio::task::yield_now().await;
    }
}

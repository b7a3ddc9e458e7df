//! Game session: one game, one delayed CPU turn, change notifications.
//!
//! The presentation layer drives a [`GameSession`] with commands and
//! re-renders whenever a [`GameEvent`] arrives. Requests the rules do not
//! allow are ignored without error.

use crate::config::GameConfig;
use crate::games::tictactoe::{Game, GameSnapshot, Mode, Move};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the session to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A command was handled (accepted or ignored).
    StateChanged(GameSnapshot),
    /// The delayed CPU turn placed a mark.
    CpuMoved {
        /// The move the CPU made.
        action: Move,
        /// State after the move.
        snapshot: GameSnapshot,
    },
}

impl GameEvent {
    /// State carried by this event.
    pub fn snapshot(&self) -> &GameSnapshot {
        match self {
            GameEvent::StateChanged(snapshot) => snapshot,
            GameEvent::CpuMoved { snapshot, .. } => snapshot,
        }
    }
}

#[derive(Debug)]
struct SessionState {
    game: Game,
    rng: ChaCha8Rng,
    /// Bumped whenever a pending CPU turn must not land.
    epoch: u64,
    pending_cpu: Option<JoinHandle<()>>,
}

impl SessionState {
    fn cancel_cpu_turn(&mut self) {
        self.epoch += 1;
        if let Some(handle) = self.pending_cpu.take() {
            debug!(epoch = self.epoch, "Cancelling pending CPU turn");
            handle.abort();
        }
    }
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A running game with its scores, owned by one front-end.
#[derive(Debug)]
pub struct GameSession {
    state: Arc<Mutex<SessionState>>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    cpu_delay: Duration,
    runtime: Handle,
}

impl GameSession {
    /// Creates a session and the receiver its events arrive on.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        info!(
            mode = %config.starting_mode(),
            cpu_delay_ms = config.cpu_delay_ms(),
            "Creating game session"
        );

        let session = Self {
            state: Arc::new(Mutex::new(SessionState {
                game: Game::with_mode(*config.starting_mode()),
                rng,
                epoch: 0,
                pending_cpu: None,
            })),
            event_tx,
            cpu_delay: config.cpu_delay(),
            runtime: Handle::current(),
        };
        (session, event_rx)
    }

    /// Returns the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        lock(&self.state).game.snapshot()
    }

    /// True while a CPU turn is scheduled and has not yet run.
    pub fn has_pending_cpu_turn(&self) -> bool {
        lock(&self.state)
            .pending_cpu
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Plays the cell at `index` for the human to move.
    ///
    /// Returns whether the move was accepted. In Solo mode an accepted move
    /// that hands the turn to the CPU schedules its reply.
    #[instrument(skip(self))]
    pub fn select_cell(&self, index: usize) -> bool {
        let mut state = lock(&self.state);
        let accepted = match state.game.apply_move(index) {
            Ok(action) => {
                debug!(%action, "Move accepted");
                if state.game.awaiting_cpu() {
                    self.schedule_cpu_turn(&mut state);
                }
                true
            }
            Err(e) => {
                debug!(reason = %e, "Move ignored");
                false
            }
        };
        self.notify(GameEvent::StateChanged(state.game.snapshot()));
        accepted
    }

    /// Clears the board for the next round, keeping scores.
    #[instrument(skip(self))]
    pub fn next_round(&self) {
        let mut state = lock(&self.state);
        state.cancel_cpu_turn();
        state.game.next_round();
        self.notify(GameEvent::StateChanged(state.game.snapshot()));
    }

    /// Clears the board and both scores.
    #[instrument(skip(self))]
    pub fn reset_scores(&self) {
        let mut state = lock(&self.state);
        state.cancel_cpu_turn();
        state.game.reset_scores();
        self.notify(GameEvent::StateChanged(state.game.snapshot()));
    }

    /// Switches mode. Ignored if `mode` is already active.
    #[instrument(skip(self))]
    pub fn set_mode(&self, mode: Mode) {
        self.switch_mode(|_| mode);
    }

    /// Switches to the other mode.
    #[instrument(skip(self))]
    pub fn toggle_mode(&self) {
        self.switch_mode(Mode::toggle);
    }

    /// Reads the current mode and applies the target under the same lock.
    fn switch_mode(&self, target: impl FnOnce(Mode) -> Mode) {
        let mut state = lock(&self.state);
        let mode = target(state.game.mode());
        if state.game.set_mode(mode) {
            state.cancel_cpu_turn();
        } else {
            debug!(%mode, "Mode unchanged, ignoring");
        }
        self.notify(GameEvent::StateChanged(state.game.snapshot()));
    }

    /// Replaces any pending CPU turn with a fresh one for the current round.
    fn schedule_cpu_turn(&self, state: &mut SessionState) {
        state.cancel_cpu_turn();
        let epoch = state.epoch;
        let weak = Arc::downgrade(&self.state);
        let event_tx = self.event_tx.clone();
        let delay = self.cpu_delay;

        debug!(epoch, delay_ms = delay.as_millis() as u64, "Scheduling CPU turn");
        state.pending_cpu = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            run_cpu_turn(&weak, &event_tx, epoch);
        }));
    }

    /// Callers hold the state lock so events keep the order of the changes.
    fn notify(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            warn!("Event receiver dropped, state change not delivered");
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        debug!("Tearing down game session");
        lock(&self.state).cancel_cpu_turn();
    }
}

/// Body of the delayed CPU turn. Lands only if `epoch` is still current.
fn run_cpu_turn(
    state: &Weak<Mutex<SessionState>>,
    event_tx: &mpsc::UnboundedSender<GameEvent>,
    epoch: u64,
) {
    let Some(state) = state.upgrade() else {
        debug!("Session gone before CPU turn");
        return;
    };
    let mut guard = lock(&state);
    if guard.epoch != epoch {
        debug!(epoch, current = guard.epoch, "Stale CPU turn dropped");
        return;
    }
    guard.pending_cpu = None;

    let SessionState { game, rng, .. } = &mut *guard;
    let action = game.apply_cpu_move(rng);
    let snapshot = game.snapshot();

    let event = match action {
        Some(action) => {
            info!(%action, "CPU moved");
            GameEvent::CpuMoved { action, snapshot }
        }
        None => GameEvent::StateChanged(snapshot),
    };
    // Sent under the lock so events leave in the order the state changed.
    if event_tx.send(event).is_err() {
        warn!("Event receiver dropped, CPU move not delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    fn o_count(session: &GameSession) -> usize {
        lock(&session.state)
            .game
            .board()
            .squares()
            .iter()
            .filter(|square| square.mark() == Some(Mark::O))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_supersedes_pending_turn() {
        let config = GameConfig::default()
            .with_starting_mode(Mode::Solo)
            .with_seed(11);
        let (session, mut rx) = GameSession::new(&config);

        assert!(session.select_cell(0));
        let first_epoch = lock(&session.state).epoch;

        tokio::time::sleep(Duration::from_millis(300)).await;
        {
            let mut state = lock(&session.state);
            session.schedule_cpu_turn(&mut state);
            assert!(state.epoch > first_epoch);
        }

        // First timer was due at 500 ms, the replacement at 800 ms.
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(o_count(&session), 0);
        assert!(session.has_pending_cpu_turn());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(o_count(&session), 1);
        assert!(!session.has_pending_cpu_turn());

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GameEvent::StateChanged(_)));
        assert!(matches!(events[1], GameEvent::CpuMoved { .. }));
    }
}

//! State shared between the console front end and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use tankarena_core::commands::PlayerCommand;
use tankarena_core::enums::SessionState;
use tankarena_core::state::GameStateSnapshot;

/// Commands sent from the front end to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Handles held by the front end.
pub struct AppState {
    /// Channel sender to the game loop thread. `None` until it is spawned.
    pub command_tx: Option<mpsc::Sender<GameLoopCommand>>,
    pub latest_snapshot: SharedSnapshot,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: None,
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the latest snapshot, if the loop has produced one.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }

    /// Session state of the latest snapshot. Playing before the first tick.
    pub fn session_state(&self) -> SessionState {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.as_ref().map(|snapshot| snapshot.state))
            .unwrap_or_default()
    }

    /// Forward a command. Returns false once the loop has gone away.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        self.command_tx
            .as_ref()
            .is_some_and(|tx| tx.send(command).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.is_none());
        assert!(state.snapshot().is_none());
        assert_eq!(state.session_state(), SessionState::Playing);
        assert!(!state.send(GameLoopCommand::Shutdown), "No loop to send to");
    }

    #[test]
    fn test_session_state_follows_snapshot() {
        let state = AppState::new();
        *state.latest_snapshot.lock().unwrap() = Some(GameStateSnapshot {
            state: SessionState::GameOver,
            ..Default::default()
        });
        assert_eq!(state.session_state(), SessionState::GameOver);
    }
}

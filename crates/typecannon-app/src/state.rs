//! Host-side handles to the game loop thread, and the messages it accepts.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use typecannon_core::commands::PlayerCommand;
use typecannon_core::state::GameStateSnapshot;

/// Messages accepted by the loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forwarded to the engine's input channel. `StartRound` and `Restart`
    /// also wake a stopped loop.
    Player(PlayerCommand),
    /// Exit the thread without running another frame.
    Shutdown,
}

/// Handles to a running loop thread, held by the host between calls.
///
/// Every field sits behind a lock so a host can share one `AppState`
/// between threads. All three stay empty until `control::start_simulation`.
pub struct AppState {
    /// Where `control::send_command` posts input.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Written by the loop's renderer every frame, read by `control::get_snapshot`.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Joined by `control::stop_simulation`.
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(state.loop_thread.lock().unwrap().is_none());
    }

    #[test]
    fn test_renderer_publishes_into_state() {
        use crate::render::{Renderer, SharedSnapshot};

        let state = AppState::new();
        let mut renderer = SharedSnapshot::new(state.latest_snapshot.clone());
        let snapshot = GameStateSnapshot {
            level: 2,
            ..Default::default()
        };
        renderer.render(&snapshot).unwrap();

        let published = state.latest_snapshot.lock().unwrap().clone();
        assert_eq!(published.map(|s| s.level), Some(2));
    }

    #[test]
    fn test_command_channel_order() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartRound))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::KeyPress { key: 'Q' }))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartRound)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::KeyPress { key: 'Q' })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }
}

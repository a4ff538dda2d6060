//! Host-facing control surface.
//!
//! Bridges host requests (start, input, polling, shutdown) to the game loop
//! thread via channels and the shared `AppState`.

use typecannon_core::commands::PlayerCommand;
use typecannon_core::state::GameStateSnapshot;
use typecannon_sim::SimConfig;

use crate::game_loop::{self, LoopError};
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), LoopError> {
    let mut tx_lock = state
        .command_tx
        .lock()
        .map_err(|_| LoopError::StatePoisoned)?;
    if tx_lock.is_some() {
        return Err(LoopError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    *tx_lock = Some(cmd_tx);
    *state
        .loop_thread
        .lock()
        .map_err(|_| LoopError::StatePoisoned)? = Some(handle);
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), LoopError> {
    let tx_lock = state
        .command_tx
        .lock()
        .map_err(|_| LoopError::StatePoisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| LoopError::InputClosed),
        None => Err(LoopError::NotStarted),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, LoopError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| LoopError::StatePoisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop thread and wait for it to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), LoopError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| LoopError::StatePoisoned)?
        .take()
        .ok_or(LoopError::NotStarted)?;
    // The thread may already have exited on its own.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state
        .loop_thread
        .lock()
        .map_err(|_| LoopError::StatePoisoned)?
        .take();
    if let Some(handle) = handle {
        handle.join().map_err(|_| LoopError::ThreadPanicked)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use typecannon_core::enums::RoundPhase;

    #[test]
    fn test_commands_before_start_fail() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::StartRound),
            Err(LoopError::NotStarted)
        ));
        assert!(matches!(stop_simulation(&state), Err(LoopError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_play_and_stop() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default()).unwrap();
        assert!(matches!(
            start_simulation(&state, SimConfig::default()),
            Err(LoopError::AlreadyRunning)
        ));

        send_command(&state, PlayerCommand::StartRound).unwrap();
        std::thread::sleep(Duration::from_millis(150));

        let snapshot = get_snapshot(&state).unwrap().expect("snapshot published");
        assert_eq!(snapshot.phase, RoundPhase::Running);
        assert!(!snapshot.items.is_empty());

        stop_simulation(&state).unwrap();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(matches!(
            send_command(&state, PlayerCommand::Restart),
            Err(LoopError::NotStarted)
        ));

        // A fresh loop can be started after stopping.
        start_simulation(&state, SimConfig::default()).unwrap();
        stop_simulation(&state).unwrap();
    }
}

//! Game loop: steps the engine once per host frame and presents the result.
//!
//! `GameLoop` is host-agnostic; anything that produces frame timestamps can
//! drive it. `spawn_game_loop` runs one on a background thread at 60Hz,
//! taking commands over an `mpsc` channel and publishing snapshots for
//! synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};

use typecannon_core::commands::PlayerCommand;
use typecannon_core::enums::{LayoutMode, RoundPhase};
use typecannon_core::state::GameStateSnapshot;
use typecannon_sim::{SimConfig, SimulationEngine};

use crate::clock::FrameClock;
use crate::render::{EventSink, RenderError, Renderer, SharedSnapshot, TracingSink};
use crate::state::GameLoopCommand;

/// Frames per second of the background loop.
pub const FRAME_RATE: u32 = 60;

/// Nominal duration of one background frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("game loop already running")]
    AlreadyRunning,
    #[error("game loop not started")]
    NotStarted,
    #[error("game loop input channel closed")]
    InputClosed,
    #[error("render context unavailable")]
    RenderContextUnavailable,
    #[error("shared state lock poisoned")]
    StatePoisoned,
    #[error("game loop thread panicked")]
    ThreadPanicked,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Pushes player input into a `GameLoop` from any event source.
#[derive(Debug, Clone)]
pub struct InputHandle {
    tx: mpsc::Sender<PlayerCommand>,
}

impl InputHandle {
    pub fn send(&self, command: PlayerCommand) -> Result<(), LoopError> {
        self.tx.send(command).map_err(|_| LoopError::InputClosed)
    }

    /// Forward a key as typed by the host. Returns false when it is not a single letter.
    pub fn key(&self, key: &str) -> Result<bool, LoopError> {
        match PlayerCommand::key_press(key) {
            Some(command) => self.send(command).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn resize(&self, width: f32, height: f32, layout: LayoutMode) -> Result<(), LoopError> {
        self.send(PlayerCommand::Resize {
            width,
            height,
            layout,
        })
    }
}

/// Couples an engine to a renderer and an event sink.
pub struct GameLoop<R: Renderer, S: EventSink> {
    engine: SimulationEngine,
    renderer: R,
    sink: S,
    clock: FrameClock,
    input_tx: mpsc::Sender<PlayerCommand>,
    input_rx: mpsc::Receiver<PlayerCommand>,
    running: bool,
}

impl<R: Renderer, S: EventSink> GameLoop<R, S> {
    pub fn new(config: SimConfig, renderer: R, sink: S) -> Self {
        let (input_tx, input_rx) = mpsc::channel();
        Self {
            engine: SimulationEngine::new(config),
            renderer,
            sink,
            clock: FrameClock::new(),
            input_tx,
            input_rx,
            running: false,
        }
    }

    pub fn input_handle(&self) -> InputHandle {
        InputHandle {
            tx: self.input_tx.clone(),
        }
    }

    /// Begin stepping on `frame` calls. Never schedules twice.
    pub fn start(&mut self) -> Result<(), LoopError> {
        if self.running {
            return Err(LoopError::AlreadyRunning);
        }
        self.running = true;
        self.clock.reset();
        debug!("game loop started");
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!("game loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One host frame: apply queued input, advance the engine, render, and
    /// deliver events. Does nothing while stopped. The loop stops itself once
    /// the round is over, after presenting that frame.
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), LoopError> {
        if !self.running {
            return Ok(());
        }

        self.drain_input();
        let dt_ms = self.clock.delta(timestamp_ms);
        let snapshot = self.engine.tick(dt_ms);
        self.present(&snapshot)?;

        if snapshot.phase == RoundPhase::Over {
            self.stop();
        }
        Ok(())
    }

    /// While stopped, apply queued resizes and re-render without stepping
    /// the engine, so the start and game-over screens follow the viewport.
    /// Other input waits for the next running frame.
    pub fn idle(&mut self) -> Result<(), LoopError> {
        if self.running || !self.drain_input() {
            return Ok(());
        }
        let snapshot = self.engine.apply_resizes();
        self.present(&snapshot)
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Move pending input into the engine's queue. Returns true if any arrived.
    fn drain_input(&mut self) -> bool {
        let mut any = false;
        while let Ok(command) = self.input_rx.try_recv() {
            self.engine.queue_command(command);
            any = true;
        }
        any
    }

    fn present(&mut self, snapshot: &GameStateSnapshot) -> Result<(), LoopError> {
        match self.renderer.render(snapshot) {
            Ok(()) => {}
            Err(RenderError::ContextUnavailable) => {
                warn!("render context lost, stopping");
                self.stop();
                return Err(LoopError::RenderContextUnavailable);
            }
            Err(err) => warn!(%err, tick = snapshot.time.tick, "render failed"),
        }

        for event in &snapshot.audio_events {
            self.sink.audio(*event);
        }
        for event in &snapshot.ui_events {
            self.sink.ui(*event);
        }
        Ok(())
    }
}

/// Spawns a game loop on a new thread.
///
/// Returns the command sender and the thread's join handle. The thread exits
/// on `Shutdown`, when every sender is dropped, or when rendering fails fatally.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), LoopError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("typecannon-game-loop".into())
        .spawn(move || {
            let renderer = SharedSnapshot::new(latest_snapshot);
            run_game_loop(cmd_rx, GameLoop::new(config, renderer, TracingSink));
        })?;

    Ok((cmd_tx, handle))
}

/// The background loop. Runs until Shutdown, channel disconnect, or a lost render context.
fn run_game_loop<R: Renderer, S: EventSink>(
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut game_loop: GameLoop<R, S>,
) {
    let input = game_loop.input_handle();
    let epoch = Instant::now();
    let mut next_frame_time = epoch;
    info!(fps = FRAME_RATE, "game loop thread started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(command)) => {
                    let begins_round = matches!(
                        command,
                        PlayerCommand::StartRound | PlayerCommand::Restart
                    );
                    if input.send(command).is_err() {
                        return;
                    }
                    if begins_round && !game_loop.is_running() {
                        let _ = game_loop.start();
                    }
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Step or idle
        let result = if game_loop.is_running() {
            game_loop.frame(epoch.elapsed().as_secs_f64() * 1000.0)
        } else {
            game_loop.idle()
        };
        if let Err(err) = result {
            warn!(%err, "game loop exiting");
            return;
        }

        // 3. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, skip ahead instead of catching up
            next_frame_time = now;
        }
    }
}

//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no host dependency), enabling deterministic testing with fixed time steps.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use typecannon_core::commands::PlayerCommand;
use typecannon_core::components::Cannon;
use typecannon_core::constants::*;
use typecannon_core::enums::{LayoutMode, RoundPhase};
use typecannon_core::events::{AudioEvent, UiEvent};
use typecannon_core::state::GameStateSnapshot;
use typecannon_core::types::{SimTime, Viewport};

use crate::cannon;
use crate::config::SimConfig;
use crate::lifecycle::{self, RoundAction};
use crate::round::RoundState;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::targeting::{InputContext, KeyOutcome};

/// The simulation engine. Owns the ECS world and all round state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: RoundPhase,
    rng: ChaCha8Rng,
    config: SimConfig,
    round: RoundState,
    cannon: Cannon,
    viewport: Viewport,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    ui_events: Vec<UiEvent>,
    final_score: Option<u32>,
}

impl SimulationEngine {
    /// Create a new engine with the given config, laid out for the default viewport.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: RoundPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.normalized(),
            round: RoundState::default(),
            cannon: Cannon::default(),
            viewport: Viewport::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            ui_events: Vec::new(),
            final_score: None,
        };
        engine.resize(
            Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            LayoutMode::Desktop,
        );
        engine
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt_ms` milliseconds and return
    /// the resulting snapshot. Outside `Running` only queued commands are
    /// processed; nothing spawns or moves.
    pub fn tick(&mut self, dt_ms: f32) -> GameStateSnapshot {
        self.process_commands();

        if lifecycle::is_live(self.phase) {
            let dt_ms = clamp_dt(dt_ms);
            self.run_systems(dt_ms);
            self.time.advance(dt_ms);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        let ui_events = std::mem::take(&mut self.ui_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.snapshot_context(),
            audio_events,
            ui_events,
        )
    }

    /// Current state without advancing time or draining events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.snapshot_context(),
            Vec::new(),
            Vec::new(),
        )
    }

    /// Apply queued `Resize` commands and return the current state. Nothing
    /// moves or spawns; other commands stay queued, in order, for the next tick.
    pub fn apply_resizes(&mut self) -> GameStateSnapshot {
        let mut deferred = VecDeque::with_capacity(self.command_queue.len());
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::Resize {
                    width,
                    height,
                    layout,
                } => self.resize(Viewport::new(width, height), layout),
                other => deferred.push_back(other),
            }
        }
        self.command_queue = deferred;
        self.snapshot()
    }

    /// Resolve a typed character immediately (between ticks).
    /// Ignored unless the round is running.
    pub fn press_key(&mut self, key: char) -> KeyOutcome {
        if !lifecycle::is_live(self.phase) || !key.is_ascii_alphabetic() {
            return KeyOutcome::Ignored;
        }

        systems::targeting::resolve_key(
            InputContext {
                world: &mut self.world,
                rng: &mut self.rng,
                cannon: &mut self.cannon,
                round: &mut self.round,
                audio_events: &mut self.audio_events,
                ui_events: &mut self.ui_events,
            },
            key.to_ascii_uppercase(),
        )
    }

    /// Get the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Get the current round time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the round's score, level and pacing.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn cannon(&self) -> &Cannon {
        &self.cannon
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Score at the moment the round ended, if it has.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Spawn an item at an explicit position (for tests needing a fixed layout).
    #[cfg(test)]
    pub fn spawn_test_item(
        &mut self,
        text: &str,
        category: typecannon_core::enums::ItemCategory,
        x: f32,
        y: f32,
    ) -> hecs::Entity {
        let seq = self.round.next_spawn_seq;
        self.round.next_spawn_seq += 1;
        let entity = crate::world_setup::spawn_item(
            &mut self.world,
            text.to_string(),
            category,
            x,
            1.0,
            seq,
        );
        if let Ok(mut pos) = self
            .world
            .get::<&mut typecannon_core::types::Position>(entity)
        {
            pos.y = y;
        }
        entity
    }

    /// Start a round whose first spawn is a full interval away, so tests
    /// control every item on screen.
    #[cfg(test)]
    pub fn start_quiet_round(&mut self) {
        self.begin_round();
        self.round.last_spawn_ms = Some(0.0);
    }

    /// Mutable round state (for tests that need a specific score or interval).
    #[cfg(test)]
    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRound => {
                if lifecycle::next_phase(self.phase, RoundAction::Start).is_some() {
                    self.begin_round();
                }
            }
            PlayerCommand::Restart => {
                if lifecycle::next_phase(self.phase, RoundAction::Restart).is_some() {
                    self.begin_round();
                }
            }
            PlayerCommand::KeyPress { key } => {
                self.press_key(key);
            }
            PlayerCommand::Resize {
                width,
                height,
                layout,
            } => {
                self.resize(Viewport::new(width, height), layout);
            }
        }
    }

    /// Reset all round state and enter `Running`.
    fn begin_round(&mut self) {
        self.world.clear();
        self.round.reset();
        self.time = SimTime::default();
        self.cannon.angle = 0.0;
        self.final_score = None;
        self.phase = RoundPhase::Running;
        self.ui_events.push(UiEvent::ScoreChanged { score: 0 });
        self.ui_events.push(UiEvent::LevelChanged {
            level: self.round.level,
        });
        info!(
            width = self.viewport.width,
            height = self.viewport.height,
            "round started"
        );
    }

    /// End the round on the first breach; later calls are no-ops.
    fn end_round(&mut self) {
        let Some(next) = lifecycle::next_phase(self.phase, RoundAction::Breach) else {
            return;
        };
        self.phase = next;
        self.final_score = Some(self.round.score);
        self.audio_events.push(AudioEvent::GameOver);
        self.ui_events.push(UiEvent::RoundOver {
            final_score: self.round.score,
        });
        info!(score = self.round.score, level = self.round.level, "round over");
    }

    /// Recompute cannon pivot and danger line for a new viewport or layout.
    /// Non-finite or non-positive dimensions are ignored.
    fn resize(&mut self, viewport: Viewport, layout: LayoutMode) {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(viewport.width) || !usable(viewport.height) {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "ignoring unusable viewport"
            );
            return;
        }
        self.viewport = viewport;
        cannon::layout(&mut self.cannon, &viewport, layout);
        self.round.danger_line_y = cannon::danger_line_y(&self.cannon);
        debug!(
            width = viewport.width,
            height = viewport.height,
            danger_line_y = self.round.danger_line_y,
            "viewport resized"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_ms: f32) {
        // 1. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.round,
            &self.config,
            &self.viewport,
            self.time.elapsed_ms,
        );
        // 2. Falling items (may breach the round)
        let breached = systems::falling::run(
            &mut self.world,
            &self.round,
            &self.viewport,
            dt_ms,
            !lifecycle::is_live(self.phase),
        );
        if breached {
            self.end_round();
        }
        // 3. Projectiles
        systems::projectiles::run(&mut self.world, &self.viewport, dt_ms);
        // 4. Destruction effects
        systems::effects::run(&mut self.world, dt_ms);
        // 5. Cleanup (completed, breached, expired)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn snapshot_context(&self) -> SnapshotContext<'_> {
        SnapshotContext {
            time: &self.time,
            phase: self.phase,
            round: &self.round,
            cannon: &self.cannon,
            viewport: &self.viewport,
            final_score: self.final_score,
        }
    }
}

/// Clamp a host frame duration into `[0, MAX_FRAME_MS]`; non-finite
/// values become one reference frame.
fn clamp_dt(dt_ms: f32) -> f32 {
    if !dt_ms.is_finite() {
        return REFERENCE_FRAME_MS;
    }
    dt_ms.clamp(0.0, MAX_FRAME_MS)
}

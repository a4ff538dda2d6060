//! Global round state owned by the engine: score, level, difficulty and spawn pacing.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use typecannon_core::constants::*;

#[derive(Debug, Clone)]
pub struct RoundState {
    /// Non-decreasing within a round.
    pub score: u32,
    /// 1, then 2 once the win score is reached.
    pub level: u32,
    /// Global fall speed multiplier derived from score.
    pub difficulty: f32,
    pub spawn_interval_ms: f32,
    /// Round time of the last spawn; `None` until the first one.
    pub last_spawn_ms: Option<f64>,
    /// Sequence number handed to the next spawned item.
    pub next_spawn_seq: u64,
    /// Items at or below this y end the round.
    pub danger_line_y: f32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            difficulty: BASE_SPEED,
            spawn_interval_ms: INITIAL_SPAWN_INTERVAL_MS,
            last_spawn_ms: None,
            next_spawn_seq: 0,
            danger_line_y: 0.0,
        }
    }
}

impl RoundState {
    /// Back to initial values, keeping the danger line.
    pub fn reset(&mut self) {
        *self = Self {
            danger_line_y: self.danger_line_y,
            ..Self::default()
        };
    }

    /// Whether a spawn is due at round time `now_ms`.
    pub fn spawn_due(&self, now_ms: f64) -> bool {
        match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms - last >= self.spawn_interval_ms as f64,
        }
    }
}

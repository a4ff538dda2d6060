//! Difficulty and level progression derived from score.

use tracing::info;

use typecannon_core::constants::*;
use typecannon_core::events::UiEvent;

use crate::round::RoundState;

/// Recompute the difficulty multiplier and apply the one-way level 1 → 2
/// transition. Returns true if the level changed on this call.
pub fn run(round: &mut RoundState, ui_events: &mut Vec<UiEvent>) -> bool {
    round.difficulty = difficulty_for(round.score);

    if round.level == 1 && round.score >= WIN_SCORE {
        round.level = 2;
        round.spawn_interval_ms =
            (round.spawn_interval_ms * LEVEL_TWO_SPAWN_FACTOR).max(MIN_SPAWN_INTERVAL_MS);
        ui_events.push(UiEvent::LevelChanged { level: round.level });
        info!(
            score = round.score,
            spawn_interval_ms = round.spawn_interval_ms,
            "level 2 reached"
        );
        return true;
    }

    false
}

/// Multiplier for `score`: base plus one increment per full milestone.
pub fn difficulty_for(score: u32) -> f32 {
    BASE_SPEED + (score / SCORE_MILESTONE) as f32 * SPEED_INCREMENT
}

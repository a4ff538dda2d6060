//! Falling item update: integrates descent and detects breaches.

use hecs::World;

use typecannon_core::components::FallingItem;
use typecannon_core::constants::REFERENCE_FRAME_MS;
use typecannon_core::types::{Position, Viewport};

use crate::round::RoundState;

/// Advance every live item by `dt_ms` and apply the two terminal checks.
///
/// An item at or past the danger line dies and breaches the round, unless
/// the round is already over. An item past the bottom of the view dies
/// regardless, and breaches if nothing else has. A danger line at or above
/// the top of the view counts as unset and is skipped.
///
/// Returns true if at least one breach occurred. The caller applies the
/// round-over transition, which is idempotent.
pub fn run(
    world: &mut World,
    round: &RoundState,
    viewport: &Viewport,
    dt_ms: f32,
    already_over: bool,
) -> bool {
    let step = round.difficulty * (dt_ms / REFERENCE_FRAME_MS);
    let danger_line_set = round.danger_line_y > 0.0;
    let mut over = already_over;
    let mut breached = false;

    for (_entity, (item, pos)) in world.query_mut::<(&mut FallingItem, &mut Position)>() {
        if !item.alive {
            continue;
        }

        pos.y += item.fall_speed * step;

        if danger_line_set && !over && pos.y >= round.danger_line_y {
            item.alive = false;
            over = true;
            breached = true;
        } else if pos.y > viewport.height {
            item.alive = false;
            if !over {
                over = true;
                breached = true;
            }
        }
    }

    breached
}

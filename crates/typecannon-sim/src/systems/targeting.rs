//! Target selection and keystroke resolution.
//!
//! A typed letter hits at most one item. An item already in progress
//! (the active target) takes priority; otherwise the letter starts a new
//! item whose first character matches. Among candidates, the item lowest
//! on screen wins, then the earliest spawned.

use std::cmp::Ordering;

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use typecannon_core::components::{Cannon, FallingItem};
use typecannon_core::constants::{CHAR_WIDTH, POINTS_PER_CHAR};
use typecannon_core::events::{AudioEvent, UiEvent};
use typecannon_core::types::Position;

use crate::cannon;
use crate::round::RoundState;
use crate::systems::progression;
use crate::world_setup;

/// Result of resolving one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not an upper-case A–Z letter, or the round is not running.
    Ignored,
    /// Valid letter that matched nothing. No state changed.
    Miss,
    /// A character was matched; `completed` when it was the item's last.
    Hit { completed: bool },
}

/// Mutable engine state a keystroke may touch.
pub struct InputContext<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut ChaCha8Rng,
    pub cannon: &'a mut Cannon,
    pub round: &'a mut RoundState,
    pub audio_events: &'a mut Vec<AudioEvent>,
    pub ui_events: &'a mut Vec<UiEvent>,
}

/// Screen position where the character at index `matched` is drawn.
pub fn next_char_anchor(item: &FallingItem, pos: &Position) -> Position {
    let text_width = item.text.chars().count() as f32 * CHAR_WIDTH;
    Position::new(
        pos.x - text_width / 2.0 + (item.matched as f32 + 0.5) * CHAR_WIDTH,
        pos.y,
    )
}

/// Resolve one typed character.
pub fn resolve_key(ctx: InputContext<'_>, key: char) -> KeyOutcome {
    if !key.is_ascii_uppercase() {
        return KeyOutcome::Ignored;
    }

    let Some(target) = select_target(ctx.world, key) else {
        trace!(%key, "miss");
        return KeyOutcome::Miss;
    };

    // Advance the item while it is borrowed; spawn projectile/effect afterwards.
    let (anchor, completed, length) = {
        let Ok((item, pos)) = ctx
            .world
            .query_one_mut::<(&mut FallingItem, &Position)>(target)
        else {
            return KeyOutcome::Miss;
        };
        let anchor = next_char_anchor(item, pos);
        item.matched += 1;
        let length = item.text.chars().count();
        let completed = item.matched >= length;
        if completed {
            item.alive = false;
        }
        (anchor, completed, length)
    };

    cannon::aim_at(ctx.cannon, &anchor);
    let nozzle = cannon::nozzle_position(ctx.cannon);
    world_setup::spawn_projectile(ctx.world, nozzle, anchor);
    ctx.audio_events.push(AudioEvent::Shoot);

    if completed {
        ctx.round.score += length as u32 * POINTS_PER_CHAR;
        world_setup::spawn_effect(ctx.world, ctx.rng, anchor);
        ctx.audio_events.push(AudioEvent::Destroy);
        ctx.ui_events.push(UiEvent::ScoreChanged {
            score: ctx.round.score,
        });
        ctx.ui_events.push(UiEvent::ScreenShake);
        progression::run(ctx.round, ctx.ui_events);
    }

    trace!(%key, completed, "hit");
    KeyOutcome::Hit { completed }
}

/// Pick the entity that `key` hits, if any.
fn select_target(world: &World, key: char) -> Option<Entity> {
    let mut query = world.query::<(&FallingItem, &Position)>();
    let live: Vec<(Entity, &FallingItem, &Position)> = query
        .iter()
        .filter(|(_, (item, _))| item.alive)
        .map(|(entity, (item, pos))| (entity, item, pos))
        .collect();

    // 1. The active target: closest item with partial progress.
    let active = live
        .iter()
        .filter(|(_, item, _)| item.matched > 0)
        .max_by(|a, b| closer(a.1, a.2, b.1, b.2));
    if let Some((entity, item, _)) = active {
        if item.text.chars().nth(item.matched) == Some(key) {
            return Some(*entity);
        }
    }

    // 2. A fresh item starting with `key`.
    live.iter()
        .filter(|(_, item, _)| item.matched == 0 && item.text.starts_with(key))
        .max_by(|a, b| closer(a.1, a.2, b.1, b.2))
        .map(|(entity, _, _)| *entity)
}

/// Orders items so the one nearer the danger line compares greater; equal
/// heights fall back to the earlier spawn.
fn closer(a: &FallingItem, a_pos: &Position, b: &FallingItem, b_pos: &Position) -> Ordering {
    a_pos
        .y
        .total_cmp(&b_pos.y)
        .then_with(|| b.spawn_seq.cmp(&a.spawn_seq))
}

//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use typecannon_core::components::*;
use typecannon_core::enums::RoundPhase;
use typecannon_core::events::{AudioEvent, UiEvent};
use typecannon_core::state::*;
use typecannon_core::types::{Position, SimTime, Viewport};

use crate::cannon;
use crate::round::RoundState;
use crate::systems::targeting::next_char_anchor;

/// Everything outside the world that a snapshot reports.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub phase: RoundPhase,
    pub round: &'a RoundState,
    pub cannon: &'a Cannon,
    pub viewport: &'a Viewport,
    pub final_score: Option<u32>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    audio_events: Vec<AudioEvent>,
    ui_events: Vec<UiEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *ctx.time,
        phase: ctx.phase,
        score: ctx.round.score,
        level: ctx.round.level,
        difficulty: ctx.round.difficulty,
        spawn_interval_ms: ctx.round.spawn_interval_ms,
        danger_line_y: ctx.round.danger_line_y,
        viewport: *ctx.viewport,
        cannon: CannonView {
            pivot: ctx.cannon.pivot,
            nozzle: cannon::nozzle_position(ctx.cannon),
            angle: ctx.cannon.angle,
        },
        items: build_items(world),
        projectiles: build_projectiles(world),
        effects: build_effects(world),
        audio_events,
        ui_events,
        final_score: ctx.final_score,
    }
}

/// Live items in spawn order.
fn build_items(world: &World) -> Vec<FallingItemView> {
    let mut items: Vec<FallingItemView> = world
        .query::<(&FallingItem, &Position)>()
        .iter()
        .filter(|(_, (item, _))| item.alive)
        .map(|(_, (item, pos))| FallingItemView {
            spawn_seq: item.spawn_seq,
            text: item.text.clone(),
            glyph: item.category.glyph().map(str::to_string),
            category: item.category.clone(),
            position: *pos,
            matched: item.matched,
            next_char_anchor: next_char_anchor(item, pos),
        })
        .collect();

    items.sort_by_key(|view| view.spawn_seq);
    items
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (projectile, _))| projectile.alive)
        .map(|(_, (_, pos))| ProjectileView { position: *pos })
        .collect()
}

fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<&DestructionEffect>()
        .iter()
        .filter(|(_, effect)| effect.alive)
        .map(|(_, effect)| EffectView {
            particles: effect
                .particles
                .iter()
                .filter(|p| p.alive)
                .map(|p| ParticleView {
                    position: p.position,
                    size: p.size,
                    life_ms: p.life_ms,
                })
                .collect(),
        })
        .collect()
}

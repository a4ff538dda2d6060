//! Entity spawn factories.
//!
//! Creates falling items, projectiles and destruction effects with
//! their component bundles.

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use typecannon_core::components::*;
use typecannon_core::constants::*;
use typecannon_core::enums::ItemCategory;
use typecannon_core::types::{Position, Velocity};

use crate::rng::{random_int, random_range};

/// Spawn a falling item at `x`, just above the visible area.
pub fn spawn_item(
    world: &mut World,
    text: String,
    category: ItemCategory,
    x: f32,
    fall_speed: f32,
    spawn_seq: u64,
) -> hecs::Entity {
    world.spawn((
        FallingItem {
            text,
            category,
            fall_speed,
            matched: 0,
            spawn_seq,
            alive: true,
        },
        Position::new(x, SPAWN_Y),
    ))
}

/// Spawn a projectile at `from` flying toward `to`. The velocity never changes afterwards.
pub fn spawn_projectile(world: &mut World, from: Position, to: Position) -> hecs::Entity {
    let direction = (to.as_vec2() - from.as_vec2())
        .try_normalize()
        .unwrap_or(Vec2::NEG_Y);

    world.spawn((
        Projectile {
            lifetime_ms: PROJECTILE_LIFETIME_MS,
            alive: true,
        },
        from,
        Velocity::from_vec2(direction * PROJECTILE_SPEED),
    ))
}

/// Spawn a burst of particles radiating from `at`.
pub fn spawn_effect(world: &mut World, rng: &mut ChaCha8Rng, at: Position) -> hecs::Entity {
    let count = random_int(rng, EFFECT_PARTICLE_COUNT_MIN, EFFECT_PARTICLE_COUNT_MAX);
    let particles = (0..count)
        .map(|_| {
            let angle = random_range(rng, 0.0, std::f32::consts::TAU);
            let speed = random_range(rng, PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX);
            Particle {
                position: at,
                velocity: Velocity::from_vec2(Vec2::from_angle(angle) * speed),
                size: random_range(rng, PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
                life_ms: random_range(rng, PARTICLE_LIFE_MIN_MS, PARTICLE_LIFE_MAX_MS),
                alive: true,
            }
        })
        .collect();

    world.spawn((DestructionEffect {
        particles,
        alive: true,
    },))
}

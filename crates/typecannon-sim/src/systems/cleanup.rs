//! Cleanup system: removes items, projectiles and effects marked dead.

use hecs::{Entity, World};

use typecannon_core::components::{DestructionEffect, FallingItem, Projectile};

/// Despawn every entity whose `alive` flag is cleared.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, item) in world.query_mut::<&FallingItem>() {
        if !item.alive {
            despawn_buffer.push(entity);
        }
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if !projectile.alive {
            despawn_buffer.push(entity);
        }
    }

    for (entity, effect) in world.query_mut::<&DestructionEffect>() {
        if !effect.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

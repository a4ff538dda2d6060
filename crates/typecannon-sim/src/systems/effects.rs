//! Destruction effect update: particles drift, shrink and fade.

use hecs::World;

use typecannon_core::components::{DestructionEffect, Particle};
use typecannon_core::constants::{PARTICLE_MIN_SIZE, PARTICLE_SHRINK_RATE};

/// Advance all effects. An effect stays alive while any particle does.
pub fn run(world: &mut World, dt_ms: f32) {
    for (_entity, effect) in world.query_mut::<&mut DestructionEffect>() {
        for particle in effect.particles.iter_mut().filter(|p| p.alive) {
            update_particle(particle, dt_ms);
        }
        effect.particles.retain(|p| p.alive);
        effect.alive = !effect.particles.is_empty();
    }
}

fn update_particle(particle: &mut Particle, dt_ms: f32) {
    particle.position.x += particle.velocity.x * dt_ms;
    particle.position.y += particle.velocity.y * dt_ms;
    particle.size = (particle.size - PARTICLE_SHRINK_RATE * dt_ms).max(0.0);
    particle.life_ms -= dt_ms;
    particle.alive = particle.life_ms > 0.0 && particle.size >= PARTICLE_MIN_SIZE;
}

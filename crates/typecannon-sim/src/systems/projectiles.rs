//! Projectile flight: straight-line integration with a lifetime.

use hecs::World;

use typecannon_core::components::Projectile;
use typecannon_core::constants::PROJECTILE_BOUNDS_MARGIN;
use typecannon_core::types::{Position, Velocity, Viewport};

/// Move projectiles and mark those that expired or left the expanded view.
pub fn run(world: &mut World, viewport: &Viewport, dt_ms: f32) {
    for (_entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        if !projectile.alive {
            continue;
        }

        pos.x += vel.x * dt_ms;
        pos.y += vel.y * dt_ms;
        projectile.lifetime_ms -= dt_ms;

        if projectile.lifetime_ms <= 0.0
            || !viewport.contains_with_margin(pos, PROJECTILE_BOUNDS_MARGIN)
        {
            projectile.alive = false;
        }
    }
}

//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: entity state lives in components, round state in
//! `RoundState`.

pub mod cleanup;
pub mod effects;
pub mod falling;
pub mod progression;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
pub mod targeting;

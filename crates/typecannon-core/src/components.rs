//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, Velocity};

/// A letter, word or fruit falling toward the cannon.
/// Spawned together with a `Position`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingItem {
    /// Upper-case A–Z text the player must type.
    pub text: String,
    pub category: ItemCategory,
    /// Per-item speed factor, scaled by the round's difficulty multiplier.
    pub fall_speed: f32,
    /// Number of leading characters already typed.
    pub matched: usize,
    /// Monotonic spawn counter within the round; breaks position ties.
    pub spawn_seq: u64,
    pub alive: bool,
}

/// A shot from the cannon toward a character. Velocity is fixed at creation.
/// Spawned together with a `Position` and `Velocity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub lifetime_ms: f32,
    pub alive: bool,
}

/// One spark of a destruction effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub position: Position,
    pub velocity: Velocity,
    pub size: f32,
    pub life_ms: f32,
    pub alive: bool,
}

/// Burst of particles left behind by a completed item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DestructionEffect {
    pub particles: Vec<Particle>,
    pub alive: bool,
}

/// The player's cannon. Not an ECS entity; owned by the engine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Cannon {
    /// Centre of the base's bottom edge.
    pub pivot: Position,
    /// Barrel rotation in radians, 0 = straight up, clockwise positive.
    pub angle: f32,
    pub layout: LayoutMode,
}

//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, UiEvent};
use crate::types::{Position, SimTime, Viewport};

/// Complete read-only game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub score: u32,
    pub level: u32,
    /// Current difficulty speed multiplier.
    pub difficulty: f32,
    pub spawn_interval_ms: f32,
    pub danger_line_y: f32,
    pub viewport: Viewport,
    pub cannon: CannonView,
    pub items: Vec<FallingItemView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
    pub audio_events: Vec<AudioEvent>,
    pub ui_events: Vec<UiEvent>,
    /// Set once the round is over.
    pub final_score: Option<u32>,
}

/// Cannon geometry for drawing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CannonView {
    pub pivot: Position,
    /// Barrel tip.
    pub nozzle: Position,
    pub angle: f32,
}

/// A falling item as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingItemView {
    pub spawn_seq: u64,
    pub text: String,
    pub glyph: Option<String>,
    pub category: ItemCategory,
    /// Centre of the text baseline.
    pub position: Position,
    pub matched: usize,
    /// Where the next character to type is drawn.
    pub next_char_anchor: Position,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub particles: Vec<ParticleView>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub size: f32,
    pub life_ms: f32,
}

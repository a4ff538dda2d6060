//! Events emitted by the simulation for audio and UI feedback.
//!
//! Both kinds are fire-and-forget: the host may drop them freely.

use serde::{Deserialize, Serialize};

/// Audio cues for the host's sound system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A keystroke hit and a projectile left the cannon.
    Shoot,
    /// An item was fully typed and destroyed.
    Destroy,
    /// The round ended.
    GameOver,
}

/// Updates for the host's text and visual feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    ScoreChanged { score: u32 },
    LevelChanged { level: u32 },
    /// Brief shake after an item is destroyed.
    ScreenShake,
    RoundOver { final_score: u32 },
}

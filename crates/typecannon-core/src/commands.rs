//! Player and host commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::LayoutMode;

/// All possible player and host actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the start screen and begin the first round.
    StartRound,
    /// Start a fresh round after game over.
    Restart,
    /// A single typed character (physical or on-screen keyboard).
    KeyPress { key: char },
    /// The drawing surface changed size or layout.
    Resize {
        width: f32,
        height: f32,
        #[serde(default)]
        layout: LayoutMode,
    },
}

impl PlayerCommand {
    /// Build a `KeyPress` from a raw key name, if it is a single letter.
    pub fn key_press(key: &str) -> Option<Self> {
        parse_key(key).map(|key| PlayerCommand::KeyPress { key })
    }
}

/// Accept exactly one ASCII letter and return it upper-cased.
/// Anything else ("Shift", "1", "ab", "é") yields `None`.
pub fn parse_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let first = chars.next()?;
    if chars.next().is_some() || !first.is_ascii_alphabetic() {
        return None;
    }
    Some(first.to_ascii_uppercase())
}

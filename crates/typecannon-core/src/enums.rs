//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What kind of falling item this is. Only fruit carries a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ItemCategory {
    /// A single random A–Z letter.
    Letter,
    /// A word from the word table.
    Word,
    /// A fruit name with its decorative glyph (level 2 onwards).
    Fruit { glyph: String },
}

/// Round lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Before the first start selection.
    #[default]
    NotStarted,
    /// Ticking: items fall and keystrokes resolve.
    Running,
    /// An item breached; simulation is frozen until restart.
    Over,
}

/// Layout of the host page. Touch layouts reserve extra room under the cannon
/// for the on-screen keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    Desktop,
    Touch,
}

impl ItemCategory {
    /// Decorative glyph, if any.
    pub fn glyph(&self) -> Option<&str> {
        match self {
            ItemCategory::Fruit { glyph } => Some(glyph),
            ItemCategory::Letter | ItemCategory::Word => None,
        }
    }
}

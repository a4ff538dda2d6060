//! Engine configuration: RNG seed and spawn tables.

use serde::Deserialize;
use thiserror::Error;

use typecannon_core::tables::{FRUIT_TABLE, WORD_LIST};

/// A fruit table entry: the text to type and its glyph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FruitEntry {
    pub text: String,
    pub glyph: String,
}

/// Configuration for a new simulation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same rounds.
    pub seed: u64,
    /// Level-1 word table.
    pub words: Vec<String>,
    /// Level-2 fruit table.
    pub fruits: Vec<FruitEntry>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            words: WORD_LIST.iter().map(|w| w.to_string()).collect(),
            fruits: FRUIT_TABLE
                .iter()
                .map(|(text, glyph)| FruitEntry {
                    text: text.to_string(),
                    glyph: glyph.to_string(),
                })
                .collect(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Upper-case every table entry and drop entries that are not pure A–Z.
    pub fn normalized(mut self) -> Self {
        self.words = self
            .words
            .into_iter()
            .filter_map(|w| normalize_text(&w))
            .collect();
        self.fruits = self
            .fruits
            .into_iter()
            .filter_map(|f| {
                normalize_text(&f.text).map(|text| FruitEntry {
                    text,
                    glyph: f.glyph,
                })
            })
            .collect();
        self
    }
}

fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

//! Output seams: where snapshots are drawn and events are delivered.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::debug;

use typecannon_core::events::{AudioEvent, UiEvent};
use typecannon_core::state::GameStateSnapshot;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawing surface is gone; the loop stops.
    #[error("render context unavailable")]
    ContextUnavailable,
    /// A single frame could not be drawn; the loop carries on.
    #[error("frame dropped: {0}")]
    FrameDropped(String),
}

/// Draws one snapshot per frame.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameStateSnapshot) -> Result<(), RenderError>;
}

/// Receives the events produced by a frame. Delivery is fire-and-forget.
pub trait EventSink {
    fn audio(&mut self, event: AudioEvent);
    fn ui(&mut self, event: UiEvent);
}

/// Keeps the most recent snapshot for synchronous polling.
#[derive(Debug, Clone, Default)]
pub struct SharedSnapshot {
    latest: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl SharedSnapshot {
    pub fn new(latest: Arc<Mutex<Option<GameStateSnapshot>>>) -> Self {
        Self { latest }
    }

    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest.lock().ok().and_then(|lock| lock.clone())
    }
}

impl Renderer for SharedSnapshot {
    fn render(&mut self, snapshot: &GameStateSnapshot) -> Result<(), RenderError> {
        let mut lock = self
            .latest
            .lock()
            .map_err(|e| RenderError::FrameDropped(e.to_string()))?;
        *lock = Some(snapshot.clone());
        Ok(())
    }
}

/// Logs every event at debug level. Used when the host has no audio or UI layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn audio(&mut self, event: AudioEvent) {
        debug!(?event, "audio");
    }

    fn ui(&mut self, event: UiEvent) {
        debug!(?event, "ui");
    }
}

//! Frame clock: turns host timestamps into clamped per-frame durations.

use typecannon_core::constants::{MAX_FRAME_MS, REFERENCE_FRAME_MS};

/// Tracks the previous frame timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed time since the previous call, in `[0, MAX_FRAME_MS]`.
    /// The first frame after construction or `reset` reports one reference frame.
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return REFERENCE_FRAME_MS;
        }
        let Some(last) = self.last_ms.replace(timestamp_ms) else {
            return REFERENCE_FRAME_MS;
        };
        (timestamp_ms - last).clamp(0.0, MAX_FRAME_MS as f64) as f32
    }

    /// Forget the previous timestamp, e.g. when the loop restarts.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

//! Round lifecycle state machine.
//!
//! Pure transition table; the engine applies the side effects
//! (reset on start/restart, freeze and final score on breach).

use typecannon_core::enums::RoundPhase;

/// Something that may move the round between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    /// Mode/start selection from the start screen.
    Start,
    /// An item crossed the danger line or left the view unmatched.
    Breach,
    /// Explicit restart after game over.
    Restart,
}

/// Next phase for `action`, or `None` when the action is a no-op in `phase`.
pub fn next_phase(phase: RoundPhase, action: RoundAction) -> Option<RoundPhase> {
    match (phase, action) {
        (RoundPhase::NotStarted, RoundAction::Start) => Some(RoundPhase::Running),
        (RoundPhase::Running, RoundAction::Breach) => Some(RoundPhase::Over),
        (RoundPhase::Over, RoundAction::Restart) => Some(RoundPhase::Running),
        _ => None,
    }
}

/// Whether ticks and keystrokes advance game state in `phase`.
pub fn is_live(phase: RoundPhase) -> bool {
    phase == RoundPhase::Running
}

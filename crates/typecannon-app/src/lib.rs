//! Typecannon host runtime.
//!
//! Drives the headless simulation from a frame clock, hands snapshots to a
//! renderer, forwards audio and UI events, and exposes a threaded game loop
//! controlled over channels.

pub mod clock;
pub mod control;
pub mod game_loop;
pub mod render;
pub mod state;

pub use typecannon_core as core;
pub use typecannon_sim as sim;

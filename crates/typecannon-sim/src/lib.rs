//! Simulation engine for TypeCannon.
//!
//! Owns the hecs ECS world, advances falling items, projectiles and
//! effects once per host frame, resolves typed keys against the
//! target-selection policy, and produces GameStateSnapshots for the host.

pub mod cannon;
pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod rng;
pub mod round;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, FruitEntry, SimConfig};
pub use engine::SimulationEngine;
pub use typecannon_core as core;

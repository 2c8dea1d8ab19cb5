//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world and the rapier2d physics world, runs systems at
//! a fixed tick rate, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod physics;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;

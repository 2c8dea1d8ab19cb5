//! Simulation systems, run in a fixed order each tick by the engine.

pub mod adversary_control;
pub mod collision;
pub mod lifetime;
pub mod locomotion;
pub mod player_control;
pub mod snapshot;
pub mod spawner;
pub mod weapons;

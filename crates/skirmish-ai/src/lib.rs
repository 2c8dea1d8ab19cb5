//! Adversary behavior for SKIRMISH.
//!
//! Pure functions over plain data: the per-tick decision function that
//! drives one adversary, and the difficulty-scaling law that derives a
//! controller parameter bundle from a single scale factor at spawn time.
//! No ECS or physics dependency.

pub mod controller;
pub mod scaling;

//! Effect events emitted by the simulation for visual feedback.
//!
//! Fire-and-forget: the presentation layer plays particles from these and
//! never reports back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Visual feedback hooks for the frontend effect system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectEvent {
    /// A projectile struck something at `position`, traveling at `velocity`.
    Hit { position: Vec2, velocity: Vec2 },
    /// A unit was destroyed.
    Death {
        position: Vec2,
        base_color: Color,
        border_color: Color,
        scale: f32,
    },
}

//! Game state snapshot — the complete visible state sent to the frontend
//! each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AmmoStatus, GamePhase};
use crate::events::EffectEvent;
use crate::types::{Color, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// `None` once the player unit has been destroyed.
    pub player: Option<PlayerView>,
    pub adversaries: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
    /// Effect events produced this tick (drained, not accumulated).
    pub effects: Vec<EffectEvent>,
    pub session: SessionView,
}

/// The player unit for HUD and drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub angle: f32,
    pub health: u32,
    pub max_health: u32,
    pub ammo: AmmoStatus,
    pub base_color: Color,
    pub border_color: Color,
    pub scale: f32,
}

/// An adversary unit for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub position: Vec2,
    pub angle: f32,
    pub health: u32,
    pub max_health: u32,
    pub base_color: Color,
    pub border_color: Color,
    pub scale: f32,
}

/// A live projectile for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub angle: f32,
    pub base_color: Color,
    pub border_color: Color,
    pub scale: f32,
}

/// Session counters for the HUD and result screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionView {
    pub score: u32,
    pub kills: u32,
    /// Seconds since session start (frozen at session end).
    pub elapsed_secs: f64,
    /// False once the player unit has been destroyed.
    pub active: bool,
}

//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::BehaviorMode;
use crate::types::Color;

/// Hit points. `current` never exceeds `max` and never goes negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }
}

/// Movement envelope applied by the locomotion system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Velocity magnitude cap (units/s), enforced every tick.
    pub max_speed: f32,
    /// Force magnitude applied along the movement intent (or as drag).
    pub acceleration: f32,
    /// Maximum angular velocity (rad/s).
    pub turn_rate: f32,
}

/// Firing state machine data. The Ready/Cooling/Empty/Reloading states are
/// implicit: `reloading_since` is `Some` while a reload is in progress, and
/// ammo is refilled atomically when its duration elapses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Minimum seconds between shots.
    pub cooldown_secs: f64,
    /// Seconds a reload takes.
    pub reload_secs: f64,
    /// Magazine capacity.
    pub magazine: u32,
    /// Rounds remaining (0..=magazine).
    pub ammo: u32,
    /// Sim time of the last shot. Initialized to `-cooldown_secs` so a
    /// fresh unit may fire immediately.
    pub last_fire_at: f64,
    /// Sim time the active reload started, if any.
    pub reloading_since: Option<f64>,
    pub projectile_speed: f32,
    pub projectile_damage: u32,
    pub projectile_scale: f32,
}

/// Visual identity carried into snapshots and effect events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Appearance {
    pub base: Color,
    pub border: Color,
    /// Body scale factor (also the adversary's difficulty scale).
    pub scale: f32,
}

/// Marks the player's unit. Singular while a session is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerUnit;

/// Marks an adversary unit and carries its immutable controller bundle.
/// The player back-reference is a query at use time, never stored here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Adversary {
    pub controller: ControllerParams,
}

/// Projectile payload. The body itself lives in the physics world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: u32,
    /// Sim time the projectile was spawned; expires after the fixed TTL.
    pub spawned_at: f64,
    pub scale: f32,
}

/// Behavior parameter bundle for one adversary. Immutable once attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControllerParams {
    pub max_hp: u32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub turn_rate: f32,
    pub fire_cooldown_secs: f64,
    pub reload_secs: f64,
    pub magazine: u32,
    pub projectile_speed: f32,
    pub projectile_damage: u32,
    pub projectile_scale: f32,
    /// Difficulty scale `s` this bundle was derived from (also body scale).
    pub scale: f32,
    /// Preferred distance to hold from the player.
    pub standoff: f32,
    pub mode: BehaviorMode,
}

/// Latest movement/facing/fire intent from the input layer, held between
/// commands and consumed by the player control system each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Normalized movement intent (zero = coast/brake).
    pub move_intent: Vec2,
    /// Point the unit should rotate toward.
    pub aim_point: Vec2,
    /// Fire while held.
    pub trigger_held: bool,
    /// One-shot reload request, cleared once applied.
    pub reload_requested: bool,
}

//! Simulation constants and tuning parameters.
//!
//! Distances are in field units (the presentation layer draws 1:1 at
//! 1920x1080), durations in seconds.

use glam::Vec2;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play field ---

pub const FIELD_WIDTH: f32 = 1920.0;
pub const FIELD_HEIGHT: f32 = 1080.0;

/// How far outside the field edge adversaries spawn.
pub const SPAWN_MARGIN: f32 = 100.0;

// --- Shapes ---

/// Unit hull outline at scale 1 (a stubby gunship silhouette facing +x).
pub const UNIT_POLYGON: [Vec2; 8] = [
    Vec2::new(-30.0, -10.0),
    Vec2::new(-30.0, 10.0),
    Vec2::new(-10.0, 10.0),
    Vec2::new(-10.0, 30.0),
    Vec2::new(10.0, 30.0),
    Vec2::new(10.0, -30.0),
    Vec2::new(-10.0, -30.0),
    Vec2::new(-10.0, -10.0),
];

/// Projectile half extents at scale 1: long axis along travel (+x).
pub const PROJECTILE_HALF_LENGTH: f32 = 5.0;
pub const PROJECTILE_HALF_WIDTH: f32 = 2.5;

// --- Player ---

pub const PLAYER_MAX_HP: u32 = 100;
pub const PLAYER_MAX_SPEED: f32 = 500.0;
pub const PLAYER_ACCELERATION: f32 = 500.0;

// --- Weapon baselines (shared by player and adversary bases) ---

pub const BASE_FIRE_COOLDOWN_SECS: f64 = 0.1;
pub const BASE_RELOAD_SECS: f64 = 3.0;
pub const BASE_MAGAZINE: u32 = 30;
pub const BASE_PROJECTILE_SPEED: f32 = 5000.0;
pub const BASE_PROJECTILE_DAMAGE: u32 = 10;
pub const BASE_TURN_RATE: f32 = 10.0;

/// Recoil impulse coefficient: impulse = projectile momentum * this,
/// applied opposite the projectile's travel direction.
pub const RECOIL_COEFF: f32 = 1.5;

/// Projectile time-to-live in seconds.
pub const PROJECTILE_TTL_SECS: f64 = 10.0;

// --- Adversary base stats (before difficulty scaling) ---

pub const ADVERSARY_MAX_HP: u32 = 50;
pub const ADVERSARY_MAX_SPEED: f32 = 500.0;
pub const ADVERSARY_ACCELERATION: f32 = 500.0;
pub const ADVERSARY_STANDOFF: f32 = 300.0;

// --- Difficulty scaling ---

/// Difficulty scale `s` is drawn uniformly from this range.
pub const SCALE_MIN: f32 = 0.5;
pub const SCALE_MAX: f32 = 2.5;

/// Standoff distance draw range.
pub const STANDOFF_MAX: f32 = 1000.0;

// --- Spawner ---

/// Delay before the first wave of a session.
pub const FIRST_WAVE_DELAY_SECS: f64 = 3.0;

/// Wave-to-wave delay draw range.
pub const WAVE_DELAY_MIN_SECS: f64 = 3.0;
pub const WAVE_DELAY_MAX_SECS: f64 = 13.0;

/// Adversaries per wave (inclusive range).
pub const WAVE_SIZE_MIN: u32 = 1;
pub const WAVE_SIZE_MAX: u32 = 2;

// --- Scoring ---

/// Score credited per kill, multiplied by the victim's difficulty scale.
pub const KILL_SCORE_FACTOR: f32 = 1000.0;

/// Score credited per whole second survived, added when the session ends.
pub const SURVIVAL_BONUS_PER_SEC: u32 = 100;

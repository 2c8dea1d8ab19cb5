//! Difficulty scaling law.
//!
//! A single scale factor `s`, drawn uniformly per spawn, trades mobility
//! and rate of fire for health and damage: larger `s` yields a tougher,
//! slower, harder-hitting, slower-firing adversary.

use rand::Rng;

use skirmish_core::components::ControllerParams;
use skirmish_core::constants::*;
use skirmish_core::enums::BehaviorMode;

/// Unscaled adversary parameter bundle (`s` = 1).
pub fn base_params() -> ControllerParams {
    ControllerParams {
        max_hp: ADVERSARY_MAX_HP,
        max_speed: ADVERSARY_MAX_SPEED,
        acceleration: ADVERSARY_ACCELERATION,
        turn_rate: BASE_TURN_RATE,
        fire_cooldown_secs: BASE_FIRE_COOLDOWN_SECS,
        reload_secs: BASE_RELOAD_SECS,
        magazine: BASE_MAGAZINE,
        projectile_speed: BASE_PROJECTILE_SPEED,
        projectile_damage: BASE_PROJECTILE_DAMAGE,
        projectile_scale: 1.0,
        scale: 1.0,
        standoff: ADVERSARY_STANDOFF,
        mode: BehaviorMode::default(),
    }
}

/// Derive a parameter bundle from `base` at difficulty scale `s`.
///
/// health and projectile damage grow with `s`; max speed and acceleration
/// fall with `s`²; turn rate and projectile speed fall with `s`; fire
/// cooldown grows with `s`²; magazine shrinks with `s`. Reload and
/// standoff are drawn independently by [`draw_params`] and pass through
/// here unchanged.
pub fn apply_difficulty(base: &ControllerParams, s: f32) -> ControllerParams {
    ControllerParams {
        max_hp: scaled_count(base.max_hp, s),
        max_speed: base.max_speed / (s * s),
        acceleration: base.acceleration / (s * s),
        turn_rate: base.turn_rate / s,
        fire_cooldown_secs: base.fire_cooldown_secs * f64::from(s * s),
        reload_secs: base.reload_secs,
        magazine: scaled_count(base.magazine, 1.0 / s),
        projectile_speed: base.projectile_speed / s,
        projectile_damage: scaled_count(base.projectile_damage, s),
        projectile_scale: base.projectile_scale * s,
        scale: s,
        standoff: base.standoff,
        mode: base.mode,
    }
}

/// Draw a fully randomized adversary parameter bundle: scale from
/// [SCALE_MIN, SCALE_MAX), reload from [base/2, base*1.5), standoff from
/// [0, STANDOFF_MAX).
pub fn draw_params<R: Rng>(rng: &mut R) -> ControllerParams {
    let s = rng.gen_range(SCALE_MIN..SCALE_MAX);
    let mut params = apply_difficulty(&base_params(), s);
    params.reload_secs = rng.gen_range(BASE_RELOAD_SECS * 0.5..BASE_RELOAD_SECS * 1.5);
    params.standoff = rng.gen_range(0.0..STANDOFF_MAX);
    params
}

/// Integer stat scaling, rounded, floored at 1.
fn scaled_count(value: u32, factor: f32) -> u32 {
    ((value as f32 * factor).round() as u32).max(1)
}

//! The firing and reload state machine.
//!
//! A weapon's reload is tracked as the start time only; completion is
//! settled lazily against the clock, so ammo display and the fire gate
//! always agree on the same instant.

use hecs::{Entity, World};

use skirmish_core::components::{Appearance, Weapon};
use skirmish_core::constants::RECOIL_COEFF;
use skirmish_core::enums::{AmmoStatus, Faction};
use skirmish_core::types::forward;

use crate::physics::{BodyRef, PhysicsWorld};
use crate::world_setup;

/// Complete a finished reload: refill the magazine and clear the marker.
/// Run once per tick by the control systems before any fire attempt.
pub fn settle_reload(weapon: &mut Weapon, now: f64) {
    if let Some(since) = weapon.reloading_since {
        if now - since >= weapon.reload_secs {
            weapon.ammo = weapon.magazine;
            weapon.reloading_since = None;
        }
    }
}

/// Begin reloading at `now`. A no-op if a reload is already underway, so
/// a held reload key cannot restart the timer.
pub fn start_reload(weapon: &mut Weapon, now: f64) {
    if weapon.reloading_since.is_none() {
        weapon.reloading_since = Some(now);
    }
}

/// Derived ammo display state. Pure: never mutates the weapon.
pub fn ammo_status(weapon: &Weapon, now: f64) -> AmmoStatus {
    match weapon.reloading_since {
        Some(since) if now - since < weapon.reload_secs => AmmoStatus::Reloading,
        Some(_) => AmmoStatus::Rounds(weapon.magazine),
        None => AmmoStatus::Rounds(weapon.ammo),
    }
}

/// Attempt to fire `shooter`'s weapon at `now`.
///
/// The gate: ammo available, not reloading, and the cooldown since the
/// last shot has elapsed. An empty magazine auto-starts a reload instead.
/// On success the projectile leaves along the shooter's facing and the
/// shooter receives a recoil impulse opposite the projectile's momentum.
///
/// Returns whether a projectile was spawned.
pub fn fire(
    world: &mut World,
    physics: &mut PhysicsWorld,
    shooter: Entity,
    faction: Faction,
    now: f64,
) -> bool {
    let plan = {
        let Ok(mut weapon) = world.get::<&mut Weapon>(shooter) else {
            return false;
        };
        settle_reload(&mut weapon, now);
        if weapon.ammo == 0 {
            start_reload(&mut weapon, now);
        }
        if weapon.ammo > 0
            && weapon.reloading_since.is_none()
            && now - weapon.last_fire_at >= weapon.cooldown_secs
        {
            weapon.ammo -= 1;
            weapon.last_fire_at = now;
            Some((
                weapon.projectile_speed,
                weapon.projectile_damage,
                weapon.projectile_scale,
            ))
        } else {
            None
        }
    };
    let Some((speed, damage, scale)) = plan else {
        return false;
    };

    let (body, appearance) = {
        let Ok(body) = world.get::<&BodyRef>(shooter) else {
            return false;
        };
        let Ok(appearance) = world.get::<&Appearance>(shooter) else {
            return false;
        };
        (*body, *appearance)
    };
    let position = physics.position(body.0);
    let velocity = forward(physics.angle(body.0)) * speed;

    let projectile = world_setup::spawn_projectile(
        world, physics, position, velocity, faction, damage, scale, appearance, now,
    );

    if let Ok(projectile_body) = world.get::<&BodyRef>(projectile) {
        let momentum = velocity * physics.mass(projectile_body.0);
        physics.apply_impulse(body.0, -momentum * RECOIL_COEFF);
    }
    true
}

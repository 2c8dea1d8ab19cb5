//! Entity spawn factories.
//!
//! Creates the player unit, adversary units, and projectiles with their
//! component bundles and physics bodies. The body handle is attached as a
//! [`BodyRef`] component after the body is created against the entity.

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::enums::Faction;
use skirmish_core::types::Color;

use crate::physics::{BodyRef, PhysicsWorld};

/// Spawn the player unit at `position` with full health and ammo.
pub fn spawn_player(world: &mut World, physics: &mut PhysicsWorld, position: Vec2) -> Entity {
    let weapon = make_weapon(
        BASE_FIRE_COOLDOWN_SECS,
        BASE_RELOAD_SECS,
        BASE_MAGAZINE,
        BASE_PROJECTILE_SPEED,
        BASE_PROJECTILE_DAMAGE,
        1.0,
    );
    let entity = world.spawn((
        PlayerUnit,
        Health::full(PLAYER_MAX_HP),
        Mobility {
            max_speed: PLAYER_MAX_SPEED,
            acceleration: PLAYER_ACCELERATION,
            turn_rate: BASE_TURN_RATE,
        },
        weapon,
        Appearance {
            base: Color::BLUE,
            border: Color::WHITE,
            scale: 1.0,
        },
    ));
    let handle = physics.create_unit_body(entity, position, 1.0, Faction::Friend);
    let _ = world.insert_one(entity, BodyRef(handle));
    entity
}

/// Spawn one adversary at `position` from a controller parameter bundle.
pub fn spawn_adversary(
    world: &mut World,
    physics: &mut PhysicsWorld,
    position: Vec2,
    params: ControllerParams,
) -> Entity {
    let weapon = make_weapon(
        params.fire_cooldown_secs,
        params.reload_secs,
        params.magazine,
        params.projectile_speed,
        params.projectile_damage,
        params.projectile_scale,
    );
    let entity = world.spawn((
        Adversary { controller: params },
        Health::full(params.max_hp),
        Mobility {
            max_speed: params.max_speed,
            acceleration: params.acceleration,
            turn_rate: params.turn_rate,
        },
        weapon,
        Appearance {
            base: Color::RED,
            border: Color::WHITE,
            scale: params.scale,
        },
    ));
    let handle = physics.create_unit_body(entity, position, params.scale, Faction::Enemy);
    let _ = world.insert_one(entity, BodyRef(handle));
    entity
}

/// Spawn a projectile fired by a unit of `faction`, inheriting its colors.
pub fn spawn_projectile(
    world: &mut World,
    physics: &mut PhysicsWorld,
    position: Vec2,
    velocity: Vec2,
    faction: Faction,
    damage: u32,
    scale: f32,
    appearance: Appearance,
    now: f64,
) -> Entity {
    let entity = world.spawn((
        Projectile {
            damage,
            spawned_at: now,
            scale,
        },
        Appearance {
            base: appearance.base,
            border: appearance.border,
            scale,
        },
    ));
    let handle = physics.create_projectile_body(entity, position, velocity, scale, faction);
    let _ = world.insert_one(entity, BodyRef(handle));
    entity
}

fn make_weapon(
    cooldown_secs: f64,
    reload_secs: f64,
    magazine: u32,
    projectile_speed: f32,
    projectile_damage: u32,
    projectile_scale: f32,
) -> Weapon {
    Weapon {
        cooldown_secs,
        reload_secs,
        magazine,
        ammo: magazine,
        // A fresh unit may fire immediately.
        last_fire_at: -cooldown_secs,
        reloading_since: None,
        projectile_speed,
        projectile_damage,
        projectile_scale,
    }
}

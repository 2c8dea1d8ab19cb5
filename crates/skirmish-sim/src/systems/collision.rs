//! Collision-driven damage resolution.
//!
//! For each contact reported by the physics step: any projectile side
//! spends itself (hit effect, then release), and its damage is applied to
//! the opposing side's health. A unit reaching zero health emits a death
//! effect, credits the session if it was an adversary, and is released.
//!
//! Release ordering is what makes double-processing impossible: once a
//! body's entity binding is removed, later contacts in the same tick that
//! mention the handle no longer resolve and are skipped.

use hecs::{Entity, World};
use rapier2d::prelude::RigidBodyHandle;

use skirmish_core::components::{Adversary, Appearance, Health, Projectile};
use skirmish_core::events::EffectEvent;

use crate::physics::{BodyRef, ContactEvent, PhysicsWorld};
use crate::session::SessionState;

/// Resolve one tick's contact events.
pub fn run(
    world: &mut World,
    physics: &mut PhysicsWorld,
    contacts: &[ContactEvent],
    session: &mut SessionState,
    effects: &mut Vec<EffectEvent>,
) {
    for contact in contacts {
        let sides = [contact.body_a, contact.body_b];

        // Spend every projectile side first and collect its damage. With
        // two projectiles colliding, both are spent and nothing below has
        // health to lose.
        let mut damage = 0;
        let mut any_projectile = false;
        for handle in sides {
            let Some(entity) = physics.entity_of(handle) else {
                continue;
            };
            let Ok(projectile) = world.get::<&Projectile>(entity).map(|p| *p) else {
                continue;
            };
            any_projectile = true;
            damage = projectile.damage;
            effects.push(EffectEvent::Hit {
                position: contact.point,
                velocity: physics.velocity(handle),
            });
            physics.release(handle);
            let _ = world.despawn(entity);
        }
        if !any_projectile {
            // Unit-on-unit shove; the physics solver already handled it.
            continue;
        }

        for handle in sides {
            let Some(entity) = physics.entity_of(handle) else {
                continue;
            };
            apply_damage(world, physics, entity, handle, damage, session, effects);
        }
    }
}

/// Subtract `damage` from a unit's health, destroying it at zero.
pub fn apply_damage(
    world: &mut World,
    physics: &mut PhysicsWorld,
    entity: Entity,
    handle: RigidBodyHandle,
    damage: u32,
    session: &mut SessionState,
    effects: &mut Vec<EffectEvent>,
) {
    let destroyed = {
        let Ok(mut health) = world.get::<&mut Health>(entity) else {
            return;
        };
        health.current = health.current.saturating_sub(damage);
        health.current == 0
    };
    if !destroyed {
        return;
    }

    if let Ok(appearance) = world.get::<&Appearance>(entity).map(|a| *a) {
        effects.push(EffectEvent::Death {
            position: physics.position(handle),
            base_color: appearance.base,
            border_color: appearance.border,
            scale: appearance.scale,
        });
    }
    if let Ok(adversary) = world.get::<&Adversary>(entity).map(|a| *a) {
        session.record_kill(adversary.controller.scale);
    }
    physics.release(handle);
    let _ = world.despawn(entity);
}

/// Release a projectile outside the contact path (e.g. lifetime expiry).
pub fn release_projectile(world: &mut World, physics: &mut PhysicsWorld, entity: Entity) {
    if let Ok(body) = world.get::<&BodyRef>(entity).map(|b| *b) {
        physics.release(body.0);
    }
    let _ = world.despawn(entity);
}

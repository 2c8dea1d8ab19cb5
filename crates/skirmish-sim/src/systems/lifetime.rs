//! Projectile lifetime expiry.

use hecs::{Entity, World};

use skirmish_core::components::Projectile;
use skirmish_core::constants::PROJECTILE_TTL_SECS;

use crate::physics::PhysicsWorld;
use crate::systems::collision;

/// Release every projectile that has been live for the full TTL.
/// `buffer` is the engine's reusable despawn list.
pub fn run(world: &mut World, physics: &mut PhysicsWorld, now: f64, buffer: &mut Vec<Entity>) {
    buffer.clear();
    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if now - projectile.spawned_at >= PROJECTILE_TTL_SECS {
            buffer.push(entity);
        }
    }
    for entity in buffer.drain(..) {
        collision::release_projectile(world, physics, entity);
    }
}

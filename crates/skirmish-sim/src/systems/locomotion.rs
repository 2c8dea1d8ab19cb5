//! Force-based movement and facing for combat units.

use glam::Vec2;
use rapier2d::prelude::RigidBodyHandle;

use skirmish_core::components::Mobility;
use skirmish_core::types::wrap_angle;

use crate::physics::PhysicsWorld;

/// Apply the movement intent for one tick.
///
/// Zero intent applies a braking force opposite the current velocity
/// (simulated drag); any other intent applies full acceleration along its
/// direction. The speed clamp runs unconditionally afterwards.
pub fn drive(
    physics: &mut PhysicsWorld,
    handle: RigidBodyHandle,
    mobility: &Mobility,
    intent: Vec2,
) {
    let force = if intent == Vec2::ZERO {
        -physics.velocity(handle).normalize_or_zero() * mobility.acceleration
    } else {
        intent.normalize_or_zero() * mobility.acceleration
    };
    physics.apply_force(handle, force);
    physics.clamp_speed(handle, mobility.max_speed);
}

/// Turn toward `target` by setting angular velocity.
///
/// The signed shortest angular difference is wrapped into (-PI, PI]; the
/// turn rate eases in quadratically so large misalignments turn at full
/// rate while near-zero misalignments settle smoothly.
pub fn face(
    physics: &mut PhysicsWorld,
    handle: RigidBodyHandle,
    mobility: &Mobility,
    target: Vec2,
) {
    let bearing = (target - physics.position(handle)).to_angle();
    let difference = wrap_angle(bearing - physics.angle(handle));
    let angvel = if difference == 0.0 {
        0.0
    } else {
        difference.signum() * (difference * difference * mobility.turn_rate).min(mobility.turn_rate)
    };
    physics.set_angular_velocity(handle, angvel);
}

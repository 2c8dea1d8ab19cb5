//! Procedural adversary wave spawning.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::{
    SPAWN_MARGIN, WAVE_DELAY_MAX_SECS, WAVE_DELAY_MIN_SECS, WAVE_SIZE_MAX, WAVE_SIZE_MIN,
};
use skirmish_core::types::PlayField;

use skirmish_ai::scaling;

use crate::physics::PhysicsWorld;
use crate::session::SessionState;
use crate::world_setup;

/// Spawn the next wave if it is due, then reschedule.
///
/// Each wave places 1-2 adversaries just outside the play field, each with
/// an independently drawn difficulty bundle.
pub fn run(
    world: &mut World,
    physics: &mut PhysicsWorld,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    field: &PlayField,
    now: f64,
) {
    if now < session.next_wave_at {
        return;
    }
    session.next_wave_at = now + rng.gen_range(WAVE_DELAY_MIN_SECS..WAVE_DELAY_MAX_SECS);

    let count = rng.gen_range(WAVE_SIZE_MIN..=WAVE_SIZE_MAX);
    for _ in 0..count {
        let params = scaling::draw_params(rng);
        let position = edge_point(rng, field, SPAWN_MARGIN);
        world_setup::spawn_adversary(world, physics, position, params);
    }
}

/// A uniformly random point on the rectangle `margin` outside the field
/// edge, so new adversaries always enter from off screen.
pub fn edge_point(rng: &mut ChaCha8Rng, field: &PlayField, margin: f32) -> Vec2 {
    match rng.gen_range(0..4u8) {
        0 => Vec2::new(rng.gen_range(-margin..field.width + margin), -margin),
        1 => Vec2::new(
            rng.gen_range(-margin..field.width + margin),
            field.height + margin,
        ),
        2 => Vec2::new(-margin, rng.gen_range(-margin..field.height + margin)),
        _ => Vec2::new(
            field.width + margin,
            rng.gen_range(-margin..field.height + margin),
        ),
    }
}

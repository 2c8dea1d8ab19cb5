//! Runs the adversary controller for every live adversary unit.

use hecs::{Entity, World};

use skirmish_core::components::{Adversary, ControllerParams, Mobility, Weapon};
use skirmish_core::enums::Faction;
use skirmish_core::types::PlayField;

use skirmish_ai::controller;

use crate::physics::{BodyRef, PhysicsWorld};
use crate::systems::{locomotion, player_control, weapons};

/// Run one control tick for every adversary. Skipped entirely when no
/// player unit is live (the session is ending this tick anyway).
pub fn run(world: &mut World, physics: &mut PhysicsWorld, field: &PlayField, now: f64) {
    let player_position = {
        let Some(player) = player_control::find_player(world) else {
            return;
        };
        let Ok(body) = world.get::<&BodyRef>(player) else {
            return;
        };
        physics.position(body.0)
    };

    // Snapshot the roster first: firing mutates the world mid-loop.
    let roster: Vec<(Entity, ControllerParams, BodyRef, Mobility)> = world
        .query::<(&Adversary, &BodyRef, &Mobility)>()
        .iter()
        .map(|(entity, (adversary, body, mobility))| {
            (entity, adversary.controller, *body, *mobility)
        })
        .collect();

    for (entity, params, body, mobility) in roster {
        let me = physics.position(body.0);
        let decision = controller::decide(&params, me, player_position, field);

        locomotion::drive(physics, body.0, &mobility, decision.move_intent);
        locomotion::face(physics, body.0, &mobility, decision.face_toward);

        if let Ok(mut weapon) = world.get::<&mut Weapon>(entity) {
            weapons::settle_reload(&mut weapon, now);
        }
        if decision.fire {
            weapons::fire(world, physics, entity, Faction::Enemy, now);
        }
    }
}

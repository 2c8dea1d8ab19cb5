//! Translates the latched player input into movement, aim, and weapon
//! actions for the player unit.

use hecs::{Entity, World};

use skirmish_core::components::{Mobility, PlayerInput, PlayerUnit, Weapon};
use skirmish_core::enums::Faction;

use crate::physics::{BodyRef, PhysicsWorld};
use crate::systems::{locomotion, weapons};

/// The live player entity, if any.
pub fn find_player(world: &World) -> Option<Entity> {
    let mut query = world.query::<()>().with::<&PlayerUnit>();
    query.iter().next().map(|(entity, ())| entity)
}

/// Run one control tick for the player unit. `Reload` is a one-shot
/// request and is consumed here; the rest of the input is level-held
/// state that persists until the next command changes it.
pub fn run(world: &mut World, physics: &mut PhysicsWorld, input: &mut PlayerInput, now: f64) {
    let Some(player) = find_player(world) else {
        return;
    };
    let (body, mobility) = {
        let Ok(body) = world.get::<&BodyRef>(player) else {
            return;
        };
        let Ok(mobility) = world.get::<&Mobility>(player) else {
            return;
        };
        (*body, *mobility)
    };

    locomotion::drive(physics, body.0, &mobility, input.move_intent);
    locomotion::face(physics, body.0, &mobility, input.aim_point);

    if let Ok(mut weapon) = world.get::<&mut Weapon>(player) {
        weapons::settle_reload(&mut weapon, now);
        if input.reload_requested {
            weapons::start_reload(&mut weapon, now);
        }
    }
    input.reload_requested = false;

    if input.trigger_held {
        weapons::fire(world, physics, player, Faction::Friend, now);
    }
}

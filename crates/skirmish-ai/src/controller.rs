//! Adversary decision function.
//!
//! Maps (controller parameters, own position, player position) to a
//! movement intent, a facing target, and a fire flag — evaluated once per
//! tick per adversary by the control system.

use glam::Vec2;

use skirmish_core::components::ControllerParams;
use skirmish_core::enums::BehaviorMode;
use skirmish_core::types::PlayField;

/// Output of one decision evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Movement intent; zero means hold position (the locomotion system
    /// applies braking drag for zero intent).
    pub move_intent: Vec2,
    /// Point to rotate toward.
    pub face_toward: Vec2,
    /// Whether to pull the trigger this tick.
    pub fire: bool,
}

/// Evaluate the controller for one adversary.
///
/// Outside the visible play area the movement intent always points back
/// toward the field center, regardless of mode; facing and fire decisions
/// are unaffected.
pub fn decide(params: &ControllerParams, me: Vec2, player: Vec2, field: &PlayField) -> Decision {
    let mut decision = match params.mode {
        BehaviorMode::Standoff => {
            let to_player = player - me;
            let range = to_player.length();
            // Close to within the standoff distance, then hold.
            let advance = (range - params.standoff).max(0.0);
            let move_intent = if range > f32::EPSILON {
                to_player / range * advance
            } else {
                Vec2::ZERO
            };
            Decision {
                move_intent,
                face_toward: player,
                fire: true,
            }
        }
        BehaviorMode::Passive => Decision {
            move_intent: Vec2::ZERO,
            face_toward: player,
            fire: false,
        },
    };

    if !field.contains(me) {
        decision.move_intent = field.center() - me;
    }

    decision
}

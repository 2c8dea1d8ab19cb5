//! Builds the per-tick serializable state snapshot for the frontend.

use hecs::World;

use skirmish_core::components::{Adversary, Appearance, Health, PlayerUnit, Projectile, Weapon};
use skirmish_core::enums::GamePhase;
use skirmish_core::events::EffectEvent;
use skirmish_core::state::{GameStateSnapshot, PlayerView, ProjectileView, UnitView};
use skirmish_core::types::SimTime;

use crate::physics::{BodyRef, PhysicsWorld};
use crate::session::SessionState;
use crate::systems::weapons;

/// Assemble the snapshot for the tick that just completed. `effects` is
/// the tick's drained effect queue and is consumed into the snapshot.
pub fn build(
    world: &World,
    physics: &PhysicsWorld,
    time: SimTime,
    phase: GamePhase,
    effects: Vec<EffectEvent>,
    session: &SessionState,
) -> GameStateSnapshot {
    let now = time.elapsed_secs;

    let player = {
        let mut query = world
            .query::<(&Health, &Weapon, &Appearance, &BodyRef)>()
            .with::<&PlayerUnit>();
        query
            .iter()
            .next()
            .map(|(_, (health, weapon, appearance, body))| PlayerView {
                position: physics.position(body.0),
                angle: physics.angle(body.0),
                health: health.current,
                max_health: health.max,
                ammo: weapons::ammo_status(weapon, now),
                base_color: appearance.base,
                border_color: appearance.border,
                scale: appearance.scale,
            })
    };

    let adversaries = world
        .query::<(&Adversary, &Health, &Appearance, &BodyRef)>()
        .iter()
        .map(|(_, (_, health, appearance, body))| UnitView {
            position: physics.position(body.0),
            angle: physics.angle(body.0),
            health: health.current,
            max_health: health.max,
            base_color: appearance.base,
            border_color: appearance.border,
            scale: appearance.scale,
        })
        .collect();

    let projectiles = world
        .query::<(&Projectile, &Appearance, &BodyRef)>()
        .iter()
        .map(|(_, (_, appearance, body))| ProjectileView {
            position: physics.position(body.0),
            angle: physics.angle(body.0),
            base_color: appearance.base,
            border_color: appearance.border,
            scale: appearance.scale,
        })
        .collect();

    GameStateSnapshot {
        time,
        phase,
        player,
        adversaries,
        projectiles,
        effects,
        session: session.view(now),
    }
}

//! rapier2d integration — the physics body binding.
//!
//! [`PhysicsWorld`] wraps the rapier2d simulation the engine treats as an
//! external service: body creation with shape/kind/filter, force and
//! velocity mutators, a fixed-dt step, per-tick collision events with a
//! contact point, and body release. It also owns the body-handle → entity
//! index, so collision events can be attributed to ECS entities and a
//! released body can never be resolved again.
//!
//! Zero gravity: this is a top-down world.

use std::collections::HashMap;

use glam::Vec2;
use hecs::Entity;
use rapier2d::prelude::*;

use skirmish_core::constants::{
    PROJECTILE_HALF_LENGTH, PROJECTILE_HALF_WIDTH, UNIT_POLYGON,
};
use skirmish_core::enums::Faction;

// Collision filter categories. Each category's mask excludes its own
// faction's peer category (units don't collide with their own bullets)
// and includes everything else.
const FRIEND: Group = Group::GROUP_1;
const FRIEND_PROJECTILE: Group = Group::GROUP_2;
const ENEMY: Group = Group::GROUP_3;
const ENEMY_PROJECTILE: Group = Group::GROUP_4;

fn unit_groups(faction: Faction) -> InteractionGroups {
    match faction {
        Faction::Friend => InteractionGroups::new(FRIEND, Group::ALL & !FRIEND_PROJECTILE),
        Faction::Enemy => InteractionGroups::new(ENEMY, Group::ALL & !ENEMY_PROJECTILE),
    }
}

fn projectile_groups(faction: Faction) -> InteractionGroups {
    match faction {
        Faction::Friend => InteractionGroups::new(FRIEND_PROJECTILE, Group::ALL & !FRIEND),
        Faction::Enemy => InteractionGroups::new(ENEMY_PROJECTILE, Group::ALL & !ENEMY),
    }
}

/// The rigid-body handle attached to a unit or projectile entity.
#[derive(Debug, Clone, Copy)]
pub struct BodyRef(pub RigidBodyHandle);

/// One collision reported by the physics engine for the current tick.
#[derive(Debug, Clone, Copy)]
pub struct ContactEvent {
    pub body_a: RigidBodyHandle,
    pub body_b: RigidBodyHandle,
    /// World-space contact point.
    pub point: Vec2,
}

/// Manages rapier2d simulation state for all live bodies.
pub struct PhysicsWorld {
    pipeline: PhysicsPipeline,
    gravity: Vector<Real>,
    integration_params: IntegrationParameters,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    /// Body handle → owning entity. Entries are removed on release, which
    /// is what guards against damaging or releasing a body twice.
    entities: HashMap<RigidBodyHandle, Entity>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            pipeline: PhysicsPipeline::new(),
            gravity: vector![0.0, 0.0],
            integration_params: IntegrationParameters::default(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            entities: HashMap::new(),
        }
    }

    /// Create a dynamic unit body: convex hull of the unit polygon at
    /// `scale`, filtered for `faction`.
    pub fn create_unit_body(
        &mut self,
        entity: Entity,
        position: Vec2,
        scale: f32,
        faction: Faction,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![position.x, position.y])
            .build();
        let handle = self.bodies.insert(body);

        let points: Vec<Point<Real>> = UNIT_POLYGON
            .iter()
            .map(|v| point![v.x * scale, v.y * scale])
            .collect();
        let shape =
            SharedShape::convex_hull(&points).unwrap_or_else(|| SharedShape::ball(30.0 * scale));
        let collider = ColliderBuilder::new(shape)
            .density(1.0)
            .collision_groups(unit_groups(faction))
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        self.entities.insert(handle, entity);
        handle
    }

    /// Create a projectile body moving at `velocity`, oriented along its
    /// travel direction and flagged for continuous collision detection so
    /// it cannot tunnel through thin targets at high speed.
    pub fn create_projectile_body(
        &mut self,
        entity: Entity,
        position: Vec2,
        velocity: Vec2,
        scale: f32,
        faction: Faction,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![position.x, position.y])
            .rotation(velocity.y.atan2(velocity.x))
            .linvel(vector![velocity.x, velocity.y])
            .ccd_enabled(true)
            .build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::cuboid(
            PROJECTILE_HALF_LENGTH * scale,
            PROJECTILE_HALF_WIDTH * scale,
        )
        .density(1.0)
        .collision_groups(projectile_groups(faction))
        .active_events(ActiveEvents::COLLISION_EVENTS)
        .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        self.entities.insert(handle, entity);
        handle
    }

    /// Release a body: removes it and its colliders from the simulation
    /// and drops the entity binding. Callers guarantee at most one logical
    /// release per entity; the binding removal is what enforces that
    /// downstream (a released handle no longer resolves to an entity).
    pub fn release(&mut self, handle: RigidBodyHandle) {
        self.entities.remove(&handle);
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Resolve a body handle to its owning entity, if still live.
    pub fn entity_of(&self, handle: RigidBodyHandle) -> Option<Entity> {
        self.entities.get(&handle).copied()
    }

    /// Replace the force applied to a body for this tick.
    pub fn apply_force(&mut self, handle: RigidBodyHandle, force: Vec2) {
        let body = &mut self.bodies[handle];
        body.reset_forces(true);
        body.add_force(vector![force.x, force.y], true);
    }

    /// Apply an instantaneous impulse (e.g. recoil).
    pub fn apply_impulse(&mut self, handle: RigidBodyHandle, impulse: Vec2) {
        self.bodies[handle].apply_impulse(vector![impulse.x, impulse.y], true);
    }

    pub fn set_velocity(&mut self, handle: RigidBodyHandle, velocity: Vec2) {
        self.bodies[handle].set_linvel(vector![velocity.x, velocity.y], true);
    }

    pub fn set_angle(&mut self, handle: RigidBodyHandle, angle: f32) {
        self.bodies[handle].set_rotation(Rotation::new(angle), true);
    }

    pub fn set_angular_velocity(&mut self, handle: RigidBodyHandle, angvel: f32) {
        self.bodies[handle].set_angvel(angvel, true);
    }

    /// Clamp the body's speed to `max_speed`, preserving direction.
    /// Applied every tick as a post-force correction, not a drag law.
    pub fn clamp_speed(&mut self, handle: RigidBodyHandle, max_speed: f32) {
        let body = &mut self.bodies[handle];
        let linvel = *body.linvel();
        let speed = linvel.norm();
        if speed > max_speed {
            body.set_linvel(linvel * (max_speed / speed), true);
        }
    }

    pub fn position(&self, handle: RigidBodyHandle) -> Vec2 {
        let t = self.bodies[handle].translation();
        Vec2::new(t.x, t.y)
    }

    pub fn velocity(&self, handle: RigidBodyHandle) -> Vec2 {
        let v = self.bodies[handle].linvel();
        Vec2::new(v.x, v.y)
    }

    pub fn angle(&self, handle: RigidBodyHandle) -> f32 {
        self.bodies[handle].rotation().angle()
    }

    pub fn angular_velocity(&self, handle: RigidBodyHandle) -> f32 {
        self.bodies[handle].angvel()
    }

    pub fn mass(&self, handle: RigidBodyHandle) -> f32 {
        self.bodies[handle].mass()
    }

    /// Number of live bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Step the simulation by `dt` and return the collisions that started
    /// during the step, each with one world-space contact point.
    ///
    /// Events are sorted by body-handle pair: rapier's channel delivery
    /// order is not guaranteed, and the collision resolver must see the
    /// same sequence for the same simulation state.
    pub fn step(&mut self, dt: f64) -> Vec<ContactEvent> {
        self.integration_params.dt = dt as Real;

        let (collision_send, collision_recv) =
            rapier2d::crossbeam::channel::unbounded::<CollisionEvent>();
        let (force_send, _force_recv) =
            rapier2d::crossbeam::channel::unbounded::<ContactForceEvent>();
        let event_handler = ChannelEventCollector::new(collision_send, force_send);

        self.pipeline.step(
            &self.gravity,
            &self.integration_params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &event_handler,
        );

        let mut events = Vec::new();
        while let Ok(event) = collision_recv.try_recv() {
            let CollisionEvent::Started(c1, c2, _flags) = event else {
                continue;
            };
            let Some(body_a) = self.colliders.get(c1).and_then(|c| c.parent()) else {
                continue;
            };
            let Some(body_b) = self.colliders.get(c2).and_then(|c| c.parent()) else {
                continue;
            };
            let point = self
                .contact_point(c1, c2)
                .unwrap_or_else(|| self.position(body_a));
            events.push(ContactEvent {
                body_a,
                body_b,
                point,
            });
        }

        events.sort_by_key(|e| {
            let a = e.body_a.into_raw_parts();
            let b = e.body_b.into_raw_parts();
            (a.min(b), a.max(b))
        });

        events
    }

    /// World-space deepest contact point between two colliders, if the
    /// narrow phase still holds their pair after the step.
    fn contact_point(&self, c1: ColliderHandle, c2: ColliderHandle) -> Option<Vec2> {
        let pair = self.narrow_phase.contact_pair(c1, c2)?;
        let (_, contact) = pair.find_deepest_contact()?;
        let collider = self.colliders.get(pair.collider1)?;
        let point = collider.position() * contact.local_p1;
        Some(Vec2::new(point.x, point.y))
    }
}

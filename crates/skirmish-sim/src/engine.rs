//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the rapier2d physics
//! world, processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::PlayerInput;
use skirmish_core::constants::DT;
use skirmish_core::enums::GamePhase;
use skirmish_core::events::EffectEvent;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::types::{PlayField, SimTime};

use glam::Vec2;

use crate::physics::PhysicsWorld;
use crate::session::SessionState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Play field dimensions.
    pub field: PlayField,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: PlayField::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world, the physics world, and all
/// sim state.
pub struct SimulationEngine {
    world: World,
    physics: PhysicsWorld,
    time: SimTime,
    phase: GamePhase,
    field: PlayField,
    rng: ChaCha8Rng,
    input: PlayerInput,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    effects: Vec<EffectEvent>,
    session: SessionState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            physics: PhysicsWorld::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            field: config.field,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: PlayerInput::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            effects: Vec::new(),
            session: SessionState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let effects = std::mem::take(&mut self.effects);
        systems::snapshot::build(
            &self.world,
            &self.physics,
            self.time,
            self.phase,
            effects,
            &self.session,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Get a read-only reference to the physics world.
    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    /// Apply damage straight to the player unit (for tests).
    #[cfg(test)]
    pub fn damage_player(&mut self, amount: u32) {
        use crate::physics::BodyRef;
        let Some(player) = systems::player_control::find_player(&self.world) else {
            return;
        };
        let Ok(body) = self.world.get::<&BodyRef>(player).map(|b| *b) else {
            return;
        };
        systems::collision::apply_damage(
            &mut self.world,
            &mut self.physics,
            player,
            body.0,
            amount,
            &mut self.session,
            &mut self.effects,
        );
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Title | GamePhase::GameOver) {
                    self.reset_session();
                }
            }
            PlayerCommand::SetMoveIntent { x, y } => {
                self.input.move_intent = Vec2::new(x, y);
            }
            PlayerCommand::SetAimPoint { x, y } => {
                self.input.aim_point = Vec2::new(x, y);
            }
            PlayerCommand::SetTrigger { held } => {
                self.input.trigger_held = held;
            }
            PlayerCommand::Reload => {
                self.input.reload_requested = true;
            }
            PlayerCommand::ReturnToTitle => {
                if self.phase == GamePhase::GameOver {
                    self.phase = GamePhase::Title;
                }
            }
        }
    }

    /// Tear down the previous session (all entities and bodies) and start
    /// a fresh one with the player at the field center.
    fn reset_session(&mut self) {
        self.world = World::new();
        self.physics = PhysicsWorld::new();
        self.time = SimTime::default();
        self.input = PlayerInput::default();
        self.effects.clear();
        self.session = SessionState::starting_at(0.0);
        world_setup::spawn_player(&mut self.world, &mut self.physics, self.field.center());
        self.phase = GamePhase::Active;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;
        // 1. Player control (movement, aim, trigger, reload)
        systems::player_control::run(&mut self.world, &mut self.physics, &mut self.input, now);
        // 2. Adversary control (controller decisions, movement, fire)
        systems::adversary_control::run(&mut self.world, &mut self.physics, &self.field, now);
        // 3. Physics integration
        let contacts = self.physics.step(DT);
        // 4. Collision damage resolution
        systems::collision::run(
            &mut self.world,
            &mut self.physics,
            &contacts,
            &mut self.session,
            &mut self.effects,
        );
        // 5. Projectile lifetime expiry
        systems::lifetime::run(
            &mut self.world,
            &mut self.physics,
            now,
            &mut self.despawn_buffer,
        );
        // 6. Wave spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.physics,
            &mut self.rng,
            &mut self.session,
            &self.field,
            now,
        );
        // 7. Session end check
        if systems::player_control::find_player(&self.world).is_none() {
            self.session.end(now);
            self.phase = GamePhase::GameOver;
        }
    }
}

//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tankarena_core::commands::PlayerCommand;
use tankarena_core::components::Tank;
use tankarena_core::enums::{Direction, Faction, SessionState};
use tankarena_core::events::GameEvent;
use tankarena_core::state::{GameStateSnapshot, TankView};
use tankarena_core::types::SimTime;
use tankarena_grid::TileGrid;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and same inputs = same session.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world, the grid and all session state.
pub struct SimulationEngine {
    world: World,
    /// Every live entity in insertion order.
    roster: Vec<Entity>,
    player: Option<Entity>,
    grid: TileGrid,
    time: SimTime,
    state: SessionState,
    score: u32,
    seed: u64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine for `grid` and start a session on it.
    pub fn new(grid: TileGrid, config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            roster: Vec::new(),
            player: None,
            grid,
            time: SimTime::default(),
            state: SessionState::default(),
            score: 0,
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        engine.reset();
        engine
    }

    /// Restart the session from the loaded map. The RNG is reseeded, so two
    /// resets in a row produce identical sessions.
    pub fn reset(&mut self) {
        self.grid.reset_to_initial();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        let player =
            world_setup::setup_session(&mut self.world, &mut self.roster, &self.grid, &mut self.rng);
        self.player = Some(player);
        self.state = SessionState::Playing;
        self.score = 0;
        self.time = SimTime::default();
        self.command_queue.clear();
        self.events.clear();

        tracing::info!(
            enemies = self.grid.enemy_starts().len(),
            seed = self.seed,
            "session started"
        );
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Apply a command immediately.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { direction } => {
                self.player_move(direction);
            }
            PlayerCommand::Fire => {
                self.player_fire();
            }
            PlayerCommand::TogglePause => self.toggle_pause(),
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Turn the player tank and try to drive it its own speed. Returns
    /// whether it moved. Ignored unless the session is playing.
    pub fn player_move(&mut self, direction: Direction) -> bool {
        if self.state != SessionState::Playing {
            return false;
        }
        let Some(player) = self.player else {
            return false;
        };
        let Ok(speed) = self.world.get::<&Tank>(player).map(|tank| tank.speed) else {
            return false;
        };
        systems::control::try_move(&mut self.world, &self.grid, player, direction, speed)
    }

    /// Fire the player's gun if it is loaded. Ignored unless the session is
    /// playing.
    pub fn player_fire(&mut self) -> bool {
        if self.state != SessionState::Playing {
            return false;
        }
        let Some(player) = self.player else {
            return false;
        };
        systems::control::try_fire(&mut self.world, &mut self.roster, player, &mut self.events)
            .is_some()
    }

    /// Switch between playing and paused. No effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            SessionState::GameOver => SessionState::GameOver,
        };
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. Nothing moves and no time accrues unless playing.
    pub fn update(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.state == SessionState::Playing {
            self.time.advance(dt);
            self.run_systems(dt);
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Snapshot of the current state without advancing. Pending events are
    /// left in place for the next update.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(self.events.clone())
    }

    /// Get the current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the arena tiles.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Live entities in insertion order.
    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    /// The player tank handle. `None` once the game is over, even before
    /// the tank has been purged.
    pub fn player(&self) -> Option<Entity> {
        match self.state {
            SessionState::GameOver => None,
            _ => self.player,
        }
    }

    /// HUD view of the player tank, gated on session state.
    pub fn player_view(&self) -> Option<TankView> {
        self.player()
            .and_then(|player| systems::snapshot::tank_view(&self.world, player))
    }

    /// Player health, or 0 once the game is over.
    pub fn player_health(&self) -> i32 {
        self.player_view().map_or(0, |view| view.health)
    }

    /// Add an enemy tank with its top-left corner at `origin`.
    pub fn spawn_enemy(&mut self, origin: Vec2, facing: Direction) -> Entity {
        world_setup::spawn_tank(&mut self.world, &mut self.roster, origin, facing, Faction::Enemy)
    }

    /// Add a projectile centred on `center`.
    pub fn spawn_projectile(&mut self, center: Vec2, direction: Direction, faction: Faction) -> Entity {
        world_setup::spawn_projectile(&mut self.world, &mut self.roster, center, direction, faction)
    }

    /// Apply damage directly to a tank. Returns whether it was destroyed by
    /// this call.
    pub fn damage_tank(&mut self, entity: Entity, amount: i32) -> bool {
        systems::projectile_hits::apply_damage(&mut self.world, entity, amount)
            .is_some_and(|(_, _, killed)| killed)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply_command(command);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Reload timers and projectile flight
        systems::advance::run(&mut self.world, &self.roster, dt);
        // 2. Enemy decisions
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.roster,
            &self.grid,
            &mut self.rng,
            &mut self.events,
        );
        // 3. Projectile impacts, scoring and respawn
        systems::projectile_hits::run(
            &mut self.world,
            &mut self.roster,
            &self.grid,
            &mut self.rng,
            &mut self.score,
            &mut self.events,
        );
        // 4. Tank-tank separation
        systems::separation::run(&mut self.world, &self.roster, &self.grid);
        // 5. Game over check, before purge
        self.check_game_over();
        // 6. Purge
        systems::cleanup::run(&mut self.world, &mut self.roster, &mut self.despawn_buffer);
        if self
            .player
            .is_some_and(|player| !self.world.contains(player))
        {
            self.player = None;
        }
    }

    fn check_game_over(&mut self) {
        let destroyed = self
            .player
            .map_or(true, |player| systems::is_destroyed(&self.world, player));
        if destroyed {
            self.state = SessionState::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            tracing::info!(score = self.score, tick = self.time.tick, "game over");
        }
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.roster,
            self.time,
            self.state,
            self.score,
            self.player(),
            events,
        )
    }
}

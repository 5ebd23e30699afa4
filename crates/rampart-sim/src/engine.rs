//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the tile map, the economy and
//! the wave director, processes player commands, runs all systems, and
//! produces `GameSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::{BTreeMap, VecDeque};

use hecs::{Entity, World};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use rampart_core::commands::{InputEvent, PlayerCommand};
use rampart_core::components::Tower;
use rampart_core::constants::*;
use rampart_core::enums::{GamePhase, TileKind, TowerKind};
use rampart_core::error::CommandError;
use rampart_core::events::GameEvent;
use rampart_core::registry;
use rampart_core::state::GameSnapshot;
use rampart_core::types::{SimTime, TileCoord, TowerId};
use rampart_grid::Grid;
use rampart_procgen::GenerateError;

use crate::economy::Economy;
use crate::systems;
use crate::systems::towers::CombatContext;
use crate::systems::wave_director::WaveDirector;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Time scale applied by the frame driver (1.0 = normal).
    pub time_scale: f64,
    pub cols: i32,
    pub rows: i32,
    /// World units per tile edge.
    pub tile_size: f32,
    pub starting_gold: u32,
    pub starting_lives: u32,
    /// Run the wave director. Off gives an empty sandbox map.
    pub spawn_waves: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            tile_size: TILE_SIZE,
            starting_gold: STARTING_GOLD,
            starting_lives: STARTING_LIVES,
            spawn_waves: true,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    grid: Grid,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    economy: Economy,
    waves: WaveDirector,
    /// Live towers in processing order.
    towers: BTreeMap<TowerId, Entity>,
    next_tower_id: u32,
    next_enemy_serial: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine on a freshly generated map.
    pub fn new(config: SimConfig) -> Result<Self, GenerateError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = rampart_procgen::generate(config.cols, config.rows, config.tile_size, &mut rng)?;
        Ok(Self::assemble(config, grid, rng))
    }

    /// Create an engine on a prepared map (hand-drawn levels, tests).
    pub fn with_grid(config: SimConfig, grid: Grid) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::assemble(config, grid, rng)
    }

    fn assemble(config: SimConfig, grid: Grid, rng: ChaCha8Rng) -> Self {
        info!(
            "new game: {}x{} map, start {}, end {}, seed {}",
            grid.cols(),
            grid.rows(),
            grid.start(),
            grid.end(),
            config.seed
        );
        Self {
            economy: Economy::new(config.starting_gold, config.starting_lives),
            config,
            world: World::new(),
            grid,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            waves: WaveDirector::default(),
            towers: BTreeMap::new(),
            next_tower_id: 0,
            next_enemy_serial: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
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
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
            self.check_game_over();
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.economy,
            &self.waves,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.config.time_scale
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn waves(&self) -> &WaveDirector {
        &self.waves
    }

    /// Entity of a live tower.
    pub fn tower_entity(&self, id: TowerId) -> Option<Entity> {
        self.towers.get(&id).copied()
    }

    /// Ids of all live towers in processing order.
    pub fn tower_ids(&self) -> impl Iterator<Item = TowerId> + '_ {
        self.towers.keys().copied()
    }

    /// Spawn an enemy with explicit stats at the map entrance.
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, speed: f32, health: u32) -> Entity {
        let profile = rampart_enemy_ai::profiles::EnemyProfile {
            speed,
            health,
            worth: rampart_enemy_ai::profiles::worth(health, speed),
            radius: ENEMY_RADIUS,
        };
        let serial = self.next_enemy_serial;
        self.next_enemy_serial += 1;
        world_setup::spawn_enemy(&mut self.world, &self.grid, serial, &profile)
    }

    /// Deal damage to an enemy outside of tower combat.
    #[cfg(test)]
    pub fn damage_test_enemy(&mut self, entity: Entity, amount: u32) {
        let mut targets = systems::combat::sample_targets(&self.world);
        if let Some(target) = targets.iter_mut().find(|t| t.entity == entity) {
            systems::combat::apply_damage(
                &self.world,
                target,
                amount,
                &mut self.rng,
                &mut self.economy,
                &mut self.events,
            );
        }
    }

    /// Translate a debounced pointer event into a command and apply it.
    ///
    /// Secondary release on an empty buildable tile builds a Bullet tower;
    /// on a tower it selects that tower. Primary release clears the selection.
    pub fn handle_input(&mut self, input: InputEvent) -> Result<(), CommandError> {
        match input {
            InputEvent::PrimaryReleased { .. } => self.apply_command(PlayerCommand::ClearSelection),
            InputEvent::SecondaryReleased { tile } => match self.grid.tower_at(tile) {
                Some(tower) => self.apply_command(PlayerCommand::SelectTower { tower }),
                None => self.apply_command(PlayerCommand::BuildTower {
                    kind: TowerKind::default(),
                    tile,
                }),
            },
        }
    }

    /// Process all queued commands. Rejected ones are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command.clone()) {
                debug!("rejected {command:?}: {err}");
            }
        }
    }

    /// Validate and apply a single player command immediately.
    ///
    /// Upgrades and sales are accepted here and carried out during the
    /// owning tower's next update.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::BuildTower { kind, tile } => {
                self.events.push(GameEvent::ButtonClick);
                self.build_tower(kind, tile).map(|_| ())
            }
            PlayerCommand::UpgradeTower { tower } => {
                self.events.push(GameEvent::ButtonClick);
                self.request_upgrade(tower)
            }
            PlayerCommand::SellTower { tower } => {
                self.events.push(GameEvent::ButtonClick);
                self.request_sale(tower)
            }
            PlayerCommand::SelectTower { tower } => {
                self.tower_entity(tower)
                    .ok_or(CommandError::UnknownTower(tower))?;
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    t.selected = t.id == tower;
                }
                Ok(())
            }
            PlayerCommand::ClearSelection => {
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    t.selected = false;
                }
                Ok(())
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
                Ok(())
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
                Ok(())
            }
            PlayerCommand::NewGame => {
                self.new_game();
                Ok(())
            }
        }
    }

    fn ensure_playing(&self) -> Result<(), CommandError> {
        if self.phase == GamePhase::GameOver {
            return Err(CommandError::GameNotActive);
        }
        Ok(())
    }

    fn build_tower(&mut self, kind: TowerKind, tile: TileCoord) -> Result<TowerId, CommandError> {
        self.ensure_playing()?;
        if self.grid.tile_kind(tile) != TileKind::Buildable {
            return Err(CommandError::NotBuildable(tile));
        }
        if self.grid.tower_at(tile).is_some() {
            return Err(CommandError::TileOccupied(tile));
        }
        self.economy
            .spend(registry::attributes(kind, 0).buy_cost)?;

        let id = TowerId(self.next_tower_id);
        self.next_tower_id += 1;
        let entity = world_setup::spawn_tower(&mut self.world, &self.grid, id, kind, tile);
        self.grid.place_tower(tile, id);
        self.towers.insert(id, entity);

        debug!("built {kind:?} tower {id} at {tile}");
        self.events.push(GameEvent::TowerBuilt { tower: id, kind });
        Ok(id)
    }

    fn request_upgrade(&mut self, id: TowerId) -> Result<(), CommandError> {
        self.ensure_playing()?;
        let entity = self.tower_entity(id).ok_or(CommandError::UnknownTower(id))?;
        let mut tower = self
            .world
            .get::<&mut Tower>(entity)
            .map_err(|_| CommandError::UnknownTower(id))?;

        let next = registry::metadata(tower.kind)
            .level(tower.level + 1)
            .ok_or(CommandError::MaxLevel(id))?;
        if !self.economy.can_afford(next.buy_cost) {
            return Err(CommandError::InsufficientGold {
                needed: next.buy_cost,
                available: self.economy.gold,
            });
        }
        tower.upgrade_requested = true;
        Ok(())
    }

    fn request_sale(&mut self, id: TowerId) -> Result<(), CommandError> {
        self.ensure_playing()?;
        let entity = self.tower_entity(id).ok_or(CommandError::UnknownTower(id))?;
        let mut tower = self
            .world
            .get::<&mut Tower>(entity)
            .map_err(|_| CommandError::UnknownTower(id))?;
        if tower.sold {
            return Err(CommandError::UnknownTower(id));
        }
        tower.sale_requested = true;
        Ok(())
    }

    /// Reset economy, waves and entities on a newly generated map.
    fn new_game(&mut self) {
        match rampart_procgen::generate(
            self.config.cols,
            self.config.rows,
            self.config.tile_size,
            &mut self.rng,
        ) {
            Ok(grid) => self.grid = grid,
            Err(err) => {
                warn!("keeping the current map: {err}");
                self.grid.clear_towers();
            }
        }
        self.world.clear();
        self.towers.clear();
        self.economy = Economy::new(self.config.starting_gold, self.config.starting_lives);
        self.waves = WaveDirector::default();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        self.next_tower_id = 0;
        self.next_enemy_serial = 0;
        self.command_queue.clear();
        info!(
            "new game: start {}, end {}",
            self.grid.start(),
            self.grid.end()
        );
    }

    fn check_game_over(&mut self) {
        if self.economy.is_defeated() {
            self.phase = GamePhase::GameOver;
            info!("game over on wave {}", self.waves.wave);
            self.events.push(GameEvent::GameOver {
                wave: self.waves.wave,
            });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt();

        // 1. Wave director
        if self.config.spawn_waves {
            systems::wave_director::run(
                &mut self.world,
                &self.grid,
                &mut self.waves,
                &mut self.next_enemy_serial,
                &mut self.events,
                dt,
            );
        }
        // 2. Enemy steering, status effects and movement
        systems::enemies::run(&mut self.world, &self.grid, dt);
        // 3. Towers: projectiles, targeting, firing, upgrade/sale requests
        systems::towers::run(
            &self.world,
            &self.towers,
            &self.grid,
            &mut CombatContext {
                rng: &mut self.rng,
                economy: &mut self.economy,
                events: &mut self.events,
            },
            dt,
        );
        // 4. Cleanup (arrived, dead, sold)
        systems::cleanup::run(
            &mut self.world,
            &mut self.grid,
            &mut self.towers,
            &mut self.economy,
            &mut self.events,
            &mut self.despawn_buffer,
        );
    }
}

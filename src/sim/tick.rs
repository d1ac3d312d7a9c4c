//! World assembly and the fixed-timestep tick
//!
//! One logical tick per rendered frame, fully synchronous:
//! 1. resolve hero movement intent
//! 2. advance the hero swing state machine
//! 3. advance every enemy's pursuit/attack
//! 4. settle hero respawn
//! 5. hand events back to the embedder
//!
//! Hero movement resolves before enemy updates, so enemy attacks always see
//! the hero's post-move position. `generate` is atomic from the tick loop's
//! perspective: a single synchronous clear-then-rebuild.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::consts::{HERO_ID, SIM_DT, TURN_SMOOTHING};
use crate::sim::collision::resolve_move;
use crate::sim::combat::{advance_swing, update_enemy, SwingState};
use crate::sim::entity::{Actor, DamageEvent, Enemy, EntityId, GameEvent, PlacedEntity};
use crate::sim::layout::{SpatialLayout, WorldBounds};
use crate::sim::scatter::{populate, ScatterReport};
use crate::turn_toward;

/// Input snapshot for a single tick (deterministic)
///
/// The embedder resolves camera-relative keys into a ground-plane direction
/// before the tick; the core never sees key events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Movement direction on the ground plane; need not be normalized
    pub move_dir: Vec2,
    /// Attack pressed this tick (edge, not level)
    pub attack: bool,
}

/// What one tick produced, for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// The hero's proposed move was accepted
    pub hero_moved: bool,
    /// Damage applied this tick, in order
    pub damage_events: Vec<DamageEvent>,
    /// Entities whose health crossed to zero this tick
    pub deaths: Vec<EntityId>,
    /// Full event stream, superset of the fields above
    pub events: Vec<GameEvent>,
}

/// The complete simulation: spatial layout, placed objects, actors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: WorldConfig,
    /// Seed of the current generation
    pub seed: u64,
    pub layout: SpatialLayout,
    pub obstacles: Vec<PlacedEntity>,
    pub enemies: Vec<Enemy>,
    pub hero: Actor,
    pub swing: SwingState,
    pub time_ticks: u64,
    /// Ticks until the dead hero respawns; `None` while alive
    respawn_timer: Option<u32>,
    next_id: EntityId,
    #[serde(skip, default = "default_rng")]
    rng: Pcg32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl World {
    /// Create an empty, ungenerated world. Call [`World::generate`] before
    /// ticking.
    pub fn new(config: WorldConfig) -> Self {
        let bounds = WorldBounds {
            width: config.world_width,
            height: config.world_height,
            edge_margin: config.edge_margin,
            safe_radius: config.safe_radius,
        };
        let layout = SpatialLayout::new(bounds, config.min_distance, config.enemy_buffer_zone);
        let hero = Self::spawn_hero(&config);
        Self {
            seed: 0,
            layout,
            obstacles: Vec::new(),
            enemies: Vec::new(),
            hero,
            swing: SwingState::Idle,
            time_ticks: 0,
            respawn_timer: None,
            next_id: HERO_ID + 1,
            rng: default_rng(),
            config,
        }
    }

    fn spawn_hero(config: &WorldConfig) -> Actor {
        Actor::new(
            HERO_ID,
            Vec3::new(0.0, 1.0, 0.0),
            config.hero_scale,
            config.hero_max_health,
            config.hero_attack_power,
            config.hero_speed,
        )
    }

    /// (Re)build the world: clear all prior state, reseed, scatter enemies
    /// then static objects. Fully replaces the previous generation.
    ///
    /// `None` draws a fresh seed from the ambient source.
    pub fn generate(&mut self, seed: Option<u64>) -> ScatterReport {
        let seed = seed.unwrap_or_else(rand::random);
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);

        self.layout.reset();
        self.obstacles.clear();
        self.enemies.clear();
        self.next_id = HERO_ID + 1;
        self.time_ticks = 0;
        self.swing = SwingState::Idle;
        self.respawn_timer = None;
        self.hero = Self::spawn_hero(&self.config);

        let mut events = Vec::new();
        let (obstacles, enemies, report) = populate(
            &self.config,
            &mut self.layout,
            &mut self.rng,
            &mut self.next_id,
            &mut events,
        );
        self.obstacles = obstacles;
        self.enemies = enemies;

        log::info!(
            "generated world seed={seed}: {}/{} objects placed (ratio {:.2})",
            report.placed(),
            report.requested(),
            report.ratio()
        );
        if report.ratio() < self.config.sparse_warn_ratio {
            log::warn!(
                "sparse generation: only {}/{} placed - check min_distance against world size",
                report.placed(),
                report.requested()
            );
        }
        report
    }

    /// Advance the simulation by one fixed timestep
    pub fn tick(&mut self, input: &TickInput) -> TickResult {
        self.time_ticks += 1;
        let mut events = Vec::new();
        let mut hero_moved = false;

        // 1. Hero movement intent
        if self.hero.alive && input.move_dir.length_squared() > 0.0 {
            let dir = input.move_dir.normalize();
            let velocity = Vec3::new(dir.x, 0.0, dir.y) * self.hero.speed * SIM_DT;
            let target_heading = velocity.x.atan2(velocity.z);
            self.hero.heading = turn_toward(self.hero.heading, target_heading, TURN_SMOOTHING);

            let proposed = self.hero.position + velocity;
            if resolve_move(
                &self.hero,
                proposed,
                self.layout.bounds(),
                &self.obstacles,
                &self.enemies,
            ) {
                self.hero.position = proposed;
                hero_moved = true;
            }
        }

        // 2. Hero attack state machine
        if self.hero.alive && input.attack {
            self.swing.try_start();
        }
        advance_swing(&mut self.swing, &self.hero, &mut self.enemies, &self.config, &mut events);

        // 3. Enemy pursuit and attacks, against the hero's post-move position
        let bounds = *self.layout.bounds();
        for enemy in &mut self.enemies {
            update_enemy(
                enemy,
                &mut self.hero,
                &bounds,
                &self.obstacles,
                &self.config,
                self.time_ticks,
                &mut events,
            );
        }

        // 4. Hero respawn countdown
        if !self.hero.alive {
            let remaining = self
                .respawn_timer
                .get_or_insert(self.config.respawn_delay_ticks);
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.hero.respawn_at(Vec3::new(0.0, 1.0, 0.0));
                self.respawn_timer = None;
                self.swing = SwingState::Idle;
                events.push(GameEvent::Respawn { entity: HERO_ID });
            }
        }

        let mut result = TickResult { hero_moved, ..TickResult::default() };
        for event in &events {
            match event {
                GameEvent::Damage(damage) => result.damage_events.push(*damage),
                GameEvent::Death { entity } => result.deaths.push(*entity),
                _ => {}
            }
        }
        result.events = events;
        result
    }

    /// Enemies that still take part in collision and combat
    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.actor.alive)
    }
}

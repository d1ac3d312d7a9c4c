//! Procedural world population
//!
//! Bounded rejection sampling: draw uniform-random candidates inside the
//! playfield and keep re-drawing until one clears the safe zone and the
//! separation constraints, or the attempt budget runs out. Exhaustion skips
//! that one object - target counts are a ceiling, not a guarantee.
//!
//! Enemies are placed before static objects so static placement can see and
//! avoid every enemy buffer zone. That ordering is policy, not an accident:
//! no obstacle may spawn inside an enemy's effective combat buffer.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::sim::entity::{Actor, Category, Enemy, EntityId, GameEvent, PlacedEntity};
use crate::sim::layout::SpatialLayout;

/// Requested vs accepted counts for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub requested: u32,
    pub placed: u32,
}

/// Placement outcome of a generation pass
///
/// A low placed/requested ratio is how bad configuration surfaces (say, a
/// `min_distance` too large for the world): a warning, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterReport {
    pub enemies: CategoryTally,
    pub trees: CategoryTally,
    pub rocks: CategoryTally,
    pub bushes: CategoryTally,
}

impl ScatterReport {
    pub fn tally(&self, category: Category) -> CategoryTally {
        match category {
            Category::Enemy => self.enemies,
            Category::Tree => self.trees,
            Category::Rock => self.rocks,
            Category::Bush => self.bushes,
        }
    }

    fn tally_mut(&mut self, category: Category) -> &mut CategoryTally {
        match category {
            Category::Enemy => &mut self.enemies,
            Category::Tree => &mut self.trees,
            Category::Rock => &mut self.rocks,
            Category::Bush => &mut self.bushes,
        }
    }

    pub fn requested(&self) -> u32 {
        self.enemies.requested + self.trees.requested + self.rocks.requested + self.bushes.requested
    }

    pub fn placed(&self) -> u32 {
        self.enemies.placed + self.trees.placed + self.rocks.placed + self.bushes.placed
    }

    /// Placed/requested across all categories; 1.0 when nothing was requested
    pub fn ratio(&self) -> f32 {
        if self.requested() == 0 {
            1.0
        } else {
            self.placed() as f32 / self.requested() as f32
        }
    }
}

/// Populate the world: enemies first, then trees, rocks and bushes.
///
/// Every accepted placement is recorded in `layout` and reported through a
/// [`GameEvent::ObjectPlaced`] event. Ids are allocated from `next_id`.
pub fn populate<R: Rng>(
    config: &WorldConfig,
    layout: &mut SpatialLayout,
    rng: &mut R,
    next_id: &mut EntityId,
    events: &mut Vec<GameEvent>,
) -> (Vec<PlacedEntity>, Vec<Enemy>, ScatterReport) {
    let mut obstacles = Vec::new();
    let mut enemies = Vec::new();
    let mut report = ScatterReport::default();

    for category in Category::PLACEMENT_ORDER {
        let count = config.count(category);
        let tally = report.tally_mut(category);
        tally.requested = count;

        for _ in 0..count {
            let Some((position, scale)) = sample_placement(config, layout, rng, category) else {
                log::debug!("scatter: no valid spot for {category:?} after {MAX_PLACEMENT_ATTEMPTS} attempts, skipping");
                continue;
            };

            let id = *next_id;
            *next_id += 1;
            layout.record(position, category);
            tally.placed += 1;
            events.push(GameEvent::ObjectPlaced { id, category });

            if category.is_static() {
                obstacles.push(PlacedEntity {
                    id,
                    category,
                    position,
                    scale,
                    base_radius: config.base_radius(category),
                });
            } else {
                let mut actor = Actor::new(
                    id,
                    position,
                    config.enemy_scale,
                    config.enemy_max_health,
                    config.enemy_attack_power,
                    config.enemy_speed,
                );
                // Face the spawn point, where the hero starts
                actor.heading = position.x.atan2(position.z) + std::f32::consts::PI;
                enemies.push(Enemy {
                    actor,
                    base_radius: config.enemy_radius,
                    attack_range: config.enemy_attack_range,
                    last_attack_tick: None,
                });
            }
        }
    }

    (obstacles, enemies, report)
}

/// Rejection-sample one candidate: position (and scale, for statics) within
/// the attempt budget, or `None` on exhaustion.
fn sample_placement<R: Rng>(
    config: &WorldConfig,
    layout: &SpatialLayout,
    rng: &mut R,
    category: Category,
) -> Option<(Vec3, f32)> {
    let bounds = *layout.bounds();
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let pos = Vec3::new(
            rng.random_range(-bounds.half_width()..=bounds.half_width()),
            0.0,
            rng.random_range(-bounds.half_height()..=bounds.half_height()),
        );
        if layout.is_in_safe_zone(pos) {
            continue;
        }
        if category.is_static() {
            let scale = rng.random_range(config.static_scale_min..=config.static_scale_max);
            if layout.is_valid_static_placement(pos, scale) {
                return Some((pos, scale));
            }
        } else if layout.is_valid_enemy_placement(pos) {
            return Some((pos, config.enemy_scale));
        }
    }
    None
}

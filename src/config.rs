//! World generation and combat tuning
//!
//! Every knob the simulation reads lives here; nothing is hard-coded in the
//! sim modules. Defaults match the final balance pass of the prototype.

use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT;
use crate::sim::entity::Category;

/// Complete tuning for a world: bounds, scatter densities, actor stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    // === World bounds ===
    /// Terrain extent along x
    pub world_width: f32,
    /// Terrain extent along z
    pub world_height: f32,
    /// Keep-out border inside the terrain edge
    pub edge_margin: f32,
    /// Circular no-spawn zone around the origin (hero spawn)
    pub safe_radius: f32,

    // === Scatter ===
    /// Minimum separation between static objects, scaled per object
    pub min_distance: f32,
    /// Fixed keep-out around every enemy; doubles as the aggro radius
    pub enemy_buffer_zone: f32,
    /// Target object count per category (a ceiling, not a guarantee)
    pub tree_count: u32,
    pub rock_count: u32,
    pub bush_count: u32,
    pub enemy_count: u32,
    /// Unscaled collision radius per category
    pub tree_radius: f32,
    pub rock_radius: f32,
    pub bush_radius: f32,
    pub enemy_radius: f32,
    /// Uniform-random scale range for static objects
    pub static_scale_min: f32,
    pub static_scale_max: f32,
    /// Fixed scale for enemies
    pub enemy_scale: f32,
    /// Placed/requested ratio below which generation logs a warning
    pub sparse_warn_ratio: f32,

    // === Hero ===
    pub hero_max_health: i32,
    pub hero_attack_power: i32,
    /// Movement speed in world units per second
    pub hero_speed: f32,
    pub hero_scale: f32,
    /// Weapon tip distance ahead of the hero along its heading
    pub weapon_reach: f32,
    /// Collision radius of the weapon tip during a swing
    pub weapon_radius: f32,
    /// Swing duration in ticks (progress advances 0 to 1 over this many)
    pub swing_ticks: u32,
    /// Ticks between hero death and respawn at the origin
    pub respawn_delay_ticks: u32,

    // === Enemies ===
    pub enemy_max_health: i32,
    pub enemy_attack_power: i32,
    /// Striking distance for an enemy attack
    pub enemy_attack_range: f32,
    /// Seconds between enemy attacks
    pub enemy_attack_cooldown: f32,
    /// Pursuit speed in world units per second
    pub enemy_speed: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_width: 100.0,
            world_height: 100.0,
            edge_margin: 2.0,
            safe_radius: 10.0,

            min_distance: 3.0,
            enemy_buffer_zone: 10.0,
            tree_count: 20,
            rock_count: 30,
            bush_count: 15,
            enemy_count: 5,
            tree_radius: 0.9,
            rock_radius: 0.75,
            bush_radius: 0.45,
            enemy_radius: 2.8,
            static_scale_min: 0.7,
            static_scale_max: 1.5,
            enemy_scale: 1.5,
            sparse_warn_ratio: 0.5,

            hero_max_health: 100,
            hero_attack_power: 10,
            hero_speed: 3.0,
            hero_scale: 1.0,
            weapon_reach: 1.8,
            weapon_radius: 1.5,
            swing_ticks: 20,
            respawn_delay_ticks: 180,

            enemy_max_health: 300,
            enemy_attack_power: 15,
            enemy_attack_range: 6.0,
            enemy_attack_cooldown: 1.5,
            enemy_speed: 2.0,
        }
    }
}

impl WorldConfig {
    /// Unscaled collision radius for a category
    pub fn base_radius(&self, category: Category) -> f32 {
        match category {
            Category::Tree => self.tree_radius,
            Category::Rock => self.rock_radius,
            Category::Bush => self.bush_radius,
            Category::Enemy => self.enemy_radius,
        }
    }

    /// Target placement count for a category
    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Tree => self.tree_count,
            Category::Rock => self.rock_count,
            Category::Bush => self.bush_count,
            Category::Enemy => self.enemy_count,
        }
    }

    /// Enemy attack cooldown converted to whole ticks
    pub fn enemy_cooldown_ticks(&self) -> u64 {
        (self.enemy_attack_cooldown / SIM_DT).round() as u64
    }

    /// Parse a config from JSON (embedder-supplied tuning files)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

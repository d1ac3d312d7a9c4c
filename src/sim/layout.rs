//! Bounded 2D placement grid
//!
//! Answers "is this candidate position acceptable?" against three constraint
//! classes: world bounds, proximity to previously placed static objects
//! (scaled by object size), and a fixed buffer around enemies.
//!
//! Scans are O(n) per candidate against all prior placements of the class.
//! That is fine at the hundreds-of-objects scale this world runs at; a grid
//! index could be slotted in behind the same contract if it ever is not.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::flat_distance;
use crate::sim::entity::Category;

/// Rectangular playfield with a keep-out border and a spawn safe zone
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    /// Keep-out border inside the terrain edge
    pub edge_margin: f32,
    /// Circular keep-out around the origin where the hero spawns
    pub safe_radius: f32,
}

impl WorldBounds {
    /// Usable half-extent along x (width/2 minus the edge margin)
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0 - self.edge_margin
    }

    /// Usable half-extent along z
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0 - self.edge_margin
    }

    /// Whether a position is inside the playfield (margin included)
    pub fn contains(&self, pos: Vec3) -> bool {
        pos.x.abs() <= self.half_width() && pos.z.abs() <= self.half_height()
    }

    /// Whether a position falls inside the spawn safe zone
    pub fn in_safe_zone(&self, pos: Vec3) -> bool {
        flat_distance(pos, Vec3::ZERO) < self.safe_radius
    }
}

/// Occupancy tracker for world generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialLayout {
    bounds: WorldBounds,
    /// Minimum separation between static objects, scaled by candidate size
    min_distance: f32,
    /// Fixed keep-out distance around every enemy
    enemy_buffer_zone: f32,
    static_positions: Vec<Vec3>,
    enemy_positions: Vec<Vec3>,
}

impl SpatialLayout {
    pub fn new(bounds: WorldBounds, min_distance: f32, enemy_buffer_zone: f32) -> Self {
        Self {
            bounds,
            min_distance,
            enemy_buffer_zone,
            static_positions: Vec::new(),
            enemy_positions: Vec::new(),
        }
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    pub fn is_within_bounds(&self, pos: Vec3) -> bool {
        self.bounds.contains(pos)
    }

    pub fn is_in_safe_zone(&self, pos: Vec3) -> bool {
        self.bounds.in_safe_zone(pos)
    }

    /// Valid iff the candidate keeps `min_distance * scale` from every prior
    /// static placement and `enemy_buffer_zone` from every enemy.
    pub fn is_valid_static_placement(&self, pos: Vec3, scale: f32) -> bool {
        let min_dist = self.min_distance * scale;
        self.static_positions
            .iter()
            .all(|&p| flat_distance(pos, p) >= min_dist)
            && self
                .enemy_positions
                .iter()
                .all(|&p| flat_distance(pos, p) >= self.enemy_buffer_zone)
    }

    /// Valid iff the candidate keeps the buffer zone from every prior enemy
    pub fn is_valid_enemy_placement(&self, pos: Vec3) -> bool {
        self.enemy_positions
            .iter()
            .all(|&p| flat_distance(pos, p) >= self.enemy_buffer_zone)
    }

    /// Record an accepted placement in the relevant class
    pub fn record(&mut self, pos: Vec3, category: Category) {
        if category.is_static() {
            self.static_positions.push(pos);
        } else {
            self.enemy_positions.push(pos);
        }
    }

    /// Clear all recorded positions (world regeneration)
    pub fn reset(&mut self) {
        self.static_positions.clear();
        self.enemy_positions.clear();
    }

    pub fn static_count(&self) -> usize {
        self.static_positions.len()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemy_positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> WorldBounds {
        WorldBounds { width: 100.0, height: 80.0, edge_margin: 2.0, safe_radius: 10.0 }
    }

    fn layout() -> SpatialLayout {
        SpatialLayout::new(bounds(), 3.0, 10.0)
    }

    #[test]
    fn test_bounds_respect_edge_margin() {
        let b = bounds();
        assert!(b.contains(Vec3::new(47.9, 0.0, 0.0)));
        assert!(!b.contains(Vec3::new(48.1, 0.0, 0.0)));
        assert!(b.contains(Vec3::new(0.0, 0.0, -37.9)));
        assert!(!b.contains(Vec3::new(0.0, 0.0, -38.1)));
    }

    #[test]
    fn test_safe_zone_is_circular() {
        let b = bounds();
        assert!(b.in_safe_zone(Vec3::new(7.0, 0.0, 7.0)));
        assert!(!b.in_safe_zone(Vec3::new(8.0, 0.0, 8.0)));
    }

    #[test]
    fn test_static_placement_scales_min_distance() {
        let mut l = layout();
        l.record(Vec3::new(20.0, 0.0, 0.0), Category::Tree);
        // min_distance 3.0; candidate at distance 3.5
        let candidate = Vec3::new(23.5, 0.0, 0.0);
        assert!(l.is_valid_static_placement(candidate, 1.0));
        // A bigger candidate needs 3.0 * 1.5 = 4.5
        assert!(!l.is_valid_static_placement(candidate, 1.5));
    }

    #[test]
    fn test_static_placement_avoids_enemy_buffer() {
        let mut l = layout();
        l.record(Vec3::new(0.0, 0.0, 30.0), Category::Enemy);
        assert!(!l.is_valid_static_placement(Vec3::new(0.0, 0.0, 21.0), 1.0));
        assert!(l.is_valid_static_placement(Vec3::new(0.0, 0.0, 20.0), 1.0));
    }

    #[test]
    fn test_enemy_placement_buffer() {
        let mut l = layout();
        l.record(Vec3::new(0.0, 0.0, 0.0), Category::Enemy);
        assert!(!l.is_valid_enemy_placement(Vec3::new(9.0, 0.0, 0.0)));
        assert!(l.is_valid_enemy_placement(Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut l = layout();
        l.record(Vec3::new(5.0, 0.0, 5.0), Category::Rock);
        l.record(Vec3::new(15.0, 0.0, 5.0), Category::Enemy);
        l.reset();
        assert_eq!(l.static_count(), 0);
        assert_eq!(l.enemy_count(), 0);
        assert!(l.is_valid_static_placement(Vec3::new(5.0, 0.0, 5.0), 1.0));
    }
}

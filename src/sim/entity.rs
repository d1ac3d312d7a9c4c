//! Entities and events
//!
//! Plain data records only - actors and placed objects never reference scene
//! graph or render types. The presentation layer keeps its own adapters keyed
//! by [`EntityId`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stable identifier for anything that can take part in combat or collision
pub type EntityId = u32;

/// What a scatter-placed object is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Tree,
    Rock,
    Bush,
    Enemy,
}

impl Category {
    /// Static obstacles never move after placement
    pub fn is_static(self) -> bool {
        !matches!(self, Category::Enemy)
    }

    /// Placement order for a generation pass: enemies first, so statics can
    /// see and avoid every enemy buffer zone.
    pub const PLACEMENT_ORDER: [Category; 4] =
        [Category::Enemy, Category::Tree, Category::Rock, Category::Bush];
}

/// A static object scattered into the world at generation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedEntity {
    pub id: EntityId,
    pub category: Category,
    /// Immutable after placement (y is the render offset)
    pub position: Vec3,
    /// Uniform scale factor drawn at placement
    pub scale: f32,
    /// Unscaled collision radius for the category
    pub base_radius: f32,
}

impl PlacedEntity {
    /// Effective collision radius: base radius scaled by this instance
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        self.base_radius * self.scale
    }
}

/// A named collision sphere, offset in actor-local units
#[derive(Debug, Clone, Copy)]
pub struct BodyPart {
    pub name: &'static str,
    pub offset: Vec3,
    pub radius: f32,
}

/// Collision spheres for a humanoid actor: torso plus shoulders and hands.
/// The arms reach wider than the torso, so a single bounding sphere would
/// either over- or under-block movement near obstacles.
pub const BODY_PARTS: [BodyPart; 5] = [
    BodyPart { name: "body", offset: Vec3::new(0.0, 0.0, 0.0), radius: 0.5 },
    BodyPart { name: "shoulder_l", offset: Vec3::new(-0.7, 0.4, 0.0), radius: 0.25 },
    BodyPart { name: "shoulder_r", offset: Vec3::new(0.7, 0.4, 0.0), radius: 0.25 },
    BodyPart { name: "hand_l", offset: Vec3::new(-0.7, -0.1, 0.0), radius: 0.15 },
    BodyPart { name: "hand_r", offset: Vec3::new(0.7, -0.1, 0.0), radius: 0.15 },
];

/// A hero or enemy: mutable position, health, combat stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: EntityId,
    pub position: Vec3,
    /// Yaw in radians; 0 faces +Z
    pub heading: f32,
    pub scale: f32,
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
    pub speed: f32,
    pub alive: bool,
}

impl Actor {
    pub fn new(id: EntityId, position: Vec3, scale: f32, max_health: i32, attack_power: i32, speed: f32) -> Self {
        Self {
            id,
            position,
            heading: 0.0,
            scale,
            health: max_health,
            max_health,
            attack_power,
            speed,
            alive: true,
        }
    }

    /// Apply damage, clamping health at 0. A dead actor ignores damage.
    ///
    /// Returns `true` when this call crossed the actor into death.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            self.alive = false;
            return true;
        }
        false
    }

    /// Reset health and position (hero respawn)
    pub fn respawn_at(&mut self, position: Vec3) {
        self.position = position;
        self.health = self.max_health;
        self.alive = true;
    }

    /// World-space center of a body part if the actor stood at `at`
    #[inline]
    pub fn part_position(&self, at: Vec3, part: &BodyPart) -> Vec3 {
        at + part.offset * self.scale
    }

    /// Collision radius of a body part on this actor
    #[inline]
    pub fn part_radius(&self, part: &BodyPart) -> f32 {
        part.radius * self.scale
    }
}

/// An enemy: an actor plus its category radius and attack bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub actor: Actor,
    /// Unscaled collision radius (category base radius)
    pub base_radius: f32,
    /// Striking distance
    pub attack_range: f32,
    /// Tick of the last landed attack; `None` before the first
    pub last_attack_tick: Option<u64>,
}

impl Enemy {
    /// Effective body radius used for hit detection against the weapon
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        self.base_radius * self.actor.scale
    }
}

/// Damage applied to a target, for health bars and hit feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageEvent {
    pub source: EntityId,
    pub target: EntityId,
    pub amount: i32,
    /// Target health after clamping
    pub health_after: i32,
}

/// Everything the simulation reports to its collaborators.
/// The core works fine if nobody consumes these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The scatterer accepted a placement
    ObjectPlaced { id: EntityId, category: Category },
    /// Damage was applied
    Damage(DamageEvent),
    /// Health crossed to zero
    Death { entity: EntityId },
    /// The hero respawned at the origin after the respawn delay
    Respawn { entity: EntityId },
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod entity;
pub mod layout;
pub mod scatter;
pub mod tick;

pub use collision::{resolve_enemy_move, resolve_move};
pub use combat::SwingState;
pub use entity::{Actor, Category, DamageEvent, Enemy, EntityId, GameEvent, PlacedEntity};
pub use layout::{SpatialLayout, WorldBounds};
pub use scatter::ScatterReport;
pub use tick::{TickInput, TickResult, World};

//! Wildglade - simulation core for a 3D action-adventure prototype
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world scatter, collision, combat)
//! - `config`: Data-driven tuning for world generation and actor stats
//!
//! Rendering, camera control, asset construction and UI all live in the
//! embedding presentation layer. This crate only deals in positions, radii
//! and events: the embedder feeds a [`sim::TickInput`] snapshot each frame
//! and consumes the resulting [`sim::TickResult`].

pub mod config;
pub mod sim;

pub use config::WorldConfig;
pub use sim::{ScatterReport, TickInput, TickResult, World};

use glam::{Vec2, Vec3};

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep (one tick per rendered frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Attempt ceiling for rejection-sampling placement
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;
    /// Melee swing hit window as (lower, upper) progress bounds, exclusive
    pub const SWING_HIT_WINDOW: (f32, f32) = (0.3, 0.7);
    /// Per-tick heading smoothing factor (matches the render-side slerp)
    pub const TURN_SMOOTHING: f32 = 0.2;
    /// Entity id reserved for the hero
    pub const HERO_ID: u32 = 0;
}

/// Project a world position onto the ground plane
#[inline]
pub fn flatten(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Distance between two points on the ground (XZ) plane
///
/// The y component of a position is a render offset only and never enters
/// collision or range math.
#[inline]
pub fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    flatten(a).distance(flatten(b))
}

/// Unit forward vector on the ground plane for a yaw heading (radians)
///
/// Heading 0 faces +Z; headings come from `atan2(x, z)` of a direction.
#[inline]
pub fn heading_to_forward(heading: f32) -> Vec3 {
    Vec3::new(heading.sin(), 0.0, heading.cos())
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Smoothly turn a heading toward a target, taking the short way around
pub fn turn_toward(current: f32, target: f32, factor: f32) -> f32 {
    let delta = normalize_angle(target - current);
    normalize_angle(current + delta * factor)
}

//! Ballpit - a deterministic 2D ball-drop physics kernel
//!
//! Core modules:
//! - `config`: World configuration with fail-fast validation
//! - `sim`: Deterministic simulation (integration, collisions, containment)
//!
//! The crate is library-shaped: an external harness owns the frame loop,
//! input and rendering, and drives the kernel one `step` at a time through a
//! [`sim::World`].

pub mod config;
pub mod sim;

pub use config::{ConfigError, WorldConfig};
pub use sim::{Ball, BallId, Wall, WallId, World, step};

use glam::Vec2;

/// Simulation defaults, in field pixels and ticks
pub mod consts {
    /// Downward gravity added to a ball's accumulator each tick (px/tick²)
    pub const GRAVITY: f32 = 0.3;
    /// Fraction of closing speed returned after a bounce
    pub const RESTITUTION: f32 = 0.8;
    /// Per-tick velocity damping factor (velocity scales by 1 - FRICTION)
    pub const FRICTION: f32 = 0.05;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;

    /// Position quantum for opt-in snapping (1/1000 px)
    pub const SNAP_QUANTUM: f32 = 1.0 / 1000.0;
}

/// Unit-length left-hand perpendicular of `v` (the normal of a surface
/// running along `v`), or zero when `v` is zero.
#[inline]
pub fn left_normal(v: Vec2) -> Vec2 {
    v.perp().normalize_or_zero()
}

/// Snap a coordinate to the nearest multiple of `quantum`.
#[inline]
pub fn snap(value: f32, quantum: f32) -> f32 {
    (value / quantum).round() * quantum
}

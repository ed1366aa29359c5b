//! World configuration and fail-fast validation
//!
//! All tunables are fixed at world construction. Invalid values are rejected
//! before they can enter simulation state; once a world exists, stepping it
//! never fails.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Rejected configuration or registration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("gravity must be finite and non-negative, got {0}")]
    Gravity(f32),
    #[error("restitution must be in [0, 1], got {0}")]
    Restitution(f32),
    #[error("friction must be in [0, 1], got {0}")]
    Friction(f32),
    #[error("field dimensions must be finite and positive, got {width}x{height}")]
    Bounds { width: f32, height: f32 },
    #[error("snap quantum must be finite and positive, got {0}")]
    SnapQuantum(f32),
    #[error("ball radius must be finite and positive, got {0}")]
    BallRadius(f32),
    #[error("wall endpoints must be finite, got ({x1}, {y1})-({x2}, {y2})")]
    WallEndpoints { x1: f32, y1: f32, x2: f32, y2: f32 },
}

/// Simulation tunables, in field pixels and ticks.
///
/// Defaults give an 800x640 box with gravity 0.3, restitution 0.8 and
/// friction 0.05.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Downward acceleration added to every ball each tick (px/tick²)
    pub gravity: f32,
    /// Fraction of closing speed returned as separating speed after a bounce
    pub restitution: f32,
    /// Per-tick velocity damping; velocity scales by `1 - friction`
    pub friction: f32,
    /// Field width; balls are clamped to `[radius, width - radius]` in x
    pub width: f32,
    /// Field height; balls are clamped below `height - radius` in y.
    /// The top edge is open: balls may travel above y = 0 and fall back.
    pub height: f32,
    /// Optional position quantum; when set, positions are snapped to the
    /// nearest multiple after each step
    pub snap: Option<f32>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            restitution: consts::RESTITUTION,
            friction: consts::FRICTION,
            width: consts::FIELD_WIDTH,
            height: consts::FIELD_HEIGHT,
            snap: None,
        }
    }
}

impl WorldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_snap(mut self, quantum: f32) -> Self {
        self.snap = Some(quantum);
        self
    }

    /// Check every field against its legal range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if !self.restitution.is_finite() || !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Restitution(self.restitution));
        }
        if !self.friction.is_finite() || !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(ConfigError::Bounds {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(q) = self.snap {
            if !q.is_finite() || q <= 0.0 {
                return Err(ConfigError::SnapQuantum(q));
            }
        }
        Ok(())
    }
}

//! Simulation state and core types
//!
//! All state the kernel reads or mutates lives here: the [`World`] aggregate
//! owns every ball and wall, hands out stable id handles, and is the only
//! construction path (no entity registers itself as a side effect).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WorldConfig};
use crate::left_normal;

/// Stable handle to a ball in a [`World`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BallId(pub u32);

/// Stable handle to a wall in a [`World`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallId(pub u32);

/// A simulated circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: BallId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Single-tick force accumulator; cleared by [`Ball::integrate`]
    pub acc: Vec2,
    pub radius: f32,
}

impl Ball {
    fn new(id: BallId, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            radius,
        }
    }

    /// Add into the per-tick accumulator. Takes effect on the next
    /// integration and is cleared by it.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    /// Advance this ball one tick.
    ///
    /// Order is a contract: gravity joins the accumulator, the accumulator
    /// folds into velocity and is cleared, damping scales the post-gravity
    /// velocity, and only then does the ball translate.
    pub fn integrate(&mut self, config: &WorldConfig) {
        self.acc.y += config.gravity;

        self.vel += self.acc;
        self.acc = Vec2::ZERO;

        self.vel *= 1.0 - config.friction;

        self.pos += self.vel;
    }

    /// Clamp this ball into the field after collision resolution.
    ///
    /// Only the left, right and bottom edges are enforced; the top is open
    /// and balls above y = 0 fall back in on their own. Each axis corrects
    /// independently, reflecting the violating velocity component scaled by
    /// restitution.
    pub fn clamp_to_field(&mut self, config: &WorldConfig) {
        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x * config.restitution;
        }
        if self.pos.x + self.radius > config.width {
            self.pos.x = config.width - self.radius;
            self.vel.x = -self.vel.x * config.restitution;
        }
        if self.pos.y + self.radius > config.height {
            self.pos.y = config.height - self.radius;
            self.vel.y = -self.vel.y * config.restitution;
        }
    }
}

/// A fixed line-segment wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: WallId,
    pub start: Vec2,
    pub end: Vec2,
}

impl Wall {
    /// Unit direction from start to end, or zero for a degenerate segment
    #[inline]
    pub fn unit_dir(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }

    /// Unit left-hand normal of the segment (for consumers drawing or
    /// probing the surface; collision response derives its own normal from
    /// the contact point)
    #[inline]
    pub fn normal(&self) -> Vec2 {
        left_normal(self.end - self.start)
    }
}

/// The simulation world: configuration plus insertion-ordered balls and walls.
///
/// Deterministic and serializable: stepping two identical worlds identically
/// yields bitwise-identical state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub(crate) config: WorldConfig,
    pub(crate) balls: Vec<Ball>,
    pub(crate) walls: Vec<Wall>,
    pub(crate) time_ticks: u64,
    next_id: u32,
}

impl World {
    /// Create an empty world, rejecting invalid configuration up front.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            balls: Vec::new(),
            walls: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        })
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register a new ball at rest at `(x, y)`.
    pub fn spawn_ball(&mut self, x: f32, y: f32, radius: f32) -> Result<BallId, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::BallRadius(radius));
        }
        let id = BallId(self.next_entity_id());
        self.balls.push(Ball::new(id, Vec2::new(x, y), radius));
        log::debug!("spawned ball {id:?} at ({x}, {y}) r={radius}");
        Ok(id)
    }

    /// Register an immutable wall segment from `(x1, y1)` to `(x2, y2)`.
    pub fn add_wall(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<WallId, ConfigError> {
        if ![x1, y1, x2, y2].iter().all(|c| c.is_finite()) {
            return Err(ConfigError::WallEndpoints { x1, y1, x2, y2 });
        }
        let id = WallId(self.next_entity_id());
        self.walls.push(Wall {
            id,
            start: Vec2::new(x1, y1),
            end: Vec2::new(x2, y2),
        });
        log::debug!("added wall {id:?} ({x1}, {y1})-({x2}, {y2})");
        Ok(id)
    }

    /// Add into a ball's per-tick force accumulator. Returns false if the
    /// handle is unknown.
    pub fn apply_force(&mut self, id: BallId, force: Vec2) -> bool {
        match self.balls.iter_mut().find(|b| b.id == id) {
            Some(ball) => {
                ball.apply_force(force);
                true
            }
            None => false,
        }
    }

    /// All balls, in insertion order
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// All walls, in insertion order
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Look up one ball by handle
    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    /// Look up one wall by handle
    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Ticks stepped since construction
    pub fn tick_count(&self) -> u64 {
        self.time_ticks
    }
}

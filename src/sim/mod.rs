//! Deterministic simulation module
//!
//! The whole kernel lives here. It must stay pure and deterministic:
//! - Fixed implicit-unit timestep only
//! - Stable iteration order (insertion order)
//! - No I/O, no clock, no rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    ball_wall_overlap, balls_overlap, bounce_ball_off_wall, bounce_balls, closest_point_on_wall,
    push_ball_off_wall, separate_balls,
};
pub use state::{Ball, BallId, Wall, WallId, World};
pub use tick::step;

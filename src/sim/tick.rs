//! Fixed-step world advancement
//!
//! `step` advances the whole world one tick. The phase ordering is part of
//! the observable contract and must not be reordered:
//!
//! 1. integrate every ball (insertion order)
//! 2. resolve every unordered ball pair, single pass
//! 3. resolve every (ball, wall) pair
//! 4. clamp every ball into the field
//!
//! The step is an implicit unit of time: per-tick quantities (gravity,
//! velocities) are applied whole, exactly once per call. The caller owns the
//! cadence; the kernel owns no loop and no timer.

use super::collision::{
    ball_wall_overlap, balls_overlap, bounce_ball_off_wall, bounce_balls, push_ball_off_wall,
    separate_balls,
};
use super::state::World;
use crate::snap;

/// Advance the world by one tick. Never fails.
pub fn step(world: &mut World) {
    for ball in &mut world.balls {
        ball.integrate(&world.config);
    }

    // Each unordered pair {i, j} with i < j in insertion order is tested
    // exactly once. Detection runs once per pair; positions are corrected
    // first so the impulse normal comes from the separated centers.
    let restitution = world.config.restitution;
    let ball_count = world.balls.len();
    for i in 0..ball_count {
        for j in (i + 1)..ball_count {
            let (head, tail) = world.balls.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if balls_overlap(a, b) {
                separate_balls(a, b);
                bounce_balls(a, b, restitution);
            }
        }
    }

    for ball in &mut world.balls {
        for wall in &world.walls {
            if ball_wall_overlap(ball, wall) {
                push_ball_off_wall(ball, wall);
                bounce_ball_off_wall(ball, wall, restitution);
            }
        }
    }

    for ball in &mut world.balls {
        ball.clamp_to_field(&world.config);
    }

    if let Some(quantum) = world.config.snap {
        for ball in &mut world.balls {
            ball.pos.x = snap(ball.pos.x, quantum);
            ball.pos.y = snap(ball.pos.y, quantum);
        }
    }

    world.time_ticks += 1;
}

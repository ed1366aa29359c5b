//! Collision detection and response for balls and walls
//!
//! Detection, positional correction and velocity response are separate
//! passes so a caller (the tick loop) can sequence them: overlapping pairs
//! are first pushed apart, then exchange a restitution-scaled impulse along
//! the contact normal recomputed from the corrected positions.
//!
//! Degenerate contacts (coincident ball centers, a ball centered exactly on
//! a wall) normalize to the zero vector, which makes every correction here a
//! no-op rather than an error or a NaN.

use glam::Vec2;

use super::state::{Ball, Wall};

/// Closest point on `wall` to `point`.
///
/// Projects the point onto the segment's carrying line and clamps to the
/// endpoints: a point "before" the start maps to the start, one "past" the
/// end maps to the end.
pub fn closest_point_on_wall(point: Vec2, wall: &Wall) -> Vec2 {
    let unit = wall.unit_dir();

    let to_start = wall.start - point;
    if unit.dot(to_start) > 0.0 {
        return wall.start;
    }

    let past_end = point - wall.end;
    if unit.dot(past_end) > 0.0 {
        return wall.end;
    }

    wall.start - unit * unit.dot(to_start)
}

/// Ball-ball overlap test. Exact tangency counts as touching.
#[inline]
pub fn balls_overlap(a: &Ball, b: &Ball) -> bool {
    a.radius + b.radius >= (b.pos - a.pos).length()
}

/// Ball-wall overlap test. Exact tangency counts as touching.
#[inline]
pub fn ball_wall_overlap(ball: &Ball, wall: &Wall) -> bool {
    (closest_point_on_wall(ball.pos, wall) - ball.pos).length() <= ball.radius
}

/// Push two overlapping balls apart, each by half the penetration depth,
/// along the line between their centers.
pub fn separate_balls(a: &mut Ball, b: &mut Ball) {
    let between = a.pos - b.pos;
    let depth = a.radius + b.radius - between.length();
    let correction = between.normalize_or_zero() * (depth / 2.0);
    a.pos += correction;
    b.pos -= correction;
}

/// Exchange a restitution-scaled impulse between two balls along the
/// center-to-center normal. Balls carry equal implicit mass; the contact is
/// frictionless.
pub fn bounce_balls(a: &mut Ball, b: &mut Ball, restitution: f32) {
    let normal = (a.pos - b.pos).normalize_or_zero();
    let sep_vel = (a.vel - b.vel).dot(normal);
    let new_sep_vel = -sep_vel * restitution;
    let impulse = normal * new_sep_vel;
    a.vel += impulse;
    b.vel -= impulse;
}

/// Push a penetrating ball out of a wall, along the line from the contact
/// point to the ball center, until it just touches.
pub fn push_ball_off_wall(ball: &mut Ball, wall: &Wall) {
    let from_contact = ball.pos - closest_point_on_wall(ball.pos, wall);
    let correction = from_contact.normalize_or_zero() * (ball.radius - from_contact.length());
    ball.pos += correction;
}

/// Reflect the ball's velocity component along the contact normal, scaled by
/// restitution. Walls are immovable; the ball absorbs the whole correction.
pub fn bounce_ball_off_wall(ball: &mut Ball, wall: &Wall, restitution: f32) {
    let normal = (ball.pos - closest_point_on_wall(ball.pos, wall)).normalize_or_zero();
    let sep_vel = ball.vel.dot(normal);
    let new_sep_vel = -sep_vel * restitution;
    ball.vel += normal * -(sep_vel - new_sep_vel);
}

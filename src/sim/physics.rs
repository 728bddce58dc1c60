//! Field physics: integration, gravity, boundary and crossbar reflection
//!
//! Everything here corrects by clamping. A ball can never end a tick outside
//! the field, and a grounded player always has feet exactly on the ground
//! line.

use crate::consts::*;

use super::state::{Ball, Player};

/// Advance one player: integrate, then gravity while airborne or ground snap
pub fn step_player(player: &mut Player) {
    player.pos += player.vel;

    if player.pos.y < GROUND_Y - player.height {
        player.vel.y += GRAVITY;
        player.on_ground = false;
    } else {
        // Feet land exactly on the ground line
        player.pos.y = GROUND_Y - player.height;
        player.vel.y = 0.0;
        player.on_ground = true;
        player.hit_ceiling = false;
    }
}

/// Advance one ball body: integrate, gravity, then every boundary in a fixed
/// order (walls, ground, ceiling, left bar, right bar). Clones go through the
/// same function.
pub fn step_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
    ball.vel.y += GRAVITY;

    // Side walls
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x * BALL_BOUNCE;
    }
    if ball.pos.x + ball.radius > FIELD_WIDTH {
        ball.pos.x = FIELD_WIDTH - ball.radius;
        ball.vel.x = -ball.vel.x * BALL_BOUNCE;
    }

    // Ground, with extra horizontal drag
    if ball.pos.y + ball.radius > GROUND_Y {
        ball.pos.y = GROUND_Y - ball.radius;
        ball.vel.y = -ball.vel.y * BALL_BOUNCE;
        ball.vel.x *= BALL_GROUND_DRAG;
    }

    // Ceiling
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y * BALL_BOUNCE;
    }

    // Crossbars, left goal then right goal
    crossbar_bounce(ball, 0.0, GOAL_WIDTH);
    crossbar_bounce(ball, FIELD_WIDTH - GOAL_WIDTH, FIELD_WIDTH);
}

/// Reflect off the bar spanning `[mouth_min_x, mouth_max_x]` at `CROSSBAR_Y`.
/// The ball is pushed to whichever face its center is on.
fn crossbar_bounce(ball: &mut Ball, mouth_min_x: f32, mouth_max_x: f32) {
    let reach = ball.radius + CROSSBAR_THICKNESS / 2.0;
    let overlaps_mouth =
        ball.pos.x - ball.radius < mouth_max_x && ball.pos.x + ball.radius > mouth_min_x;

    if overlaps_mouth && (ball.pos.y - CROSSBAR_Y).abs() < reach {
        ball.pos.y = if ball.pos.y < CROSSBAR_Y {
            CROSSBAR_Y - reach
        } else {
            CROSSBAR_Y + reach
        };
        ball.vel.y = -ball.vel.y * BALL_BOUNCE;
    }
}

//! Goal mouth classification
//!
//! Each goal mouth is the strip of field behind a crossbar. A ball counts as
//! a goal only when its center is inside the mouth, below a dead band under
//! the bar, above the ground line, and not in contact with the bar itself.

use crate::consts::*;

use super::state::{Ball, Side};

/// True when the ball overlaps the crossbar of the given side's goal.
/// A ball in contact with the bar never scores, whatever else holds.
pub fn touching_crossbar(ball: &Ball, side: Side) -> bool {
    let over_mouth = match side {
        Side::Left => ball.pos.x <= GOAL_WIDTH,
        Side::Right => ball.pos.x >= FIELD_WIDTH - GOAL_WIDTH,
    };
    over_mouth && (ball.pos.y - CROSSBAR_Y).abs() <= ball.radius + CROSSBAR_THICKNESS / 2.0
}

/// Classify the ball against both mouths and return the side awarded the
/// goal. The left mouth belongs to the left player, so a ball inside it
/// scores for [`Side::Right`]. The left mouth is always evaluated first.
pub fn classify(ball: &Ball) -> Option<Side> {
    let top = CROSSBAR_Y + ball.radius + GOAL_TOP_INSET;
    let bottom = GROUND_Y - ball.radius;
    let in_band = ball.pos.y > top && ball.pos.y <= bottom;

    if ball.pos.x <= GOAL_WIDTH && in_band && !touching_crossbar(ball, Side::Left) {
        return Some(Side::Left.other());
    }
    if ball.pos.x >= FIELD_WIDTH - GOAL_WIDTH && in_band && !touching_crossbar(ball, Side::Right) {
        return Some(Side::Right.other());
    }
    None
}

//! Fixed timestep match tick
//!
//! One call to [`tick`] advances the match by exactly one 60 Hz step. The
//! order inside a tick is fixed: celebration freeze, clock, controls, player
//! physics, ball physics, contacts, goals, spin, end-of-match check. Nothing
//! here draws, sleeps, or reads the wall clock.

use rand::Rng;

use crate::consts::*;
use crate::settings::DurationMode;

use super::ai;
use super::collision;
use super::goal;
use super::physics;
use super::state::{KICK_TIMER_TICKS, MatchEvent, MatchState, Mode, Player, SHAKE_DECAY, Side};

/// One player's intent for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub kick: bool,
}

/// Inputs for both slots. `right: None` hands the right player to the AI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: PlayerInput,
    pub right: Option<PlayerInput>,
}

/// Advance the match by one tick. Outside [`Mode::Playing`] this only
/// clears the event queue, so a paused or finished match never moves.
pub fn tick(state: &mut MatchState, input: &TickInput) {
    state.events.clear();
    if state.mode != Mode::Playing {
        return;
    }
    state.tick_count += 1;

    // During a celebration the field is frozen; only the countdown and the
    // screen shake advance.
    if state.celebration.active {
        step_celebration(state);
        return;
    }

    if state.rules.mode() == DurationMode::Time {
        state.elapsed += TICK_SECONDS;
        if let Some(limit) = state.rules.time_limit() {
            state.time_left = (limit as f32 - state.elapsed).max(0.0);
        }
    }

    // The left slot is always externally driven; the right slot falls back
    // to the AI when no input is supplied.
    apply_controls(&mut state.players[0], &input.left);
    let right_input = match input.right {
        Some(human) => human,
        None => ai::decide(&state.players[1], &state.ball, &mut state.rng),
    };
    apply_controls(&mut state.players[1], &right_input);

    physics::step_player(&mut state.players[0]);
    physics::step_player(&mut state.players[1]);
    physics::step_ball(&mut state.ball);
    for clone in &mut state.ball.clones {
        physics::step_ball(clone);
    }

    // Players shove each other first, then each is tested against the
    // primary ball. Clones never touch players.
    {
        let [left, right] = &mut state.players;
        collision::separate_players(left, right);
    }
    collision::player_ball(&state.players[0], &mut state.ball);
    collision::player_ball(&state.players[1], &mut state.ball);

    resolve_goals(state);

    state.ball.spin();
    for clone in &mut state.ball.clones {
        clone.spin();
    }

    check_match_end(state);
}

/// Translate raw intent into motion. Walking stops at the field margins,
/// the kick window re-arms while the button is held, and the kick timer
/// runs down once per tick regardless.
fn apply_controls(player: &mut Player, input: &PlayerInput) {
    if input.left && player.pos.x > WALK_MIN_X {
        player.vel.x = -PLAYER_SPEED;
        player.facing_right = false;
    } else if input.right && player.pos.x < WALK_MAX_X {
        player.vel.x = PLAYER_SPEED;
        player.facing_right = true;
    } else {
        player.vel.x *= PLAYER_FRICTION;
    }

    if input.jump && player.on_ground {
        player.vel.y = -JUMP_POWER;
        player.on_ground = false;
    }

    if input.kick {
        player.kicking = true;
        player.kick_timer = KICK_TIMER_TICKS;
    } else {
        player.kicking = false;
    }

    if player.kick_timer > 0 {
        player.kick_timer -= 1;
    }
}

/// Run down the celebration window. The shake offset is resampled from the
/// match RNG while any intensity remains, then the intensity decays. When
/// the countdown reaches zero the field is reset for the next kickoff.
fn step_celebration(state: &mut MatchState) {
    state.celebration.ticks_remaining = state.celebration.ticks_remaining.saturating_sub(1);

    if state.celebration.shake.intensity > 0.0 {
        let intensity = state.celebration.shake.intensity;
        state.celebration.shake.offset.x = (state.rng.random::<f32>() - 0.5) * intensity;
        state.celebration.shake.offset.y = (state.rng.random::<f32>() - 0.5) * intensity;
        state.celebration.shake.intensity *= SHAKE_DECAY;
    }

    if state.celebration.ticks_remaining == 0 {
        state.celebration.clear();
        state.kickoff();
    }
}

/// The primary ball is checked first; a primary goal ends goal resolution
/// for the tick. Otherwise every scoring clone is awarded and removed.
fn resolve_goals(state: &mut MatchState) {
    if let Some(side) = goal::classify(&state.ball) {
        award_goal(state, side);
        return;
    }

    let mut i = 0;
    while i < state.ball.clones.len() {
        match goal::classify(&state.ball.clones[i]) {
            Some(side) => {
                state.ball.clones.remove(i);
                award_goal(state, side);
            }
            None => i += 1,
        }
    }
}

fn award_goal(state: &mut MatchState, side: Side) {
    state.score[side.index()] += 1;
    let scorer = state.players[side.index()].id.clone();
    log::info!(
        "goal by {} ({} - {})",
        scorer,
        state.score[0],
        state.score[1]
    );
    state.events.push(MatchEvent::Goal {
        side,
        scorer: scorer.clone(),
    });
    state.celebration.trigger(scorer);
}

/// A timed match ends when the clock hits zero; a goals match ends on the
/// tick either score reaches the limit.
fn check_match_end(state: &mut MatchState) {
    let over = match state.rules.mode() {
        DurationMode::Time => state.time_left <= 0.0,
        DurationMode::Goals => state
            .rules
            .goal_limit()
            .is_some_and(|limit| state.score[0] >= limit || state.score[1] >= limit),
    };
    if !over {
        return;
    }

    state.mode = Mode::GameOver;
    let winner = state.leader();
    state.events.push(MatchEvent::MatchEnded {
        winner,
        score: state.score,
    });
    match winner {
        Some(side) => log::info!(
            "full time: {} wins {} - {}",
            state.players[side.index()].name,
            state.score[0],
            state.score[1]
        ),
        None => log::info!("full time: draw {} - {}", state.score[0], state.score[1]),
    }
}

//! Cabezadura - a two-character arcade head-soccer engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, goals, match state)
//! - `tournament`: Single-elimination bracket state machine
//! - `roster`: Character repository supplied by the embedding layer
//! - `settings`: Validated match duration rules
//! - `cues`: Scorer-to-celebration-cue lookup
//! - `error`: Configuration error type

pub mod cues;
pub mod error;
pub mod roster;
pub mod settings;
pub mod sim;
pub mod tournament;

pub use error::ConfigError;
pub use roster::{Character, Roster};
pub use settings::MatchRules;

/// Game configuration constants
pub mod consts {
    /// Simulation cadence (one tick per display refresh at 60 Hz)
    pub const TICK_RATE: u32 = 60;
    /// Wall-clock seconds added to the match clock per tick
    pub const TICK_SECONDS: f32 = 1.0 / TICK_RATE as f32;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    pub const GROUND_Y: f32 = 320.0;

    /// Goal mouth extent from each side wall, and the bar above it
    pub const GOAL_WIDTH: f32 = 86.0;
    pub const GOAL_HEIGHT: f32 = 115.0;
    pub const CROSSBAR_Y: f32 = GROUND_Y - GOAL_HEIGHT;
    pub const CROSSBAR_THICKNESS: f32 = 5.0;
    /// Dead band under the bar where a ball is still too high to score
    pub const GOAL_TOP_INSET: f32 = 30.0;

    /// Player movement
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_FRICTION: f32 = 0.8;
    pub const JUMP_POWER: f32 = 12.0;
    /// Move intents are ignored past these margins
    pub const WALK_MIN_X: f32 = 20.0;
    pub const WALK_MAX_X: f32 = FIELD_WIDTH - 60.0;

    /// Gravity per tick, applied to the ball always and to airborne players
    pub const GRAVITY: f32 = 0.5;

    /// Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_BOUNCE: f32 = 0.7;
    /// Extra horizontal damping on ground contact only
    pub const BALL_GROUND_DRAG: f32 = 0.9;
    /// Rotation advance per unit of speed (cosmetic)
    pub const BALL_SPIN_RATE: f32 = 0.05;

    /// Head contact impulse
    pub const HEAD_FORCE: f32 = 6.0;
    pub const HEAD_LIFT: f32 = 2.0;

    /// Foot contact
    pub const FOOT_DROP: f32 = 10.0;
    pub const FOOT_REACH: f32 = 20.0;
    pub const KICK_FORCE: f32 = 18.0;
    pub const KICK_POWER_ACTIVE: f32 = 2.5;
    pub const KICK_POWER_PASSIVE: f32 = 1.2;
    pub const KICK_LIFT: f32 = 3.0;
    /// Horizontal multiplier on top of an active kick
    pub const KICK_BOOST: f32 = 1.5;

    /// Knockback between overlapping players
    pub const PLAYER_PUSH_FORCE: f32 = 6.0;

    /// AI policy thresholds
    pub const AI_DEAD_ZONE: f32 = 30.0;
    pub const AI_JUMP_RANGE: f32 = 60.0;
    pub const AI_JUMP_CLEARANCE: f32 = 20.0;
    pub const AI_KICK_RANGE: f32 = 50.0;
    pub const AI_KICK_CHANCE: f32 = 0.2;
}

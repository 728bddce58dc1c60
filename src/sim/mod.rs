//! Deterministic simulation module
//!
//! All match logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per 60 Hz frame)
//! - Seeded RNG only
//! - Fixed evaluation order (players before ball, primary ball before
//!   clones, left goal before right)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod goal;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Contact, player_ball, separate_players};
pub use state::{
    Ball, CELEBRATION_TICKS, Celebration, MatchEvent, MatchState, Mode, Player, ScreenShake, Side,
};
pub use tick::{PlayerInput, TickInput, tick};

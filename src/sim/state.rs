//! Match state and core simulation types
//!
//! Everything a renderer needs after a tick lives here as plain data.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::roster::Character;
use crate::settings::MatchRules;

/// UI/loop mode. The simulation only advances while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Title screen
    Menu,
    /// Duration/character option screens
    Options,
    /// Active gameplay, one tick per refresh
    Playing,
    /// Match suspended, state frozen
    Paused,
    /// Match finished
    GameOver,
    /// Tournament entrant selection
    TournamentSelect,
    /// Bracket overview between tournament matches
    Bracket,
}

/// Field side. Also indexes the player/score pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Fixed kickoff x for this side's player
    pub fn spawn_x(self) -> f32 {
        match self {
            Side::Left => PLAYER_SPAWN_X,
            Side::Right => FIELD_WIDTH - PLAYER_SPAWN_X,
        }
    }
}

/// A player entity. `pos` is the top-left corner of the body box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Roster identity (opaque tag, used for scoring/cue dispatch)
    pub id: String,
    /// Display name
    pub name: String,
    /// Art reference for the renderer, never interpreted here
    pub head_image: String,
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub facing_right: bool,
    pub on_ground: bool,
    /// Kick intent held this tick
    pub kicking: bool,
    /// Ticks left on the kick animation window
    pub kick_timer: u32,
    /// Set while an airborne ceiling bump is unresolved; cleared on landing
    pub hit_ceiling: bool,
}

impl Player {
    pub fn new(character: &Character, side: Side) -> Self {
        Self {
            id: character.id.clone(),
            name: character.name.clone(),
            head_image: character.head_image.clone(),
            pos: Vec2::new(side.spawn_x(), GROUND_Y - PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            facing_right: side == Side::Left,
            on_ground: true,
            kicking: false,
            kick_timer: 0,
            hit_ceiling: false,
        }
    }

    /// Back to the kickoff spot with all motion and flags cleared
    pub fn reset_to_spawn(&mut self, side: Side) {
        self.pos = Vec2::new(side.spawn_x(), GROUND_Y - self.height);
        self.vel = Vec2::ZERO;
        self.facing_right = side == Side::Left;
        self.on_ground = true;
        self.kicking = false;
        self.kick_timer = 0;
        self.hit_ceiling = false;
    }

    /// Center of the body box (the head contact zone origin)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Foot contact point, just below the body box
    #[inline]
    pub fn foot(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height + FOOT_DROP)
    }
}

/// The ball. Clones share field physics and goal rules but never touch players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Visual spin driven by speed; no physics feedback
    pub rotation: f32,
    /// Auxiliary balls (clones never nest)
    #[serde(default)]
    pub clones: Vec<Ball>,
}

impl Ball {
    /// Fresh serve at center field: small random drift, fixed drop
    pub fn serve(rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, BALL_SPAWN_Y),
            vel: Vec2::new((rng.random::<f32>() - 0.5) * SERVE_SPREAD, SERVE_DROP_VY),
            radius: BALL_RADIUS,
            rotation: 0.0,
            clones: Vec::new(),
        }
    }

    /// Advance the cosmetic rotation from current speed
    #[inline]
    pub fn spin(&mut self) {
        self.rotation += self.vel.length() * BALL_SPIN_RATE;
    }
}

/// Screen-shake offset with a geometrically decaying intensity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenShake {
    pub offset: Vec2,
    pub intensity: f32,
}

/// Post-goal freeze window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Celebration {
    pub active: bool,
    pub ticks_remaining: u32,
    /// Roster id of the scoring character
    pub scorer: Option<String>,
    pub shake: ScreenShake,
}

impl Celebration {
    /// Begin the freeze window for the given scorer
    pub fn trigger(&mut self, scorer: String) {
        self.active = true;
        self.ticks_remaining = CELEBRATION_TICKS;
        self.scorer = Some(scorer);
        self.shake = ScreenShake {
            offset: Vec2::ZERO,
            intensity: SHAKE_INTENSITY,
        };
    }

    /// Clear everything, including the shake vector
    pub fn clear(&mut self) {
        self.active = false;
        self.ticks_remaining = 0;
        self.scorer = None;
        self.shake = ScreenShake::default();
    }
}

/// Things that happened during a tick, drained by the embedder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A goal was registered for `side`, scored by the character `scorer`
    Goal { side: Side, scorer: String },
    /// The match ended with `score`; `winner` is `None` on a draw
    MatchEnded {
        winner: Option<Side>,
        score: [u32; 2],
    },
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Seed the match RNG started from, kept for reproducibility
    pub seed: u64,
    /// Match RNG: AI kick rolls, shake resampling, serve drift
    pub rng: Pcg32,
    pub mode: Mode,
    /// Left player at index 0, right player at index 1
    pub players: [Player; 2],
    pub ball: Ball,
    /// Scores indexed by `Side::index`
    pub score: [u32; 2],
    pub rules: MatchRules,
    /// Elapsed in-match seconds (timed rules only)
    pub elapsed: f32,
    /// Remaining seconds, clamped at zero (timed rules only)
    pub time_left: f32,
    pub celebration: Celebration,
    /// Simulation tick counter
    pub tick_count: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<MatchEvent>,
}

impl MatchState {
    /// Create a match between two characters. Starts on the menu; call
    /// [`start`](Self::start) to kick off.
    pub fn new(left: &Character, right: &Character, rules: MatchRules, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::serve(&mut rng);
        Self {
            seed,
            rng,
            mode: Mode::Menu,
            players: [Player::new(left, Side::Left), Player::new(right, Side::Right)],
            ball,
            score: [0, 0],
            rules,
            elapsed: 0.0,
            time_left: rules.time_limit().unwrap_or(0) as f32,
            celebration: Celebration::default(),
            tick_count: 0,
            events: Vec::new(),
        }
    }

    /// Create a tournament-stage match (always timed, default length)
    pub fn tournament_match(entrant: &Character, opponent: &Character, seed: u64) -> Self {
        Self::new(entrant, opponent, MatchRules::tournament(), seed)
    }

    /// Full reset into active play: scores, clock, celebration, kickoff
    pub fn start(&mut self) {
        self.score = [0, 0];
        self.elapsed = 0.0;
        self.time_left = self.rules.time_limit().unwrap_or(0) as f32;
        self.celebration.clear();
        self.events.clear();
        self.kickoff();
        self.mode = Mode::Playing;
        log::info!(
            "match start: {} vs {} ({})",
            self.players[0].name,
            self.players[1].name,
            self.rules
        );
    }

    /// Suspend play. No effect outside `Playing`.
    pub fn pause(&mut self) {
        if self.mode == Mode::Playing {
            self.mode = Mode::Paused;
        }
    }

    /// Resume play. No effect outside `Paused`.
    pub fn resume(&mut self) {
        if self.mode == Mode::Paused {
            self.mode = Mode::Playing;
        }
    }

    /// Fresh ball and both players back on their marks
    pub fn kickoff(&mut self) {
        self.ball = Ball::serve(&mut self.rng);
        self.players[0].reset_to_spawn(Side::Left);
        self.players[1].reset_to_spawn(Side::Right);
    }

    #[inline]
    pub fn score_for(&self, side: Side) -> u32 {
        self.score[side.index()]
    }

    /// Side currently ahead, `None` when level
    pub fn leader(&self) -> Option<Side> {
        match self.score[0].cmp(&self.score[1]) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Celebration length (1.5 seconds at 60 Hz)
pub const CELEBRATION_TICKS: u32 = 90;
/// Starting shake amplitude, decaying by `SHAKE_DECAY` per tick
pub const SHAKE_INTENSITY: f32 = 15.0;
pub const SHAKE_DECAY: f32 = 0.95;

/// Kick animation window armed by a kick intent
pub const KICK_TIMER_TICKS: u32 = 10;

/// Kickoff geometry: player offset from their side wall, ball drop point
pub const PLAYER_SPAWN_X: f32 = 150.0;
pub const BALL_SPAWN_Y: f32 = GROUND_Y - 100.0;
/// Serve velocity: horizontal drift is uniform in ±`SERVE_SPREAD`/2
pub const SERVE_SPREAD: f32 = 4.0;
pub const SERVE_DROP_VY: f32 = -5.0;

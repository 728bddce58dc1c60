//! Match duration rules
//!
//! Rules are validated at construction, so any `MatchRules` value in
//! circulation names a recognized preset and match setup never fails.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which rule ends the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DurationMode {
    /// Countdown clock, highest score at zero wins
    #[default]
    Time,
    /// First side to reach the goal limit wins
    Goals,
}

impl DurationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationMode::Time => "time",
            DurationMode::Goals => "goals",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "time" => Some(DurationMode::Time),
            "goals" => Some(DurationMode::Goals),
            _ => None,
        }
    }
}

/// Recognized countdown lengths, in seconds
pub const TIME_PRESETS: [u32; 4] = [30, 60, 90, 120];
/// Recognized goal limits
pub const GOAL_PRESETS: [u32; 4] = [3, 5, 10, 15];
/// Tournament matches are always timed at this length
pub const TOURNAMENT_SECONDS: u32 = 60;

/// A validated match-ending rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    mode: DurationMode,
    value: u32,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            mode: DurationMode::Time,
            value: TOURNAMENT_SECONDS,
        }
    }
}

impl MatchRules {
    /// Timed match; `seconds` must be one of `TIME_PRESETS`
    pub fn timed(seconds: u32) -> Result<Self, ConfigError> {
        if TIME_PRESETS.contains(&seconds) {
            Ok(Self {
                mode: DurationMode::Time,
                value: seconds,
            })
        } else {
            Err(ConfigError::BadDuration {
                mode: DurationMode::Time.as_str(),
                value: seconds,
            })
        }
    }

    /// Goal-limited match; `goals` must be one of `GOAL_PRESETS`
    pub fn first_to(goals: u32) -> Result<Self, ConfigError> {
        if GOAL_PRESETS.contains(&goals) {
            Ok(Self {
                mode: DurationMode::Goals,
                value: goals,
            })
        } else {
            Err(ConfigError::BadDuration {
                mode: DurationMode::Goals.as_str(),
                value: goals,
            })
        }
    }

    /// The fixed rule used for every tournament stage
    pub fn tournament() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DurationMode {
        self.mode
    }

    /// Countdown length in seconds when timed
    pub fn time_limit(&self) -> Option<u32> {
        match self.mode {
            DurationMode::Time => Some(self.value),
            DurationMode::Goals => None,
        }
    }

    /// Winning goal count when goal-limited
    pub fn goal_limit(&self) -> Option<u32> {
        match self.mode {
            DurationMode::Time => None,
            DurationMode::Goals => Some(self.value),
        }
    }
}

impl fmt::Display for MatchRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            DurationMode::Time => write!(f, "{}s", self.value),
            DurationMode::Goals => write!(f, "first to {}", self.value),
        }
    }
}

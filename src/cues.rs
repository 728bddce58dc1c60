//! Celebration cue lookup
//!
//! One table from scorer id to a cue descriptor, resolved once per goal
//! event. Playback itself belongs to the embedding layer; the engine only
//! names the cue.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What the audio layer should play when a goal lands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalCue {
    /// Generic stadium reaction, the fallback for unmapped scorers
    CrowdCheer,
    /// Character chant clip, named by asset path
    Chant(String),
}

/// Scorer-id to cue mapping with a crowd-cheer default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CueTable {
    cues: HashMap<String, GoalCue>,
}

impl Default for CueTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CueTable {
    /// Empty table; every scorer resolves to the crowd cheer
    pub fn new() -> Self {
        Self {
            cues: HashMap::new(),
        }
    }

    /// Table pre-populated with the stock character chants
    pub fn with_default_chants() -> Self {
        let mut table = Self::new();
        for (id, clip) in [
            ("messi", "/messi-goal.mp3"),
            ("francisco", "/francisco.mp3"),
            ("maradona", "/marado.mp3"),
            ("rickyfort", "/ricky.mp3"),
            ("darin", "/darin.mp3"),
            ("francella", "/francella.mp3"),
            ("mirtha", "/mirtha.mp3"),
        ] {
            table.insert(id, GoalCue::Chant(clip.to_string()));
        }
        table
    }

    pub fn insert(&mut self, scorer_id: impl Into<String>, cue: GoalCue) {
        self.cues.insert(scorer_id.into(), cue);
    }

    /// Cue for this scorer, falling back to the crowd cheer
    pub fn resolve(&self, scorer_id: &str) -> &GoalCue {
        self.cues.get(scorer_id).unwrap_or(&GoalCue::CrowdCheer)
    }
}

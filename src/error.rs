//! Configuration errors
//!
//! Everything here is rejected before a match or tournament exists; nothing
//! in a running tick returns an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unrecognized {mode} duration: {value}")]
    BadDuration { mode: &'static str, value: u32 },

    #[error("character not in roster: {id}")]
    UnknownCharacter { id: String },

    #[error("duplicate character id in roster: {id}")]
    DuplicateCharacter { id: String },

    #[error("roster has {have} characters, tournament needs at least {need}")]
    RosterTooSmall { have: usize, need: usize },

    #[error("roster parse error: {0}")]
    RosterParse(#[from] serde_json::Error),
}

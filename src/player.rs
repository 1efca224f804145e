//! Player identity
//!
//! Names must be 4 to 15 characters long, counted as typed.

use std::fmt;

use thiserror::Error;

pub const MIN_NAME_LEN: usize = 4;
pub const MAX_NAME_LEN: usize = 15;

/// Used when the player never supplies a valid name
pub const DEFAULT_NAME: &str = "Jumper";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name must be at least 4 characters (got {0})")]
    TooShort(usize),
    #[error("name must be at most 15 characters (got {0})")]
    TooLong(usize),
}

/// A validated player name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let len = raw.chars().count();
        if len < MIN_NAME_LEN {
            return Err(NameError::TooShort(len));
        }
        if len > MAX_NAME_LEN {
            return Err(NameError::TooLong(len));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlayerName {
    fn default() -> Self {
        Self(DEFAULT_NAME.to_string())
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ask for a name up to `max_attempts` times.
///
/// `ask` returns `None` when input is exhausted (closed stdin, cancelled
/// dialog), which stops prompting immediately. Falls back to `fallback`,
/// then to the default name.
pub fn prompt_name(
    mut ask: impl FnMut(u32) -> Option<String>,
    max_attempts: u32,
    fallback: Option<PlayerName>,
) -> PlayerName {
    for attempt in 1..=max_attempts.max(1) {
        let Some(raw) = ask(attempt) else {
            break;
        };
        match PlayerName::parse(&raw) {
            Ok(name) => return name,
            Err(e) => log::warn!("Rejected player name (attempt {}): {}", attempt, e),
        }
    }

    let name = fallback.unwrap_or_default();
    log::info!("Using fallback player name {}", name);
    name
}

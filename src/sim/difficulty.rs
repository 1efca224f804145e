//! Score and difficulty progression
//!
//! Level is derived from score alone; everything that scales with difficulty
//! is derived from level alone.

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Level reached at a given score (1-based)
#[inline]
pub fn level_for(score: u64) -> u32 {
    (score / POINTS_PER_LEVEL) as u32 + 1
}

/// Horizontal obstacle velocity for a level (negative = leftward)
#[inline]
pub fn obstacle_speed(level: u32) -> f32 {
    BASE_OBSTACLE_SPEED + (level.saturating_sub(1)) as f32 * OBSTACLE_SPEED_STEP
}

/// Milliseconds between obstacle spawns, floored at 500
#[inline]
pub fn spawn_delay(level: u32) -> u32 {
    BASE_SPAWN_DELAY_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(SPAWN_DELAY_STEP_MS))
        .max(MIN_SPAWN_DELAY_MS)
}

/// Background scroll per tick
#[inline]
pub fn scroll_speed(level: u32) -> f32 {
    BASE_SCROLL_SPEED + (level.saturating_sub(1)) as f32 * SCROLL_SPEED_STEP
}

/// Background image shown for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Sky1,
    Sky2,
    Sky3,
}

impl Backdrop {
    /// Levels past 3 cycle back to the first sky
    pub fn for_level(level: u32) -> Self {
        match level {
            2 => Backdrop::Sky2,
            3 => Backdrop::Sky3,
            _ => Backdrop::Sky1,
        }
    }

    pub fn asset_key(&self) -> &'static str {
        match self {
            Backdrop::Sky1 => "sky1",
            Backdrop::Sky2 => "sky2",
            Backdrop::Sky3 => "sky3",
        }
    }
}

/// Add one point and report a level transition if the score crossed a boundary.
///
/// Does nothing once the run is over.
pub fn advance(state: &mut GameState) -> Option<GameEvent> {
    if state.is_game_over {
        return None;
    }

    state.score += 1;

    let new_level = level_for(state.score);
    if new_level == state.level {
        return None;
    }

    let old_level = state.level;
    state.apply_level(new_level);
    Some(GameEvent::LevelChanged {
        old_level,
        new_level,
    })
}

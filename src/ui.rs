//! HUD and overlay text
//!
//! The rendering host draws these strings; layout and fonts are its business.

use crate::highscores::HighScores;

pub const LEVEL_UP_BANNER: &str = "LEVEL UP!";
pub const TRAP_BANNER: &str = "TRAP!";
pub const RESTART_HINT: &str = "Press ESC to restart";

pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

/// Level label before any level change
pub fn level_text(level: u32) -> String {
    format!("Level: {}", level)
}

/// Level label after a level change, with the obstacle speed
pub fn level_up_text(level: u32, obstacle_speed: f32) -> String {
    format!("Level: {}\nSpeed: {}", level, obstacle_speed.abs())
}

/// Ranked `"1. name: score"` lines
pub fn leaderboard_lines(scores: &HighScores) -> String {
    scores
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {}: {}", i + 1, e.name, e.score))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Game over panel
pub fn game_over_text(score: u64, best_score: u64, scores: &HighScores) -> String {
    format!(
        "Game Over!\nScore: {}\nBest Score: {}\n{}\n\nLeaderboard:\n{}",
        score,
        best_score,
        RESTART_HINT,
        leaderboard_lines(scores)
    )
}

//! Space Jumper - A side-scrolling arcade jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (difficulty, spawning, collisions, game state)
//! - `highscores`: Top 10 leaderboard
//! - `persistence`: Key-value storage for the leaderboard and settings
//! - `player`: Player name validation
//! - `session`: One play session wiring simulation, leaderboard and storage
//! - `platform`: Browser host bindings
//! - `ui`: HUD text

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod player;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use highscores::{HighScoreEntry, HighScores};
pub use player::{NameError, PlayerName};
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one score point per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Top edge of the ground platform
    pub const GROUND_TOP: f32 = 536.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 2500.0;

    /// Player body (centered position, box size)
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 450.0;
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    /// Restitution when landing on the ground or hitting the ceiling
    pub const PLAYER_BOUNCE: f32 = 0.2;
    /// Rebounds slower than this settle on the ground
    pub const REST_VELOCITY: f32 = 60.0;
    pub const JUMP_VELOCITY: f32 = -900.0;

    /// Trap springboard: launch, then slam back down after a delay
    pub const TRAP_LAUNCH_VELOCITY: f32 = -1500.0;
    pub const TRAP_RECOVERY_VELOCITY: f32 = 2000.0;
    pub const TRAP_RECOVERY_DELAY_MS: f64 = 500.0;

    /// Obstacles enter off the right edge and are reaped past the left edge
    pub const OBSTACLE_SPAWN_X: f32 = 850.0;
    pub const OBSTACLE_CULL_X: f32 = -50.0;
    pub const OBSTACLE_MIN_Y: i32 = 400;
    pub const OBSTACLE_MAX_Y: i32 = 500;
    pub const OBSTACLE_MIN_WIDTH: i32 = 20;
    pub const OBSTACLE_MAX_WIDTH: i32 = 50;
    pub const OBSTACLE_HEIGHT: f32 = 32.0;
    /// One in this many obstacles is a trap
    pub const TRAP_ODDS: i32 = 6;

    /// Score points per level
    pub const POINTS_PER_LEVEL: u64 = 1000;
    pub const BASE_OBSTACLE_SPEED: f32 = -200.0;
    pub const OBSTACLE_SPEED_STEP: f32 = -100.0;
    pub const BASE_SPAWN_DELAY_MS: u32 = 3000;
    pub const SPAWN_DELAY_STEP_MS: u32 = 500;
    pub const MIN_SPAWN_DELAY_MS: u32 = 500;
    pub const BASE_SCROLL_SPEED: f32 = 2.0;
    pub const SCROLL_SPEED_STEP: f32 = 1.0;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Timers run on the simulation clock, never wall-clock time
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod schedule;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{
    Aabb, CollisionOutcome, detect, rearm_traps, recover_from_trap, resolve,
};
pub use difficulty::{Backdrop, advance, level_for, obstacle_speed, scroll_speed, spawn_delay};
pub use schedule::{Scheduler, Task, TimerId};
pub use spawner::{RandomSource, reap, roll_obstacle, spawn};
pub use state::{GameEvent, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{TickInput, restart, tick};

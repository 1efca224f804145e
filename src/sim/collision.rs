//! Collision detection and response
//!
//! Detection is plain box overlap between the player and each obstacle.
//! Response depends on the obstacle variant: a normal obstacle ends the run,
//! a trap launches the player and schedules the slam back down.

use glam::Vec2;

use super::schedule::Task;
use super::state::{GameState, ObstacleKind};
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap; boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// What a collision did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Nothing changed
    Continue,
    /// Player was launched by a trap
    Trapped,
    /// Run ended
    GameOver,
}

/// IDs of obstacles currently overlapping the player, in spawn order
pub fn detect(state: &GameState) -> Vec<u32> {
    let player = state.player.bounds();
    state
        .obstacles
        .iter()
        .filter(|o| o.bounds().overlaps(&player))
        .map(|o| o.id)
        .collect()
}

/// Apply the effect of the player touching an obstacle.
///
/// Once the run is over every call is a no-op, so several contacts in the
/// same tick end the run exactly once.
pub fn resolve(state: &mut GameState, obstacle_id: u32) -> CollisionOutcome {
    if state.is_game_over {
        return CollisionOutcome::Continue;
    }

    let Some(obstacle) = state.obstacles.iter_mut().find(|o| o.id == obstacle_id) else {
        return CollisionOutcome::Continue;
    };

    match obstacle.kind {
        ObstacleKind::Trap { sprung: true } => CollisionOutcome::Continue,
        ObstacleKind::Trap { sprung: false } => {
            obstacle.kind = ObstacleKind::Trap { sprung: true };
            state.player.vel.y = TRAP_LAUNCH_VELOCITY;
            state
                .scheduler
                .after(TRAP_RECOVERY_DELAY_MS, Task::TrapRecovery);
            CollisionOutcome::Trapped
        }
        ObstacleKind::Normal => {
            state.is_game_over = true;
            CollisionOutcome::GameOver
        }
    }
}

/// Re-arm every trap the player is no longer touching, so the next contact
/// launches again while a sustained overlap fires only once.
pub fn rearm_traps(state: &mut GameState, touching: &[u32]) {
    for obstacle in &mut state.obstacles {
        let id = obstacle.id;
        if let ObstacleKind::Trap { sprung } = &mut obstacle.kind {
            if *sprung && !touching.contains(&id) {
                *sprung = false;
            }
        }
    }
}

/// Deferred half of the trap effect.
///
/// Skipped when the run ended while the player was airborne.
pub fn recover_from_trap(state: &mut GameState) -> bool {
    if state.is_game_over {
        return false;
    }
    state.player.vel.y = TRAP_RECOVERY_VELOCITY;
    true
}

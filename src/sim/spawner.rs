//! Obstacle generation and reaping

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Obstacle, ObstacleKind};
use crate::consts::*;

/// Uniform integer source, inclusive on both ends
pub trait RandomSource {
    fn between(&mut self, min: i32, max: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn between(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.random_range(lo..=hi)
    }
}

/// Build one obstacle for the given level from a random source.
///
/// Rolls are drawn in a fixed order: trap, width, height.
pub fn roll_obstacle(rng: &mut impl RandomSource, id: u32, level: u32) -> Obstacle {
    let trap = rng.between(0, TRAP_ODDS - 1) == 0;
    let width = rng.between(OBSTACLE_MIN_WIDTH, OBSTACLE_MAX_WIDTH);
    let y = rng.between(OBSTACLE_MIN_Y, OBSTACLE_MAX_Y);

    Obstacle {
        id,
        pos: Vec2::new(OBSTACLE_SPAWN_X, y as f32),
        width: width as f32,
        vel_x: super::difficulty::obstacle_speed(level),
        kind: if trap {
            ObstacleKind::Trap { sprung: false }
        } else {
            ObstacleKind::Normal
        },
    }
}

/// Spawn an obstacle into the live set using the state's own RNG
pub fn spawn(state: &mut GameState) -> Obstacle {
    let id = state.next_entity_id();
    let obstacle = roll_obstacle(&mut state.rng, id, state.level);
    state.obstacles.push(obstacle);
    obstacle
}

/// Remove obstacles that scrolled past the left edge. Returns how many were removed.
pub fn reap(obstacles: &mut Vec<Obstacle>) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_offscreen());
    before - obstacles.len()
}

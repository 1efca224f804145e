//! Game state and core simulation types
//!
//! Everything a run needs lives in `GameState`; there are no globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty::{self, Backdrop};
use super::schedule::{Scheduler, Task, TimerId};
use crate::consts::*;

/// Something that happened during a tick, for the host to react to
/// (text popups, sounds, leaderboard recording)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelChanged { old_level: u32, new_level: u32 },
    ObstacleSpawned { id: u32, trap: bool },
    Jumped,
    /// Player hit a trap and was launched upward
    Trapped { obstacle_id: u32 },
    /// Deferred trap effect fired and slammed the player down
    TrapRecovered,
    GameOver { score: u64 },
    Restarted,
}

/// Obstacle variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Ends the run on contact
    Normal,
    /// Launches the player instead. `sprung` holds for the rest of one contact.
    Trap { sprung: bool },
}

/// A horizontally scrolling obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub width: f32,
    pub vel_x: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn is_trap(&self) -> bool {
        matches!(self.kind, ObstacleKind::Trap { .. })
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(self.width, OBSTACLE_HEIGHT))
    }

    /// Past the left edge and ready to be reaped
    pub fn is_offscreen(&self) -> bool {
        self.pos.x < OBSTACLE_CULL_X
    }
}

/// The player sprite's body. Moves vertically only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Resting on (or just bounced off) the ground this tick
    pub on_ground: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::ZERO,
            on_ground: false,
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    /// Integrate gravity and resolve against the ground and ceiling
    pub fn integrate(&mut self, dt: f32) {
        let half_height = PLAYER_HEIGHT / 2.0;
        let floor = GROUND_TOP - half_height;

        self.vel.x = 0.0;
        self.vel.y += GRAVITY * dt;
        self.pos.y += self.vel.y * dt;
        self.on_ground = false;

        if self.pos.y >= floor {
            self.pos.y = floor;
            if self.vel.y > 0.0 {
                let rebound = -self.vel.y * PLAYER_BOUNCE;
                self.vel.y = if rebound.abs() < REST_VELOCITY {
                    0.0
                } else {
                    rebound
                };
            }
            self.on_ground = true;
        } else if self.pos.y <= half_height {
            self.pos.y = half_height;
            if self.vel.y < 0.0 {
                self.vel.y = -self.vel.y * PLAYER_BOUNCE;
            }
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Obstacle RNG
    pub rng: Pcg32,
    pub score: u64,
    /// Always `level_for(score)`
    pub level: u32,
    pub obstacle_speed: f32,
    pub spawn_delay_ms: u32,
    pub scroll_speed: f32,
    pub is_game_over: bool,
    pub can_jump: bool,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Horizontal tile offset of the scrolling background
    pub background_offset: f32,
    pub backdrop: Backdrop,
    /// Spawn and trap-recovery timers
    pub scheduler: Scheduler,
    /// The single active spawn timer
    pub spawn_timer: Option<TimerId>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            level: 1,
            obstacle_speed: difficulty::obstacle_speed(1),
            spawn_delay_ms: difficulty::spawn_delay(1),
            scroll_speed: difficulty::scroll_speed(1),
            is_game_over: false,
            can_jump: true,
            player: Player::default(),
            obstacles: Vec::new(),
            background_offset: 0.0,
            backdrop: Backdrop::Sky1,
            scheduler: Scheduler::new(),
            spawn_timer: None,
            time_ticks: 0,
            next_id: 1,
        };

        state.rearm_spawn_timer();

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Set the level and every value derived from it
    pub fn apply_level(&mut self, level: u32) {
        self.level = level;
        self.obstacle_speed = difficulty::obstacle_speed(level);
        self.spawn_delay_ms = difficulty::spawn_delay(level);
        self.scroll_speed = difficulty::scroll_speed(level);
        self.backdrop = Backdrop::for_level(level);
    }

    /// Cancel the current spawn timer and arm a new one with the current delay.
    ///
    /// The new period starts now; time already elapsed on the old timer is lost.
    pub fn rearm_spawn_timer(&mut self) {
        if let Some(id) = self.spawn_timer.take() {
            self.scheduler.cancel(id);
        }
        let id = self
            .scheduler
            .every(self.spawn_delay_ms as f64, Task::SpawnObstacle);
        self.spawn_timer = Some(id);
    }

    /// Return to the initial state of a fresh run.
    ///
    /// Seed and RNG stream carry over so consecutive runs differ.
    pub fn reset(&mut self) {
        self.score = 0;
        self.apply_level(1);
        self.is_game_over = false;
        self.can_jump = true;
        self.player = Player::default();
        self.obstacles.clear();
        self.background_offset = 0.0;
        self.scheduler.clear();
        self.spawn_timer = None;
        self.rearm_spawn_timer();
    }
}

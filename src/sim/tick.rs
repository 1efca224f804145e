//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{self, CollisionOutcome};
use super::difficulty;
use super::schedule::Task;
use super::spawner;
use super::state::{GameEvent, GameState, ObstacleKind};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space)
    pub jump: bool,
    /// Restart after game over (escape)
    pub restart: bool,
    /// Idle/demo mode - autopilot jumps over obstacles
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep and report what happened
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Frozen until the player asks for another run
    if state.is_game_over {
        if input.restart {
            restart(state);
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    let mut input = input.clone();
    if input.idle_mode && should_autojump(state) {
        input.jump = true;
    }
    let input = &input;

    state.time_ticks += 1;

    // Timers (spawn, trap recovery)
    for task in state.scheduler.advance(dt as f64 * 1000.0) {
        match task {
            Task::SpawnObstacle => {
                let obstacle = spawner::spawn(state);
                events.push(GameEvent::ObstacleSpawned {
                    id: obstacle.id,
                    trap: obstacle.is_trap(),
                });
            }
            Task::TrapRecovery => {
                if collision::recover_from_trap(state) {
                    events.push(GameEvent::TrapRecovered);
                }
            }
        }
    }

    // Movement
    state.player.integrate(dt);
    for obstacle in &mut state.obstacles {
        obstacle.pos.x += obstacle.vel_x * dt;
    }

    // Collision detection and response
    let touching = collision::detect(state);
    collision::rearm_traps(state, &touching);
    for id in touching {
        match collision::resolve(state, id) {
            CollisionOutcome::Continue => {}
            CollisionOutcome::Trapped => {
                log::debug!("Trap {} sprung", id);
                events.push(GameEvent::Trapped { obstacle_id: id });
            }
            CollisionOutcome::GameOver => {
                log::info!("Game over at score {} (level {})", state.score, state.level);
                events.push(GameEvent::GameOver { score: state.score });
            }
        }
    }
    if state.is_game_over {
        return events;
    }

    if state.player.on_ground {
        state.can_jump = true;
    }
    if input.jump && state.can_jump {
        state.player.vel.y = JUMP_VELOCITY;
        state.can_jump = false;
        events.push(GameEvent::Jumped);
    }

    state.background_offset += state.scroll_speed;

    spawner::reap(&mut state.obstacles);

    if let Some(event) = difficulty::advance(state) {
        state.rearm_spawn_timer();
        log::info!(
            "Level {}: speed {}, spawn every {} ms",
            state.level,
            state.obstacle_speed.abs(),
            state.spawn_delay_ms
        );
        events.push(event);
    }

    events
}

/// Reset everything for a fresh run
pub fn restart(state: &mut GameState) {
    state.reset();
    log::info!("Run restarted");
}

/// Autopilot: jump when a deadly obstacle is about to reach a grounded player
fn should_autojump(state: &GameState) -> bool {
    if !state.player.on_ground {
        return false;
    }

    let player = state.player.bounds();
    state
        .obstacles
        .iter()
        .filter(|o| o.kind == ObstacleKind::Normal)
        .any(|o| {
            let bounds = o.bounds();
            // Passes overhead without a jump
            if bounds.max.y <= player.min.y {
                return false;
            }
            let gap = bounds.min.x - player.max.x;
            let lead = o.vel_x.abs() * 0.15 + PLAYER_WIDTH;
            gap > 0.0 && gap < lead
        })
}

//! Browser host bindings
//!
//! The page owns the canvas, sprites and tweens; it calls `update` once per
//! animation frame and draws from the getters.

use wasm_bindgen::prelude::*;

use crate::consts::*;
use crate::persistence::LocalStorage;
use crate::player::prompt_name;
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::{GameEvent, TickInput};
use crate::ui;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Space Jumper starting...");
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct WebGame {
    session: Session<LocalStorage>,
    input: TickInput,
    accumulator: f32,
    level_label: String,
}

#[wasm_bindgen]
impl WebGame {
    /// Ask for the player's name and start the first run
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let mut store = LocalStorage;
        let mut settings = Settings::load(&store);

        let window = web_sys::window();
        let player = prompt_name(
            |_| {
                window
                    .as_ref()
                    .and_then(|w| {
                        w.prompt_with_message("Enter your name to start (4-15 characters):")
                            .ok()
                    })
                    .flatten()
            },
            settings.max_name_attempts,
            settings.remembered_name(),
        );

        settings.remember_name(&player);
        if let Err(e) = settings.save(&mut store) {
            log::warn!("Failed to save settings: {}", e);
        }

        let seed = settings.seed.unwrap_or_else(super::clock_seed);
        let input = TickInput {
            idle_mode: settings.idle_mode,
            ..Default::default()
        };

        WebGame {
            session: Session::new(store, player, seed),
            input,
            accumulator: 0.0,
            level_label: ui::level_text(1),
        }
    }

    pub fn set_jump(&mut self, held: bool) {
        self.input.jump = held;
    }

    pub fn request_restart(&mut self) {
        self.input.restart = true;
    }

    /// Run simulation ticks for `dt` seconds; returns the events as JSON
    pub fn update(&mut self, dt: f32) -> String {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.clone();
            events.extend(self.session.tick(&input, SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.restart = false;
        }

        for event in &events {
            match event {
                GameEvent::LevelChanged { new_level, .. } => {
                    self.level_label =
                        ui::level_up_text(*new_level, self.session.state.obstacle_speed);
                }
                GameEvent::Restarted => self.level_label = ui::level_text(1),
                _ => {}
            }
        }

        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn score(&self) -> f64 {
        self.session.state.score as f64
    }

    pub fn level(&self) -> u32 {
        self.session.state.level
    }

    pub fn is_game_over(&self) -> bool {
        self.session.state.is_game_over
    }

    pub fn player_x(&self) -> f32 {
        self.session.state.player.pos.x
    }

    pub fn player_y(&self) -> f32 {
        self.session.state.player.pos.y
    }

    pub fn background_offset(&self) -> f32 {
        self.session.state.background_offset
    }

    pub fn backdrop(&self) -> String {
        self.session.state.backdrop.asset_key().to_string()
    }

    /// Live obstacles as JSON
    pub fn obstacles(&self) -> String {
        serde_json::to_string(&self.session.state.obstacles).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn score_text(&self) -> String {
        ui::score_text(self.session.state.score)
    }

    pub fn level_text(&self) -> String {
        self.level_label.clone()
    }

    pub fn game_over_text(&self) -> String {
        ui::game_over_text(
            self.session.state.score,
            self.session.best_score(),
            &self.session.leaderboard,
        )
    }
}

//! Space Jumper entry point
//!
//! The browser build is driven from `platform::WebGame`. Natively there is no
//! renderer, so the binary plays one autopilot run headless and prints the
//! result and leaderboard.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::{self, BufRead, Write};

    use space_jumper::consts::SIM_DT;
    use space_jumper::persistence::FileStore;
    use space_jumper::player::prompt_name;
    use space_jumper::sim::{GameEvent, TickInput};
    use space_jumper::{Session, Settings, platform, ui};

    /// Ten simulated minutes
    const MAX_DEMO_TICKS: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Space Jumper (native) starting...");

    let mut store = FileStore::default_dir();
    let mut settings = Settings::load(&store);

    let stdin = io::stdin();
    let player = prompt_name(
        |_| {
            print!("Enter your name to start (4-15 characters): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => None,
                Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            }
        },
        settings.max_name_attempts,
        settings.remembered_name(),
    );

    settings.remember_name(&player);
    if let Err(e) = settings.save(&mut store) {
        log::warn!("Failed to save settings: {}", e);
    }

    let seed = settings.seed.unwrap_or_else(platform::clock_seed);
    let mut session = Session::new(store, player, seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut ticks = 0;
    while !session.state.is_game_over && ticks < MAX_DEMO_TICKS {
        for event in session.tick(&input, SIM_DT) {
            match event {
                GameEvent::LevelChanged { new_level, .. } => {
                    println!("{}", ui::LEVEL_UP_BANNER);
                    println!(
                        "{}",
                        ui::level_up_text(new_level, session.state.obstacle_speed)
                    );
                }
                GameEvent::Trapped { .. } => println!("{}", ui::TRAP_BANNER),
                _ => {}
            }
        }
        ticks += 1;
    }

    println!("{}", ui::score_text(session.state.score));
    if session.state.is_game_over {
        println!(
            "{}",
            ui::game_over_text(
                session.state.score,
                session.best_score(),
                &session.leaderboard
            )
        );
    } else {
        log::info!("Demo stopped after {} ticks without a crash", ticks);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::WebGame, this is just to satisfy the compiler
}

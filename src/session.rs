//! One play session
//!
//! Owns the simulation state, the leaderboard and the store it is persisted
//! in. Every game over records the player's score and rewrites the snapshot.

use crate::highscores::HighScores;
use crate::persistence::KeyValueStore;
use crate::player::PlayerName;
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub struct Session<S: KeyValueStore> {
    pub state: GameState,
    pub leaderboard: HighScores,
    pub player: PlayerName,
    /// Rank achieved by the last finished run, if it made the board
    pub last_rank: Option<usize>,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session, loading the leaderboard once
    pub fn new(store: S, player: PlayerName, seed: u64) -> Self {
        let leaderboard = HighScores::load(&store);
        log::info!("Session for {} with seed {}", player, seed);
        Self {
            state: GameState::new(seed),
            leaderboard,
            player,
            last_rank: None,
            store,
        }
    }

    /// Advance one tick, recording the score if the run ended
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let events = tick(&mut self.state, input, dt);

        for event in &events {
            match event {
                GameEvent::GameOver { score } => self.record(*score),
                GameEvent::Restarted => self.last_rank = None,
                _ => {}
            }
        }

        events
    }

    fn record(&mut self, score: u64) {
        self.last_rank = self.leaderboard.record(self.player.as_str(), score);
        if let Some(rank) = self.last_rank {
            log::info!("{} placed #{} with {}", self.player, rank, score);
        }
        if let Err(e) = self.leaderboard.save(&mut self.store) {
            log::warn!("Failed to save high scores: {}", e);
        }
    }

    /// Best score to show on the game over screen
    pub fn best_score(&self) -> u64 {
        self.leaderboard.top_score().unwrap_or(self.state.score)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::persistence::{MemoryStore, StorageError};
    use crate::sim::{Obstacle, ObstacleKind};

    fn crash(session: &mut Session<impl KeyValueStore>) -> Vec<GameEvent> {
        let id = session.state.next_entity_id();
        let pos = session.state.player.pos;
        session.state.obstacles.push(Obstacle {
            id,
            pos,
            width: 30.0,
            vel_x: 0.0,
            kind: ObstacleKind::Normal,
        });
        session.tick(&TickInput::default(), SIM_DT)
    }

    #[test]
    fn test_game_over_records_and_persists() {
        let player = PlayerName::parse("Amys").unwrap();
        let mut session = Session::new(MemoryStore::new(), player, 3);
        for _ in 0..25 {
            session.tick(&TickInput::default(), SIM_DT);
        }

        let events = crash(&mut session);
        assert!(events.contains(&GameEvent::GameOver { score: 25 }));
        assert_eq!(session.last_rank, Some(1));
        assert_eq!(session.best_score(), 25);

        let reloaded = HighScores::load(session.store());
        assert_eq!(reloaded.entries.len(), 1);
        assert_eq!(reloaded.entries[0].name, "Amys");
        assert_eq!(reloaded.entries[0].score, 25);
    }

    #[test]
    fn test_leaderboard_survives_sessions() {
        let mut store = MemoryStore::new();
        let mut scores = HighScores::new();
        scores.record("Prior", 9000);
        scores.save(&mut store).unwrap();

        let mut session = Session::new(store, PlayerName::parse("Newbie").unwrap(), 1);
        crash(&mut session);
        assert_eq!(session.last_rank, Some(2));
        assert_eq!(session.best_score(), 9000);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        session.tick(&restart, SIM_DT);
        assert_eq!(session.last_rank, None);
        crash(&mut session);

        let reloaded = HighScores::load(&session.into_store());
        assert_eq!(reloaded.entries.len(), 3);
        assert_eq!(reloaded.entries[0].name, "Prior");
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_storage_failure_not_fatal() {
        let mut session = Session::new(BrokenStore, PlayerName::default(), 1);
        assert!(session.leaderboard.is_empty());

        crash(&mut session);
        assert!(session.state.is_game_over);
        assert_eq!(session.leaderboard.len(), 1);
    }
}

use std::sync::MutexGuard;

use log::info;

use crate::domain::models::{CurrentScores, GameType};
use crate::errors::{Error, Result};
use crate::state::active_games::{ActiveGamesState, SharedActiveGames};
use crate::store::ScoreStore;

use super::time::FinishTime;
use super::winner::{Winner, resolve_winner};

/// Routes every scoring mutation through the score store and keeps the
/// shared active-game cache aligned with the server's responses.
///
/// Scores are never computed locally: a successful mutation replaces the
/// cached participant list with whatever the store returned, so a
/// concurrent admin session's changes win over stale local arithmetic. A
/// failed call leaves the cache exactly as it was.
pub struct ScoreUpdateController<S> {
    store: S,
    state: SharedActiveGames,
}

impl<S: ScoreStore> ScoreUpdateController<S> {
    pub fn new(store: S, state: SharedActiveGames) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &SharedActiveGames {
        &self.state
    }

    /// Replace the cached active set with the store's latest snapshot.
    pub async fn refresh(&self) -> Result<()> {
        let games = self.store.list_active_games().await?;
        self.guard().replace_all(games);
        Ok(())
    }

    /// Apply a score delta to one team of an active team game.
    pub async fn apply_score_delta(
        &self,
        game_id: i64,
        participant_index: usize,
        delta: i64,
    ) -> Result<CurrentScores> {
        self.check_target(game_id, GameType::Team, participant_index)?;

        let scores = self
            .store
            .apply_score_delta(game_id, participant_index, delta)
            .await?;
        self.guard().adopt_scores(game_id, scores.clone());

        Ok(scores)
    }

    /// Record one player's finish time on an active individual game. The
    /// text is transmitted verbatim; an empty string clears the time, and
    /// anything else must parse as seconds before the store is contacted.
    pub async fn set_participant_time(
        &self,
        game_id: i64,
        participant_index: usize,
        time: &str,
    ) -> Result<CurrentScores> {
        self.check_target(game_id, GameType::Individual, participant_index)?;
        if !time.is_empty() {
            FinishTime::parse(time)?;
        }

        let scores = self
            .store
            .set_participant_time(game_id, participant_index, time)
            .await?;
        self.guard().adopt_scores(game_id, scores.clone());

        Ok(scores)
    }

    /// Resolve a winner from the cached scores and declare it. On success
    /// the game's lifecycle ends: it leaves the active set (and any
    /// matching selection). On failure the set is untouched.
    pub async fn declare_winner(&self, game_id: i64) -> Result<Winner> {
        let (game_type, participants) = {
            let guard = self.guard();
            let game = guard
                .get(game_id)
                .ok_or_else(|| not_active(game_id))?;
            (game.game_type, game.current_scores.participants.clone())
        };

        let winner = resolve_winner(game_type, &participants)?;
        self.store.declare_winner(game_id, &winner).await?;

        self.guard().remove(game_id);
        info!("Winner declared for game {game_id}: {}", winner.name);

        Ok(winner)
    }

    fn check_target(
        &self,
        game_id: i64,
        expected: GameType,
        participant_index: usize,
    ) -> Result<()> {
        let guard = self.guard();
        let game = guard
            .get(game_id)
            .ok_or_else(|| not_active(game_id))?;

        if game.game_type != expected {
            let message = match expected {
                GameType::Team => "This game is not a team event",
                GameType::Individual => "This game is not an individual event",
            };
            return Err(Error::validation(message));
        }

        let count = game.current_scores.participants.len();
        if participant_index >= count {
            return Err(Error::validation(format!(
                "Participant index {participant_index} out of range ({count} participants)"
            )));
        }

        Ok(())
    }

    fn guard(&self) -> MutexGuard<'_, ActiveGamesState> {
        self.state.lock().expect("active games lock poisoned")
    }
}

fn not_active(game_id: i64) -> Error {
    Error::validation(format!("Game {game_id} is not in the active set"))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::domain::models::{
        ActiveGame, Game, GameCategory, GameStatus, GameType, Participant,
    };
    use crate::state::active_games;

    use super::*;

    /// In-memory score store: answers from a canned active-game list and
    /// counts declarations, so tests can pin down exactly what reached the
    /// server.
    struct MemoryStore {
        games: Mutex<Vec<ActiveGame>>,
        declared: AtomicUsize,
        fail_mutations: bool,
    }

    impl MemoryStore {
        fn new(games: Vec<ActiveGame>) -> Self {
            Self {
                games: Mutex::new(games),
                declared: AtomicUsize::new(0),
                fail_mutations: false,
            }
        }

        fn failing(games: Vec<ActiveGame>) -> Self {
            Self {
                fail_mutations: true,
                ..Self::new(games)
            }
        }

        fn declared(&self) -> usize {
            self.declared.load(Ordering::SeqCst)
        }

        fn server_error(&self) -> Result<()> {
            if self.fail_mutations {
                Err(Error::Api {
                    status: 500,
                    detail: "store is down".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ScoreStore for MemoryStore {
        async fn list_active_games(&self) -> Result<Vec<ActiveGame>> {
            Ok(self.games.lock().expect("games lock").clone())
        }

        async fn current_scores(&self, game_id: i64) -> Result<CurrentScores> {
            let games = self.games.lock().expect("games lock");
            games
                .iter()
                .find(|game| game.id == game_id)
                .map(|game| game.current_scores.clone())
                .ok_or_else(|| Error::validation("unknown game"))
        }

        async fn apply_score_delta(
            &self,
            game_id: i64,
            participant_index: usize,
            delta: i64,
        ) -> Result<CurrentScores> {
            self.server_error()?;
            let mut games = self.games.lock().expect("games lock");
            let game = games
                .iter_mut()
                .find(|game| game.id == game_id)
                .ok_or_else(|| Error::validation("unknown game"))?;

            // The server applies its own arithmetic (clamping at zero), so
            // the returned value is not necessarily `old + delta`.
            let entry = &mut game.current_scores.participants[participant_index];
            entry.score = Some((entry.score.unwrap_or(0) + delta).max(0));
            Ok(game.current_scores.clone())
        }

        async fn set_participant_time(
            &self,
            game_id: i64,
            participant_index: usize,
            time: &str,
        ) -> Result<CurrentScores> {
            self.server_error()?;
            let mut games = self.games.lock().expect("games lock");
            let game = games
                .iter_mut()
                .find(|game| game.id == game_id)
                .ok_or_else(|| Error::validation("unknown game"))?;

            game.current_scores.participants[participant_index].time = Some(time.to_string());
            Ok(game.current_scores.clone())
        }

        async fn declare_winner(&self, _game_id: i64, _winner: &Winner) -> Result<()> {
            self.server_error()?;
            self.declared.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn team_game(id: i64, scores: &[(&str, i64)]) -> ActiveGame {
        game(
            id,
            GameType::Team,
            scores
                .iter()
                .map(|(name, score)| Participant::team(*name, *score))
                .collect(),
        )
    }

    fn individual_game(id: i64, times: &[(&str, Option<&str>)]) -> ActiveGame {
        game(
            id,
            GameType::Individual,
            times
                .iter()
                .map(|(name, time)| Participant::runner(*name, *time))
                .collect(),
        )
    }

    fn game(id: i64, game_type: GameType, participants: Vec<Participant>) -> ActiveGame {
        ActiveGame {
            id,
            game: Game {
                id,
                icon: "🏃".to_string(),
                local_name: format!("game-{id}"),
                english_name: format!("game-{id}"),
                category: GameCategory::Main,
                created_at: None,
            },
            scheduled_time: "16:00".to_string(),
            date: "2026-08-02".to_string(),
            venue: "East Field".to_string(),
            game_type,
            status: GameStatus::Playing,
            current_scores: CurrentScores { participants },
        }
    }

    async fn controller_with(
        games: Vec<ActiveGame>,
    ) -> ScoreUpdateController<MemoryStore> {
        let controller =
            ScoreUpdateController::new(MemoryStore::new(games), active_games::shared());
        controller.refresh().await.expect("initial refresh");
        controller
    }

    #[tokio::test]
    async fn score_delta_adopts_the_server_value_not_local_arithmetic() {
        // Server clamps at zero, so -1 on a zero score stays zero: adopting
        // the response must never reproduce `old + delta` locally.
        let controller = controller_with(vec![team_game(1, &[("Red", 0), ("Blue", 3)])]).await;

        let scores = controller
            .apply_score_delta(1, 0, -1)
            .await
            .expect("delta applies");
        assert_eq!(scores.participants[0].score, Some(0));

        let cached = controller.state().lock().expect("lock").get(1).cloned();
        assert_eq!(
            cached.expect("cached").current_scores.participants[0].score,
            Some(0)
        );
    }

    #[tokio::test]
    async fn score_delta_checks_game_type_index_and_membership() {
        let controller = controller_with(vec![
            team_game(1, &[("Red", 0)]),
            individual_game(2, &[("X", None)]),
        ])
        .await;

        assert!(
            controller
                .apply_score_delta(99, 0, 1)
                .await
                .expect_err("unknown game")
                .is_validation()
        );
        assert!(
            controller
                .apply_score_delta(2, 0, 1)
                .await
                .expect_err("individual game")
                .is_validation()
        );
        assert!(
            controller
                .apply_score_delta(1, 5, 1)
                .await
                .expect_err("index out of range")
                .is_validation()
        );
    }

    #[tokio::test]
    async fn failed_delta_leaves_the_cache_untouched() {
        let store = MemoryStore::failing(vec![team_game(1, &[("Red", 4)])]);
        let controller = ScoreUpdateController::new(store, active_games::shared());
        controller.refresh().await.expect("refresh");

        let err = controller
            .apply_score_delta(1, 0, 5)
            .await
            .expect_err("server down");
        assert_eq!(err.to_string(), "store is down");

        let cached = controller.state().lock().expect("lock").get(1).cloned();
        assert_eq!(
            cached.expect("cached").current_scores.participants[0].score,
            Some(4)
        );
    }

    #[tokio::test]
    async fn times_are_stored_verbatim_and_validated_first() {
        let controller = controller_with(vec![individual_game(3, &[("X", None)])]).await;

        let scores = controller
            .set_participant_time(3, 0, "12.5s")
            .await
            .expect("time records");
        assert_eq!(scores.participants[0].time.as_deref(), Some("12.5s"));

        let again = controller
            .store
            .current_scores(3)
            .await
            .expect("re-read");
        assert_eq!(again.participants[0].time.as_deref(), Some("12.5s"));

        // Malformed input never reaches the store.
        assert!(
            controller
                .set_participant_time(3, 0, "fast")
                .await
                .expect_err("rejected")
                .is_validation()
        );
        // Clearing is always allowed.
        controller
            .set_participant_time(3, 0, "")
            .await
            .expect("clear time");
    }

    #[tokio::test]
    async fn declared_winner_leaves_the_active_set() {
        let controller = controller_with(vec![
            team_game(7, &[("A", 10), ("B", 15), ("C", 15)]),
            team_game(8, &[("D", 1)]),
        ])
        .await;

        let winner = controller.declare_winner(7).await.expect("declares");
        assert_eq!(winner.name, "B");
        assert_eq!(controller.store.declared(), 1);

        let guard = controller.state().lock().expect("lock");
        assert!(!guard.contains(7));
        assert!(guard.contains(8));
    }

    #[tokio::test]
    async fn winner_with_no_recorded_times_fails_without_a_submission() {
        let controller =
            controller_with(vec![individual_game(4, &[("X", None), ("Y", Some(""))])]).await;

        let err = controller.declare_winner(4).await.expect_err("no times");
        assert!(err.is_validation());
        assert_eq!(controller.store.declared(), 0);

        let guard = controller.state().lock().expect("lock");
        assert!(guard.contains(4));
    }

    #[tokio::test]
    async fn failed_declaration_keeps_the_active_set_as_it_was() {
        let store = MemoryStore::failing(vec![team_game(7, &[("A", 2), ("B", 1)])]);
        let controller = ScoreUpdateController::new(store, active_games::shared());
        controller.refresh().await.expect("refresh");

        let err = controller.declare_winner(7).await.expect_err("store down");
        assert_eq!(err.to_string(), "store is down");
        assert_eq!(controller.store.declared(), 0);

        let guard = controller.state().lock().expect("lock");
        assert!(guard.contains(7));
        assert_eq!(guard.len(), 1);
    }
}

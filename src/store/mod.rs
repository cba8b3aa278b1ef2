use async_trait::async_trait;

use crate::domain::models::{ActiveGame, CurrentScores};
use crate::errors::Result;
use crate::scoring::winner::Winner;

/// The operation set the external score store exposes to this client.
///
/// The backend owns the authoritative scores; every mutating operation
/// returns the full record for the caller to adopt wholesale. Production
/// code talks to the festival backend over HTTP ([`crate::api::live`]);
/// tests substitute an in-memory fake.
#[async_trait]
pub trait ScoreStore {
    /// All currently active games with their live scores.
    async fn list_active_games(&self) -> Result<Vec<ActiveGame>>;

    /// The current scoring snapshot for one game.
    async fn current_scores(&self, game_id: i64) -> Result<CurrentScores>;

    /// Add a (possibly negative) delta to one team's score.
    async fn apply_score_delta(
        &self,
        game_id: i64,
        participant_index: usize,
        delta: i64,
    ) -> Result<CurrentScores>;

    /// Record one player's finish time, verbatim.
    async fn set_participant_time(
        &self,
        game_id: i64,
        participant_index: usize,
        time: &str,
    ) -> Result<CurrentScores>;

    /// Mark the game finished with the given winner.
    async fn declare_winner(&self, game_id: i64, winner: &Winner) -> Result<()>;
}

use crate::domain::models::ScheduledGame;
use crate::errors::Result;
use crate::http::client::ApiClient;

use super::models::ScheduledGameCreate;

/// Create a league fixture: a two-team scheduled game tagged with a
/// tournament stage. Registration stays closed; the competing rosters are
/// referenced directly.
pub async fn create_match(
    api: &ApiClient,
    scheduled_game: &ScheduledGameCreate,
) -> Result<ScheduledGame> {
    api.post("/scheduled-games/league", scheduled_game).await
}

/// All league fixtures derived from one catalog game, in fixture order.
pub async fn matches_for_game(api: &ApiClient, game_id: i64) -> Result<Vec<ScheduledGame>> {
    api.get(&format!("/scheduled-games/league/{game_id}")).await
}

/// All fixtures of one tournament stage. Stages are free text ("semi
/// final"), so the path segment needs encoding.
pub async fn matches_by_stage(api: &ApiClient, stage: &str) -> Result<Vec<ScheduledGame>> {
    let encoded = urlencoding::encode(stage);
    api.get(&format!("/scheduled-games/league/stage/{encoded}"))
        .await
}

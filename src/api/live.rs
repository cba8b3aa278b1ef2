use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::{ActiveGame, CurrentScores};
use crate::errors::Result;
use crate::http::client::ApiClient;
use crate::scoring::winner::Winner;
use crate::store::ScoreStore;

use super::models::{
    DeclareWinnerRequest, DeclareWinnerResponse, GameStateResponse, LiveGame, ScoreUpdateRequest,
    TimeUpdateRequest,
};

pub async fn list_active_games(api: &ApiClient) -> Result<Vec<ActiveGame>> {
    api.get("/active-games/list").await
}

pub async fn game_state(api: &ApiClient, game_id: i64) -> Result<GameStateResponse> {
    api.get(&format!("/active-games/{game_id}/state")).await
}

pub async fn update_score(
    api: &ApiClient,
    game_id: i64,
    participant_index: usize,
    score_change: i64,
) -> Result<CurrentScores> {
    let request = ScoreUpdateRequest {
        participant_index,
        score_change,
    };
    let state: GameStateResponse = api
        .post(&format!("/active-games/{game_id}/update-score"), &request)
        .await?;
    Ok(state.current_scores)
}

pub async fn update_time(
    api: &ApiClient,
    game_id: i64,
    participant_index: usize,
    time: &str,
) -> Result<CurrentScores> {
    let request = TimeUpdateRequest {
        participant_index,
        time: time.to_string(),
    };
    let state: GameStateResponse = api
        .post(&format!("/active-games/{game_id}/update-time"), &request)
        .await?;
    Ok(state.current_scores)
}

pub async fn declare_winner(
    api: &ApiClient,
    game_id: i64,
    winner: &Winner,
) -> Result<DeclareWinnerResponse> {
    let request = DeclareWinnerRequest {
        winner_name: winner.name.clone(),
        winner_score: winner.score,
        winner_time: winner.time.clone(),
    };
    api.post(&format!("/active-games/{game_id}/declare-winner"), &request)
        .await
}

/// The public live view, already shaped for display.
pub async fn list_live_games(api: &ApiClient) -> Result<Vec<LiveGame>> {
    api.get("/live-games").await
}

pub async fn live_game_detail(api: &ApiClient, game_id: i64) -> Result<LiveGame> {
    api.get(&format!("/live-games/{game_id}")).await
}

/// The production score store: the festival backend reached over HTTP.
pub struct HttpScoreStore {
    api: Arc<ApiClient>,
}

impl HttpScoreStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ScoreStore for HttpScoreStore {
    async fn list_active_games(&self) -> Result<Vec<ActiveGame>> {
        list_active_games(&self.api).await
    }

    async fn current_scores(&self, game_id: i64) -> Result<CurrentScores> {
        Ok(game_state(&self.api, game_id).await?.current_scores)
    }

    async fn apply_score_delta(
        &self,
        game_id: i64,
        participant_index: usize,
        delta: i64,
    ) -> Result<CurrentScores> {
        update_score(&self.api, game_id, participant_index, delta).await
    }

    async fn set_participant_time(
        &self,
        game_id: i64,
        participant_index: usize,
        time: &str,
    ) -> Result<CurrentScores> {
        update_time(&self.api, game_id, participant_index, time).await
    }

    async fn declare_winner(&self, game_id: i64, winner: &Winner) -> Result<()> {
        declare_winner(&self.api, game_id, winner).await.map(|_| ())
    }
}

use crate::domain::models::GameCategory;
use crate::errors::Result;
use crate::http::client::ApiClient;

use super::models::{GameResultEntry, ResultsStats};

/// All completed games, most recent first.
pub async fn list_all(api: &ApiClient) -> Result<Vec<GameResultEntry>> {
    api.get("/results").await
}

pub async fn list_by_category(
    api: &ApiClient,
    category: GameCategory,
) -> Result<Vec<GameResultEntry>> {
    api.get(&format!("/results/category/{}", category.as_str()))
        .await
}

pub async fn get(api: &ApiClient, scheduled_game_id: i64) -> Result<GameResultEntry> {
    api.get(&format!("/results/{scheduled_game_id}")).await
}

pub async fn stats(api: &ApiClient) -> Result<ResultsStats> {
    api.get("/results/stats").await
}

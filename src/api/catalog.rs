use crate::domain::models::Game;
use crate::errors::Result;
use crate::http::client::ApiClient;

use super::models::{GameCreate, MessageResponse};

pub async fn list_games(api: &ApiClient) -> Result<Vec<Game>> {
    api.get("/games").await
}

pub async fn get_game(api: &ApiClient, game_id: i64) -> Result<Game> {
    api.get(&format!("/games/{game_id}")).await
}

pub async fn create_game(api: &ApiClient, game: &GameCreate) -> Result<Game> {
    api.post("/games", game).await
}

pub async fn delete_game(api: &ApiClient, game_id: i64) -> Result<MessageResponse> {
    api.delete(&format!("/games/{game_id}")).await
}

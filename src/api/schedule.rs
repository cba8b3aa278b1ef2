use crate::domain::models::ScheduledGame;
use crate::errors::Result;
use crate::http::client::ApiClient;

use super::models::{
    ActivationToggleResponse, MessageResponse, RegistrationToggleResponse, ScheduledGameCreate,
    ScheduledGameUpdate,
};

pub async fn list_all(api: &ApiClient) -> Result<Vec<ScheduledGame>> {
    api.get("/scheduled-games").await
}

/// Games currently being played.
pub async fn list_active(api: &ApiClient) -> Result<Vec<ScheduledGame>> {
    api.get("/scheduled-games/active").await
}

/// Games whose registration window is open.
pub async fn list_open_registration(api: &ApiClient) -> Result<Vec<ScheduledGame>> {
    api.get("/scheduled-games/open-registration").await
}

pub async fn get(api: &ApiClient, scheduled_game_id: i64) -> Result<ScheduledGame> {
    api.get(&format!("/scheduled-games/{scheduled_game_id}"))
        .await
}

/// Schedule a game. The backend starts it with registration open and the
/// live flag off.
pub async fn create(api: &ApiClient, scheduled_game: &ScheduledGameCreate) -> Result<ScheduledGame> {
    api.post("/scheduled-games", scheduled_game).await
}

pub async fn update(
    api: &ApiClient,
    scheduled_game_id: i64,
    update: &ScheduledGameUpdate,
) -> Result<ScheduledGame> {
    api.patch(&format!("/scheduled-games/{scheduled_game_id}"), update)
        .await
}

pub async fn toggle_activation(
    api: &ApiClient,
    scheduled_game_id: i64,
) -> Result<ActivationToggleResponse> {
    api.patch_empty(&format!("/scheduled-games/{scheduled_game_id}/activate"))
        .await
}

pub async fn toggle_registration(
    api: &ApiClient,
    scheduled_game_id: i64,
) -> Result<RegistrationToggleResponse> {
    api.patch_empty(&format!("/scheduled-games/{scheduled_game_id}/registration"))
        .await
}

pub async fn delete(api: &ApiClient, scheduled_game_id: i64) -> Result<MessageResponse> {
    api.delete(&format!("/scheduled-games/{scheduled_game_id}"))
        .await
}

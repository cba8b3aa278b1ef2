use crate::domain::models::{IndividualRegistration, TeamRegistration};
use crate::errors::Result;
use crate::http::client::ApiClient;

use super::models::{
    IndividualRegistrationCreate, MessageResponse, PlayerUpdate, TeamRegistrationCreate,
};

// --- Teams ---

pub async fn list_teams(api: &ApiClient, scheduled_game_id: i64) -> Result<Vec<TeamRegistration>> {
    api.get(&format!("/team-registrations/{scheduled_game_id}"))
        .await
}

/// Register a team. The window, game type, capacity and duplicate-name
/// checks are the backend's; its detail message comes back on rejection.
pub async fn register_team(
    api: &ApiClient,
    registration: &TeamRegistrationCreate,
) -> Result<TeamRegistration> {
    api.post("/team-registrations", registration).await
}

pub async fn delete_team(api: &ApiClient, registration_id: i64) -> Result<MessageResponse> {
    api.delete(&format!("/team-registrations/{registration_id}"))
        .await
}

pub async fn add_player(
    api: &ApiClient,
    registration_id: i64,
    player_name: &str,
) -> Result<TeamRegistration> {
    let update = PlayerUpdate {
        player_name: player_name.to_string(),
    };
    api.post(
        &format!("/team-registrations/{registration_id}/add-player"),
        &update,
    )
    .await
}

pub async fn edit_player(
    api: &ApiClient,
    registration_id: i64,
    player_index: usize,
    player_name: &str,
) -> Result<TeamRegistration> {
    let update = PlayerUpdate {
        player_name: player_name.to_string(),
    };
    api.patch(
        &format!("/team-registrations/{registration_id}/edit-player/{player_index}"),
        &update,
    )
    .await
}

pub async fn remove_player(
    api: &ApiClient,
    registration_id: i64,
    player_index: usize,
) -> Result<MessageResponse> {
    api.delete(&format!(
        "/team-registrations/{registration_id}/delete-player/{player_index}"
    ))
    .await
}

// --- Individuals ---

pub async fn list_individuals(
    api: &ApiClient,
    scheduled_game_id: i64,
) -> Result<Vec<IndividualRegistration>> {
    api.get(&format!("/individual-registrations/{scheduled_game_id}"))
        .await
}

pub async fn register_individual(
    api: &ApiClient,
    registration: &IndividualRegistrationCreate,
) -> Result<IndividualRegistration> {
    api.post("/individual-registrations", registration).await
}

pub async fn delete_individual(api: &ApiClient, registration_id: i64) -> Result<MessageResponse> {
    api.delete(&format!("/individual-registrations/{registration_id}"))
        .await
}

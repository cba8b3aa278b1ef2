use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::models::{
    CurrentScores, Game, GameCategory, GameStatus, GameType, Participant, WinnerData,
};

// --- Auth ---

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthVerifyResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{"message": ...}` acknowledgement used by delete/logout
/// endpoints.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// --- Catalog ---

#[derive(Debug, Serialize)]
pub struct GameCreate {
    pub icon: String,
    pub local_name: String,
    pub english_name: String,
    pub category: GameCategory,
}

// --- Scheduling ---

#[derive(Debug, Serialize)]
pub struct ScheduledGameCreate {
    pub game_id: i64,
    pub scheduled_time: String,
    pub date: String,
    pub venue: String,
    pub participants: Vec<String>,
    pub game_type: GameType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_teams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players_per_team: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_league: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team1_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team2_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_game_id: Option<i64>,
}

/// Partial update; only the populated fields travel.
#[derive(Debug, Default, Serialize)]
pub struct ScheduledGameUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_teams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players_per_team: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ActivationToggleResponse {
    pub id: i64,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct RegistrationToggleResponse {
    pub id: i64,
    pub registration_open: bool,
}

// --- Registrations ---

#[derive(Debug, Serialize)]
pub struct TeamRegistrationCreate {
    pub scheduled_game_id: i64,
    pub team_name: String,
    pub captain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captain_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captain_email: Option<String>,
    pub players: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IndividualRegistrationCreate {
    pub scheduled_game_id: i64,
    pub player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PlayerUpdate {
    pub player_name: String,
}

// --- Live scoring ---

#[derive(Debug, Serialize)]
pub struct ScoreUpdateRequest {
    pub participant_index: usize,
    pub score_change: i64,
}

#[derive(Debug, Serialize)]
pub struct TimeUpdateRequest {
    pub participant_index: usize,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct DeclareWinnerRequest {
    pub winner_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_time: Option<String>,
}

/// The per-game state row returned by the live-scoring endpoints.
#[derive(Debug, Deserialize)]
pub struct GameStateResponse {
    #[serde(default)]
    pub current_scores: CurrentScores,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub winner_data: Option<WinnerData>,
}

#[derive(Debug, Deserialize)]
pub struct DeclareWinnerResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub winner: WinnerData,
}

/// Entry of the public live view (camelCase on the wire, unlike the admin
/// listing).
#[derive(Debug, Clone, Deserialize)]
pub struct LiveGame {
    pub id: i64,
    pub game: Game,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(default)]
    pub date: String,
    pub venue: String,
    #[serde(rename = "gameType")]
    pub game_type: GameType,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

// --- Results ---

/// Name and score of a team event's winner or runner-up.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamResultSummary {
    pub name: String,
    #[serde(default)]
    pub score: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PodiumEntry {
    pub position: usize,
    pub name: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub medal: Option<String>,
}

/// One completed game as served by the results endpoints. Team events
/// carry `winner`/`runner_up`, individual events carry the podium list.
#[derive(Debug, Clone, Deserialize)]
pub struct GameResultEntry {
    pub id: i64,
    pub scheduled_game_id: i64,
    pub game: Game,
    #[serde(default)]
    pub date: String,
    pub venue: String,
    pub game_type: GameType,
    #[serde(default)]
    pub winner_data: Option<WinnerData>,
    #[serde(default)]
    pub current_scores: CurrentScores,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub winner: Option<TeamResultSummary>,
    #[serde(default)]
    pub runner_up: Option<TeamResultSummary>,
    #[serde(default)]
    pub results: Option<Vec<PodiumEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultsStats {
    pub total_games: i64,
    pub team_events: i64,
    pub individual_events: i64,
    pub total_participants: i64,
    #[serde(default)]
    pub by_category: HashMap<String, i64>,
}

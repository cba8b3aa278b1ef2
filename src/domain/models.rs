use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog entry for one festival game. Created by admins, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub icon: String,
    /// Display name in the festival's local language.
    pub local_name: String,
    pub english_name: String,
    pub category: GameCategory,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCategory {
    Main,
    Kids,
    Women,
    Men,
    Fun,
}

impl GameCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCategory::Main => "main",
            GameCategory::Kids => "kids",
            GameCategory::Women => "women",
            GameCategory::Men => "men",
            GameCategory::Fun => "fun",
        }
    }
}

impl FromStr for GameCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" => Ok(GameCategory::Main),
            "kids" => Ok(GameCategory::Kids),
            "women" => Ok(GameCategory::Women),
            "men" => Ok(GameCategory::Men),
            "fun" => Ok(GameCategory::Fun),
            other => Err(format!(
                "unknown category \"{other}\" (expected main, kids, women, men or fun)"
            )),
        }
    }
}

impl fmt::Display for GameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a scheduled game is scored: teams accumulate points, individuals
/// record finish times (lower wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Team,
    Individual,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Team => "team",
            GameType::Individual => "individual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameType::Team => "Team Event",
            GameType::Individual => "Individual Event",
        }
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "team" => Ok(GameType::Team),
            "individual" => Ok(GameType::Individual),
            other => Err(format!(
                "unknown game type \"{other}\" (expected team or individual)"
            )),
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Completed,
}

/// One instance of a catalog game with a date, venue and its own
/// registration and live-scoring lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub id: i64,
    pub game_id: i64,
    /// Joined catalog entry, present on list/detail responses.
    #[serde(rename = "games", default)]
    pub game: Option<Game>,
    pub scheduled_time: String,
    pub date: String,
    pub venue: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub game_type: GameType,
    pub is_active: bool,
    pub registration_open: bool,
    #[serde(default)]
    pub max_teams: Option<u32>,
    #[serde(default)]
    pub max_players_per_team: Option<u32>,
    #[serde(default)]
    pub is_league: bool,
    #[serde(default)]
    pub league_stage: Option<String>,
    #[serde(default)]
    pub team1_id: Option<i64>,
    #[serde(default)]
    pub team2_id: Option<i64>,
    #[serde(default)]
    pub parent_game_id: Option<i64>,
    /// Joined league team rosters, filled in on league match responses.
    #[serde(default)]
    pub team1: Option<TeamRegistration>,
    #[serde(default)]
    pub team2: Option<TeamRegistration>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One entry of a game's live scores. Exactly one scoring mode is in use
/// per game: `score` for team events, `time` for individual events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Participant {
    pub fn team(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score: Some(score),
            time: None,
        }
    }

    pub fn runner(name: impl Into<String>, time: Option<&str>) -> Self {
        Self {
            name: name.into(),
            score: None,
            time: time.map(str::to_string),
        }
    }

    /// The recorded finish time, if any. An empty string counts as not
    /// recorded.
    pub fn recorded_time(&self) -> Option<&str> {
        self.time.as_deref().filter(|t| !t.is_empty())
    }
}

/// The live, server-owned scoring snapshot for one scheduled game. The
/// client's copy is transient and replaced wholesale on every response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentScores {
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// An active scheduled game together with its live scores, as returned by
/// the score store's active-games listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveGame {
    pub id: i64,
    pub game: Game,
    pub scheduled_time: String,
    #[serde(default)]
    pub date: String,
    pub venue: String,
    pub game_type: GameType,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub current_scores: CurrentScores,
}

/// The declared outcome stored with a completed game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerData {
    pub name: String,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub declared_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRegistration {
    pub id: i64,
    pub scheduled_game_id: i64,
    pub team_name: String,
    pub captain_name: String,
    #[serde(default)]
    pub captain_phone: Option<String>,
    #[serde(default)]
    pub captain_email: Option<String>,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualRegistration {
    pub id: i64,
    pub scheduled_game_id: i64,
    pub player_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
}

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use log::warn;

use crate::api::models::{
    GameCreate, IndividualRegistrationCreate, ScheduledGameCreate, ScheduledGameUpdate,
    TeamRegistrationCreate,
};
use crate::api::{auth, catalog, league, registrations, schedule};
use crate::domain::models::ScheduledGame;
use crate::errors::Error;
use crate::http::client::ApiClient;
use crate::state::session::{Session, SessionStore};

/// Which slice of the schedule to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFilter {
    All,
    Active,
    OpenRegistration,
}

/// One-shot admin and registration flows over the backend API. Business
/// rules (windows, capacities, duplicates) live server-side; this service
/// relays the outcome.
pub struct AdminService {
    api: Arc<ApiClient>,
    session: SessionStore,
}

impl AdminService {
    pub fn new(api: Arc<ApiClient>, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Catalog and schedule mutations sit behind the admin login, like the
    /// protected panel. Registration flows stay public.
    fn require_session(&self) -> crate::errors::Result<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(Error::NotAuthenticated)
        }
    }

    // --- Auth ---

    pub async fn login(&self, username: &str, password: Option<String>) -> Result<()> {
        let password = match password {
            Some(password) => password,
            None => prompt_password()?,
        };

        let response = auth::login(&self.api, username, &password).await?;
        self.session.save(&Session {
            token: response.token,
            username: username.to_string(),
            logged_in_at: Utc::now(),
        })?;

        println!("{}", response.message);
        Ok(())
    }

    /// Best-effort server-side invalidation; the local token goes away
    /// regardless of what the backend says.
    pub async fn logout(&self) -> Result<()> {
        if self.session.is_authenticated()
            && let Err(e) = auth::logout(&self.api).await
        {
            warn!("Logout request failed: {e}");
        }

        self.session.clear()?;
        println!("Logged out");
        Ok(())
    }

    pub async fn whoami(&self) -> Result<()> {
        match self.session.load()? {
            None => println!("Not logged in"),
            Some(session) => {
                let verified = auth::verify(&self.api).await?;
                let status = if verified.authenticated {
                    "valid".green()
                } else {
                    "invalid".red()
                };
                println!("{} (session {})", session.username, status);
            }
        }
        Ok(())
    }

    // --- Catalog ---

    pub async fn list_games(&self) -> Result<()> {
        let games = catalog::list_games(&self.api).await?;
        if games.is_empty() {
            println!("No games in the catalog");
            return Ok(());
        }

        for game in games {
            println!(
                "{:>4}  {} {:<20} {:<20} {}",
                game.id,
                game.icon,
                game.local_name,
                game.english_name.dimmed(),
                game.category
            );
        }
        Ok(())
    }

    pub async fn add_game(&self, game: GameCreate) -> Result<()> {
        self.require_session()?;
        let created = catalog::create_game(&self.api, &game).await?;
        println!("Added game {} ({})", created.id, created.local_name);
        Ok(())
    }

    pub async fn remove_game(&self, game_id: i64) -> Result<()> {
        self.require_session()?;
        let response = catalog::delete_game(&self.api, game_id).await?;
        println!(
            "{}",
            response.message.unwrap_or_else(|| "Game deleted".to_string())
        );
        Ok(())
    }

    // --- Schedule ---

    pub async fn schedule_list(&self, filter: ScheduleFilter) -> Result<()> {
        let games = match filter {
            ScheduleFilter::All => schedule::list_all(&self.api).await?,
            ScheduleFilter::Active => schedule::list_active(&self.api).await?,
            ScheduleFilter::OpenRegistration => {
                schedule::list_open_registration(&self.api).await?
            }
        };

        if games.is_empty() {
            println!("Nothing scheduled");
            return Ok(());
        }
        for game in &games {
            println!("{}", format_scheduled(game));
        }
        Ok(())
    }

    pub async fn schedule_show(&self, scheduled_game_id: i64) -> Result<()> {
        let game = schedule::get(&self.api, scheduled_game_id).await?;
        println!("{}", format_scheduled(&game));
        if !game.participants.is_empty() {
            println!("   participants: {}", game.participants.join(", "));
        }
        Ok(())
    }

    pub async fn schedule_add(&self, scheduled_game: ScheduledGameCreate) -> Result<()> {
        self.require_session()?;
        let created = schedule::create(&self.api, &scheduled_game).await?;
        println!("Scheduled game {}:", created.id);
        println!("{}", format_scheduled(&created));
        Ok(())
    }

    pub async fn reschedule(
        &self,
        scheduled_game_id: i64,
        update: ScheduledGameUpdate,
    ) -> Result<()> {
        self.require_session()?;
        let updated = schedule::update(&self.api, scheduled_game_id, &update).await?;
        println!("{}", format_scheduled(&updated));
        Ok(())
    }

    pub async fn toggle_activation(&self, scheduled_game_id: i64) -> Result<()> {
        self.require_session()?;
        let response = schedule::toggle_activation(&self.api, scheduled_game_id).await?;
        let state = if response.is_active {
            "live".green().bold()
        } else {
            "inactive".dimmed()
        };
        println!("Game {} is now {state}", response.id);
        Ok(())
    }

    pub async fn toggle_registration(&self, scheduled_game_id: i64) -> Result<()> {
        self.require_session()?;
        let response = schedule::toggle_registration(&self.api, scheduled_game_id).await?;
        let state = if response.registration_open {
            "open".green()
        } else {
            "closed".red()
        };
        println!("Registration for game {} is now {state}", response.id);
        Ok(())
    }

    pub async fn schedule_remove(&self, scheduled_game_id: i64) -> Result<()> {
        self.require_session()?;
        let response = schedule::delete(&self.api, scheduled_game_id).await?;
        println!(
            "{}",
            response
                .message
                .unwrap_or_else(|| "Scheduled game deleted".to_string())
        );
        Ok(())
    }

    // --- Registrations ---

    pub async fn list_teams(&self, scheduled_game_id: i64) -> Result<()> {
        let teams = registrations::list_teams(&self.api, scheduled_game_id).await?;
        if teams.is_empty() {
            println!("No teams registered");
            return Ok(());
        }

        for team in teams {
            println!(
                "{:>4}  {:<20} captain {} ({} players)",
                team.id,
                team.team_name.bold(),
                team.captain_name,
                team.players.len()
            );
            if !team.players.is_empty() {
                println!("      {}", team.players.join(", ").dimmed());
            }
        }
        Ok(())
    }

    pub async fn register_team(&self, registration: TeamRegistrationCreate) -> Result<()> {
        let created = registrations::register_team(&self.api, &registration).await?;
        println!(
            "Registered team {} (registration {})",
            created.team_name, created.id
        );
        Ok(())
    }

    pub async fn remove_team(&self, registration_id: i64) -> Result<()> {
        let response = registrations::delete_team(&self.api, registration_id).await?;
        println!(
            "{}",
            response
                .message
                .unwrap_or_else(|| "Registration deleted".to_string())
        );
        Ok(())
    }

    pub async fn add_player(&self, registration_id: i64, player_name: &str) -> Result<()> {
        let team = registrations::add_player(&self.api, registration_id, player_name).await?;
        println!(
            "{} now has {} players: {}",
            team.team_name,
            team.players.len(),
            team.players.join(", ")
        );
        Ok(())
    }

    pub async fn edit_player(
        &self,
        registration_id: i64,
        player_index: usize,
        player_name: &str,
    ) -> Result<()> {
        let team =
            registrations::edit_player(&self.api, registration_id, player_index, player_name)
                .await?;
        println!("{} roster: {}", team.team_name, team.players.join(", "));
        Ok(())
    }

    pub async fn remove_player(&self, registration_id: i64, player_index: usize) -> Result<()> {
        let response =
            registrations::remove_player(&self.api, registration_id, player_index).await?;
        println!(
            "{}",
            response
                .message
                .unwrap_or_else(|| "Player removed".to_string())
        );
        Ok(())
    }

    pub async fn list_individuals(&self, scheduled_game_id: i64) -> Result<()> {
        let players = registrations::list_individuals(&self.api, scheduled_game_id).await?;
        if players.is_empty() {
            println!("No players registered");
            return Ok(());
        }

        for player in players {
            let age = player
                .age
                .map(|age| format!(" ({age})"))
                .unwrap_or_default();
            println!("{:>4}  {}{age}", player.id, player.player_name);
        }
        Ok(())
    }

    pub async fn register_individual(
        &self,
        registration: IndividualRegistrationCreate,
    ) -> Result<()> {
        let created = registrations::register_individual(&self.api, &registration).await?;
        println!(
            "Registered {} (registration {})",
            created.player_name, created.id
        );
        Ok(())
    }

    pub async fn remove_individual(&self, registration_id: i64) -> Result<()> {
        let response = registrations::delete_individual(&self.api, registration_id).await?;
        println!(
            "{}",
            response
                .message
                .unwrap_or_else(|| "Registration deleted".to_string())
        );
        Ok(())
    }

    // --- League ---

    pub async fn league_add(&self, fixture: ScheduledGameCreate) -> Result<()> {
        self.require_session()?;
        let created = league::create_match(&self.api, &fixture).await?;
        println!("Created league match {}:", created.id);
        println!("{}", format_scheduled(&created));
        Ok(())
    }

    pub async fn league_for_game(&self, game_id: i64) -> Result<()> {
        let matches = league::matches_for_game(&self.api, game_id).await?;
        self.render_league(matches)
    }

    pub async fn league_by_stage(&self, stage: &str) -> Result<()> {
        let matches = league::matches_by_stage(&self.api, stage).await?;
        self.render_league(matches)
    }

    fn render_league(&self, matches: Vec<ScheduledGame>) -> Result<()> {
        if matches.is_empty() {
            println!("No league matches");
            return Ok(());
        }

        for fixture in &matches {
            let stage = fixture.league_stage.as_deref().unwrap_or("unstaged");
            let team1 = fixture
                .team1
                .as_ref()
                .map(|t| t.team_name.as_str())
                .unwrap_or("TBD");
            let team2 = fixture
                .team2
                .as_ref()
                .map(|t| t.team_name.as_str())
                .unwrap_or("TBD");
            println!(
                "{:>4}  {:<12} {} vs {} — {} {}",
                fixture.id,
                stage,
                team1.bold(),
                team2.bold(),
                fixture.date,
                fixture.scheduled_time
            );
        }
        Ok(())
    }
}

fn format_scheduled(game: &ScheduledGame) -> String {
    let name = game
        .game
        .as_ref()
        .map(|g| format!("{} {}", g.icon, g.local_name))
        .unwrap_or_else(|| format!("game #{}", game.game_id));

    let mut flags = Vec::new();
    if game.is_active {
        flags.push("live");
    }
    if game.registration_open {
        flags.push("registration open");
    }
    if game.is_league {
        flags.push("league");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", flags.join(", "))
    };

    format!(
        "{:>4}  {name} — {} {} · {} · {}{flags}",
        game.id,
        game.date,
        game.scheduled_time,
        game.venue,
        game.game_type.label()
    )
}

fn prompt_password() -> Result<String> {
    print!("Password: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut password = String::new();
    io::stdin()
        .lock()
        .read_line(&mut password)
        .context("Failed to read password")?;

    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use crate::domain::models::GameType;

    use super::*;

    #[test]
    fn scheduled_line_carries_the_lifecycle_flags() {
        let game = ScheduledGame {
            id: 3,
            game_id: 9,
            game: None,
            scheduled_time: "14:30".to_string(),
            date: "2026-08-02".to_string(),
            venue: "River Side".to_string(),
            participants: vec![],
            game_type: GameType::Team,
            is_active: true,
            registration_open: false,
            max_teams: None,
            max_players_per_team: None,
            is_league: true,
            league_stage: Some("final".to_string()),
            team1_id: None,
            team2_id: None,
            parent_game_id: None,
            team1: None,
            team2: None,
            created_at: None,
        };

        let line = format_scheduled(&game);
        assert!(line.contains("game #9"));
        assert!(line.contains("[live, league]"));
        assert!(line.contains("Team Event"));
    }
}

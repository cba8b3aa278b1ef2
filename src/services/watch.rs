use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::api::live::HttpScoreStore;
use crate::config::settings::LiveSettings;
use crate::domain::models::{ActiveGame, GameType, Participant};
use crate::http::client::ApiClient;
use crate::scoring::ranking::{individual_leaderboard, team_leaderboard};
use crate::state::active_games::{self, SharedActiveGames};

use super::poller::LivePoller;

/// The live public view: a polling task refreshing the active-game set plus
/// a terminal rendering of the leaderboards on every refresh.
pub struct WatchService {
    store: Arc<HttpScoreStore>,
    state: SharedActiveGames,
    period: Duration,
}

impl WatchService {
    pub fn new(api: Arc<ApiClient>, settings: &LiveSettings, interval_secs: Option<u64>) -> Self {
        let period = Duration::from_secs(interval_secs.unwrap_or(settings.refresh_interval_secs));
        Self {
            store: Arc::new(HttpScoreStore::new(api)),
            state: active_games::shared(),
            period,
        }
    }

    pub async fn run(&self) -> Result<()> {
        info!(
            "Watching live games, refreshing every {}s",
            self.period.as_secs()
        );
        println!(
            "{} {}",
            "Live games".bold(),
            "(refreshes automatically, Ctrl-C to exit)".dimmed()
        );

        let poller = LivePoller::spawn(self.store.clone(), self.state.clone(), self.period);
        let mut updates = poller.updates();

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.render();
                }
            }
        }

        poller.stop().await;
        Ok(())
    }

    fn render(&self) {
        let guard = self.state.lock().expect("active games lock poisoned");

        if guard.is_empty() {
            println!("\n{}", "No active games right now".dimmed());
            return;
        }

        for game in guard.games() {
            render_active_game(game);
        }
    }
}

/// Print one active game's header and leaderboard.
pub fn render_active_game(game: &ActiveGame) {
    println!(
        "\n{} {}  {}",
        game.game.icon,
        game.game.local_name.bold(),
        "LIVE".red().bold()
    );
    println!(
        "   {} · {} · {} · {}",
        game.game.english_name.dimmed(),
        game.date,
        game.scheduled_time,
        game.venue
    );

    render_scores(game.game_type, &game.current_scores.participants);
}

/// Leaderboard body shared by the watch view and the one-shot snapshots.
pub fn render_scores(game_type: GameType, participants: &[Participant]) {
    match game_type {
        GameType::Team => {
            for row in team_leaderboard(participants) {
                println!(
                    "   {:>2}. {:<24} {}",
                    row.position,
                    row.name,
                    row.score.to_string().yellow().bold()
                );
            }
        }
        GameType::Individual => match individual_leaderboard(participants) {
            Ok(board) => {
                for row in board.finished {
                    let medal = row.medal.map(|m| m.glyph()).unwrap_or("  ");
                    println!(
                        "   {:>2}. {} {:<22} {}",
                        row.position,
                        medal,
                        row.name,
                        row.time.yellow().bold()
                    );
                }
                if !board.pending.is_empty() {
                    println!("   {} {}", "pending:".dimmed(), board.pending.join(", "));
                }
            }
            Err(e) => println!("   {}", e.to_string().red()),
        },
    }
}

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use crate::api::live::{self, HttpScoreStore};
use crate::domain::models::GameType;
use crate::http::client::ApiClient;
use crate::scoring::controller::ScoreUpdateController;
use crate::scoring::winner::Winner;
use crate::state::active_games;

use super::watch::render_scores;

/// One-shot admin scoring flows: each command refreshes the active set,
/// runs one controller operation and prints the outcome.
pub struct ScoreboardService {
    api: Arc<ApiClient>,
    controller: ScoreUpdateController<HttpScoreStore>,
}

impl ScoreboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        let store = HttpScoreStore::new(api.clone());
        Self {
            api,
            controller: ScoreUpdateController::new(store, active_games::shared()),
        }
    }

    /// Print the active games with the participant indices the scoring
    /// commands take.
    pub async fn show_active(&self) -> Result<()> {
        self.controller.refresh().await?;

        let guard = self.controller.state().lock().expect("lock");
        if guard.is_empty() {
            println!("No active games");
            return Ok(());
        }

        for game in guard.games() {
            println!(
                "\n{} {} (game {}) — {}",
                game.game.icon,
                game.game.local_name.bold(),
                game.id,
                game.game_type.label()
            );
            println!("   {} · {} · {}", game.date, game.scheduled_time, game.venue);

            for (index, participant) in game.current_scores.participants.iter().enumerate() {
                let value = match game.game_type {
                    GameType::Team => participant.score.unwrap_or(0).to_string(),
                    GameType::Individual => participant
                        .recorded_time()
                        .unwrap_or("pending")
                        .to_string(),
                };
                println!("   [{index}] {:<24} {}", participant.name, value.yellow());
            }
        }

        Ok(())
    }

    pub async fn bump_score(&self, game_id: i64, participant: usize, delta: i64) -> Result<()> {
        self.controller.refresh().await?;
        let scores = self
            .controller
            .apply_score_delta(game_id, participant, delta)
            .await?;

        println!("Score updated:");
        render_scores(GameType::Team, &scores.participants);
        Ok(())
    }

    pub async fn record_time(&self, game_id: i64, participant: usize, time: &str) -> Result<()> {
        self.controller.refresh().await?;
        let scores = self
            .controller
            .set_participant_time(game_id, participant, time)
            .await?;

        println!("Time recorded:");
        render_scores(GameType::Individual, &scores.participants);
        Ok(())
    }

    pub async fn declare(&self, game_id: i64) -> Result<()> {
        self.controller.refresh().await?;
        let winner = self.controller.declare_winner(game_id).await?;

        println!("🏆 {}", format_winner(&winner).bold());
        Ok(())
    }

    /// One-shot public snapshot, without touching the admin active set.
    pub async fn live_snapshot(&self, game_id: Option<i64>) -> Result<()> {
        match game_id {
            Some(id) => {
                let game = live::live_game_detail(&self.api, id).await?;
                println!(
                    "{} {}  {}",
                    game.game.icon,
                    game.game.local_name.bold(),
                    game.venue
                );
                render_scores(game.game_type, &game.participants);
            }
            None => {
                let games = live::list_live_games(&self.api).await?;
                if games.is_empty() {
                    println!("No live games right now");
                }
                for game in games {
                    println!(
                        "\n{} {} — {} · {}",
                        game.game.icon,
                        game.game.local_name.bold(),
                        game.start_time,
                        game.venue
                    );
                    render_scores(game.game_type, &game.participants);
                }
            }
        }
        Ok(())
    }
}

fn format_winner(winner: &Winner) -> String {
    match (winner.score, winner.time.as_deref()) {
        (Some(score), _) => format!("Winner: {} with {} points", winner.name, score),
        (None, Some(time)) => format!("Winner: {} with time {}", winner.name, time),
        (None, None) => format!("Winner: {}", winner.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_lines_match_the_event_kind() {
        let team = Winner {
            name: "Red".to_string(),
            score: Some(15),
            time: None,
        };
        assert_eq!(format_winner(&team), "Winner: Red with 15 points");

        let individual = Winner {
            name: "Y".to_string(),
            score: None,
            time: Some("10.9s".to_string()),
        };
        assert_eq!(format_winner(&individual), "Winner: Y with time 10.9s");
    }
}

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::models::{GameCategory, GameType};

#[derive(Parser, Debug)]
#[command(author, version, about = "festival games scoreboard console")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Follow the live games with auto-refreshing leaderboards
    Watch {
        /// Refresh interval in seconds (default 10)
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// List active games with the participant indices scoring commands use
    Active,
    /// Apply a score delta to one team of an active game
    Score {
        game_id: i64,
        /// Participant index as shown by `active`
        participant: usize,
        /// Signed points change, e.g. -1, 1 or 5
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Record a finish time for one player of an active game
    Time {
        game_id: i64,
        /// Participant index as shown by `active`
        participant: usize,
        /// Seconds like "12.5s"; an empty string clears the time
        time: String,
    },
    /// Resolve and declare the winner of an active game
    Winner { game_id: i64 },
    /// One-shot snapshot of the public live view
    Live { game_id: Option<i64> },
    /// Browse completed results
    Results {
        /// main, kids, women, men or fun (everything when omitted)
        #[arg(short, long)]
        category: Option<GameCategory>,
        /// Case-insensitive match on the game name
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Results per page (default from config)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Overall festival statistics
    Stats,
    /// Manage the game catalog
    #[command(subcommand)]
    Games(GamesCommand),
    /// Manage scheduled games
    #[command(subcommand)]
    Schedule(ScheduleCommand),
    /// Manage registrations
    #[command(subcommand)]
    Register(RegisterCommand),
    /// League fixtures
    #[command(subcommand)]
    League(LeagueCommand),
    /// Log in as festival admin
    Login {
        username: String,
        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Drop the stored admin session
    Logout,
    /// Show the stored session and whether the backend still accepts it
    Whoami,
    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Subcommand, Debug, Clone)]
#[clap(rename_all = "kebab-case")]
pub enum GamesCommand {
    /// List the catalog
    List,
    /// Add a catalog game
    Add {
        icon: String,
        local_name: String,
        english_name: String,
        category: GameCategory,
    },
    /// Delete a catalog game
    Remove { game_id: i64 },
}

#[derive(Subcommand, Debug, Clone)]
#[clap(rename_all = "kebab-case")]
pub enum ScheduleCommand {
    /// List scheduled games
    List {
        /// Only games currently live
        #[arg(long, conflicts_with = "open")]
        active: bool,
        /// Only games with registration open
        #[arg(long)]
        open: bool,
    },
    /// Show one scheduled game
    Show { scheduled_game_id: i64 },
    /// Schedule a catalog game
    Add {
        game_id: i64,
        /// e.g. 2026-08-15
        date: String,
        /// e.g. 10:30 AM
        time: String,
        venue: String,
        #[arg(long, default_value = "team")]
        game_type: GameType,
        #[arg(long)]
        max_teams: Option<u32>,
        #[arg(long)]
        max_players: Option<u32>,
    },
    /// Change date, time or venue
    Reschedule {
        scheduled_game_id: i64,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        venue: Option<String>,
    },
    /// Toggle the live flag
    Activate { scheduled_game_id: i64 },
    /// Toggle the registration window
    Registration { scheduled_game_id: i64 },
    /// Delete a scheduled game
    Remove { scheduled_game_id: i64 },
}

#[derive(Subcommand, Debug, Clone)]
#[clap(rename_all = "kebab-case")]
pub enum RegisterCommand {
    /// List team registrations for a scheduled game
    Teams { scheduled_game_id: i64 },
    /// Register a team
    Team {
        scheduled_game_id: i64,
        team_name: String,
        captain: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Roster, one name per argument
        #[arg(required = true, num_args = 1..)]
        players: Vec<String>,
    },
    /// Delete a team registration
    RemoveTeam { registration_id: i64 },
    /// Add a player to a registered team
    AddPlayer {
        registration_id: i64,
        player_name: String,
    },
    /// Rename a player on a registered team
    EditPlayer {
        registration_id: i64,
        /// Roster index, starting at 0
        player_index: usize,
        player_name: String,
    },
    /// Remove a player from a registered team
    RemovePlayer {
        registration_id: i64,
        /// Roster index, starting at 0
        player_index: usize,
    },
    /// List individual registrations for a scheduled game
    Players { scheduled_game_id: i64 },
    /// Register an individual player
    Player {
        scheduled_game_id: i64,
        player_name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        age: Option<u32>,
    },
    /// Delete an individual registration
    RemoveIndividual { registration_id: i64 },
}

#[derive(Subcommand, Debug, Clone)]
#[clap(rename_all = "kebab-case")]
pub enum LeagueCommand {
    /// Create a league fixture (two teams, one stage)
    Add {
        game_id: i64,
        /// e.g. "semi final"
        stage: String,
        date: String,
        time: String,
        venue: String,
        #[arg(long)]
        team1: Option<i64>,
        #[arg(long)]
        team2: Option<i64>,
        #[arg(long)]
        max_players: Option<u32>,
        #[arg(long)]
        parent: Option<i64>,
    },
    /// All fixtures derived from one catalog game
    ForGame { game_id: i64 },
    /// All fixtures of one tournament stage
    Stage { stage: String },
}

/// Emit shell completions for the console binary.
pub fn print_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn score_accepts_negative_deltas() {
        let cli = Cli::try_parse_from(["festival_scoreboard", "score", "7", "0", "-1"])
            .expect("parses");
        match cli.command {
            Command::Score {
                game_id,
                participant,
                delta,
            } => {
                assert_eq!((game_id, participant, delta), (7, 0, -1));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn results_category_parses_through_the_domain_enum() {
        let cli = Cli::try_parse_from([
            "festival_scoreboard",
            "results",
            "--category",
            "kids",
            "--page",
            "2",
        ])
        .expect("parses");
        match cli.command {
            Command::Results { category, page, .. } => {
                assert_eq!(category, Some(GameCategory::Kids));
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

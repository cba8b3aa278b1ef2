pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod scoring;
pub mod services;
pub mod state;
pub mod store;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use crate::api::models::{
    GameCreate, IndividualRegistrationCreate, ScheduledGameCreate, ScheduledGameUpdate,
    TeamRegistrationCreate,
};
use crate::cli::{Cli, Command, GamesCommand, LeagueCommand, RegisterCommand, ScheduleCommand};
use crate::config::settings::AppConfig;
use crate::domain::models::GameType;
use crate::http::client::ApiClient;
use crate::services::admin::{AdminService, ScheduleFilter};
use crate::services::results::{ResultsQuery, ResultsService};
use crate::services::scoreboard::ScoreboardService;
use crate::services::watch::WatchService;
use crate::state::session::SessionStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle(command: Command) -> Result<()> {
    if let Command::Completions { shell } = &command {
        cli::print_completions(*shell);
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(command))
}

async fn dispatch(command: Command) -> Result<()> {
    let config = AppConfig::new();
    let session = SessionStore::from_env();
    let api = Arc::new(ApiClient::new(&config.api, session.clone())?);

    match command {
        Command::Watch { interval } => {
            WatchService::new(api, &config.live, interval).run().await
        }
        Command::Active => ScoreboardService::new(api).show_active().await,
        Command::Score {
            game_id,
            participant,
            delta,
        } => {
            ScoreboardService::new(api)
                .bump_score(game_id, participant, delta)
                .await
        }
        Command::Time {
            game_id,
            participant,
            time,
        } => {
            ScoreboardService::new(api)
                .record_time(game_id, participant, &time)
                .await
        }
        Command::Winner { game_id } => ScoreboardService::new(api).declare(game_id).await,
        Command::Live { game_id } => ScoreboardService::new(api).live_snapshot(game_id).await,
        Command::Results {
            category,
            search,
            page,
            page_size,
        } => {
            let query = ResultsQuery {
                category,
                search,
                page,
                page_size: page_size.unwrap_or(config.live.results_page_size),
            };
            ResultsService::new(api).show(&query).await
        }
        Command::Stats => ResultsService::new(api).show_stats().await,
        Command::Games(games) => {
            let admin = AdminService::new(api, session);
            match games {
                GamesCommand::List => admin.list_games().await,
                GamesCommand::Add {
                    icon,
                    local_name,
                    english_name,
                    category,
                } => {
                    admin
                        .add_game(GameCreate {
                            icon,
                            local_name,
                            english_name,
                            category,
                        })
                        .await
                }
                GamesCommand::Remove { game_id } => admin.remove_game(game_id).await,
            }
        }
        Command::Schedule(schedule) => {
            let admin = AdminService::new(api, session);
            match schedule {
                ScheduleCommand::List { active, open } => {
                    let filter = if active {
                        ScheduleFilter::Active
                    } else if open {
                        ScheduleFilter::OpenRegistration
                    } else {
                        ScheduleFilter::All
                    };
                    admin.schedule_list(filter).await
                }
                ScheduleCommand::Show { scheduled_game_id } => {
                    admin.schedule_show(scheduled_game_id).await
                }
                ScheduleCommand::Add {
                    game_id,
                    date,
                    time,
                    venue,
                    game_type,
                    max_teams,
                    max_players,
                } => {
                    admin
                        .schedule_add(ScheduledGameCreate {
                            game_id,
                            scheduled_time: time,
                            date,
                            venue,
                            participants: Vec::new(),
                            game_type,
                            max_teams,
                            max_players_per_team: max_players,
                            is_league: false,
                            league_stage: None,
                            team1_id: None,
                            team2_id: None,
                            parent_game_id: None,
                        })
                        .await
                }
                ScheduleCommand::Reschedule {
                    scheduled_game_id,
                    date,
                    time,
                    venue,
                } => {
                    admin
                        .reschedule(
                            scheduled_game_id,
                            ScheduledGameUpdate {
                                scheduled_time: time,
                                date,
                                venue,
                                ..Default::default()
                            },
                        )
                        .await
                }
                ScheduleCommand::Activate { scheduled_game_id } => {
                    admin.toggle_activation(scheduled_game_id).await
                }
                ScheduleCommand::Registration { scheduled_game_id } => {
                    admin.toggle_registration(scheduled_game_id).await
                }
                ScheduleCommand::Remove { scheduled_game_id } => {
                    admin.schedule_remove(scheduled_game_id).await
                }
            }
        }
        Command::Register(register) => {
            let admin = AdminService::new(api, session);
            match register {
                RegisterCommand::Teams { scheduled_game_id } => {
                    admin.list_teams(scheduled_game_id).await
                }
                RegisterCommand::Team {
                    scheduled_game_id,
                    team_name,
                    captain,
                    phone,
                    email,
                    players,
                } => {
                    admin
                        .register_team(TeamRegistrationCreate {
                            scheduled_game_id,
                            team_name,
                            captain_name: captain,
                            captain_phone: phone,
                            captain_email: email,
                            players,
                        })
                        .await
                }
                RegisterCommand::RemoveTeam { registration_id } => {
                    admin.remove_team(registration_id).await
                }
                RegisterCommand::AddPlayer {
                    registration_id,
                    player_name,
                } => admin.add_player(registration_id, &player_name).await,
                RegisterCommand::EditPlayer {
                    registration_id,
                    player_index,
                    player_name,
                } => {
                    admin
                        .edit_player(registration_id, player_index, &player_name)
                        .await
                }
                RegisterCommand::RemovePlayer {
                    registration_id,
                    player_index,
                } => admin.remove_player(registration_id, player_index).await,
                RegisterCommand::Players { scheduled_game_id } => {
                    admin.list_individuals(scheduled_game_id).await
                }
                RegisterCommand::Player {
                    scheduled_game_id,
                    player_name,
                    phone,
                    email,
                    age,
                } => {
                    admin
                        .register_individual(IndividualRegistrationCreate {
                            scheduled_game_id,
                            player_name,
                            phone,
                            email,
                            age,
                        })
                        .await
                }
                RegisterCommand::RemoveIndividual { registration_id } => {
                    admin.remove_individual(registration_id).await
                }
            }
        }
        Command::League(league) => {
            let admin = AdminService::new(api, session);
            match league {
                LeagueCommand::Add {
                    game_id,
                    stage,
                    date,
                    time,
                    venue,
                    team1,
                    team2,
                    max_players,
                    parent,
                } => {
                    admin
                        .league_add(ScheduledGameCreate {
                            game_id,
                            scheduled_time: time,
                            date,
                            venue,
                            participants: Vec::new(),
                            game_type: GameType::Team,
                            max_teams: Some(2),
                            max_players_per_team: max_players,
                            is_league: true,
                            league_stage: Some(stage),
                            team1_id: team1,
                            team2_id: team2,
                            parent_game_id: parent,
                        })
                        .await
                }
                LeagueCommand::ForGame { game_id } => admin.league_for_game(game_id).await,
                LeagueCommand::Stage { stage } => admin.league_by_stage(&stage).await,
            }
        }
        Command::Login { username, password } => {
            AdminService::new(api, session)
                .login(&username, password)
                .await
        }
        Command::Logout => AdminService::new(api, session).logout().await,
        Command::Whoami => AdminService::new(api, session).whoami().await,
        Command::Completions { .. } => Ok(()),
    }
}

pub mod controller;
pub mod ranking;
pub mod time;
pub mod winner;

pub use controller::ScoreUpdateController;
pub use ranking::{
    IndividualLeaderboard, Medal, TeamStanding, TimedStanding, individual_leaderboard,
    team_leaderboard,
};
pub use time::FinishTime;
pub use winner::{Winner, resolve_winner};

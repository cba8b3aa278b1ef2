pub mod admin;
pub mod poller;
pub mod results;
pub mod scoreboard;
pub mod watch;

pub use admin::{AdminService, ScheduleFilter};
pub use poller::LivePoller;
pub use results::{ResultsQuery, ResultsService};
pub use scoreboard::ScoreboardService;
pub use watch::WatchService;

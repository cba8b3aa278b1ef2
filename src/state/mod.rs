pub mod active_games;
pub mod session;

pub use active_games::{ActiveGamesState, SharedActiveGames};
pub use session::{Session, SessionStore};

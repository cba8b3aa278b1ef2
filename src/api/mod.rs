pub mod auth;
pub mod catalog;
pub mod league;
pub mod live;
pub mod models;
pub mod registrations;
pub mod results;
pub mod schedule;

pub use live::HttpScoreStore;

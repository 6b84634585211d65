pub mod config;
pub mod demo_feed;
pub mod error;
pub mod fixture;
pub mod head_to_head;
pub mod http_client;
pub mod league;
pub mod match_fetch;
pub mod ranking;
pub mod standings;

pub use error::LeagueError;
pub use fixture::Match;
pub use league::LeagueService;
pub use standings::TeamStanding;

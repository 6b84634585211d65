use tracing::debug;

use crate::error::LeagueError;
use crate::fixture::Match;
use crate::ranking;
use crate::standings::TeamStanding;

/// Holds the current match list and computes the leaderboard from it on demand.
///
/// Standings are never cached: every `leaderboard` call aggregates and sorts
/// the stored list from scratch.
#[derive(Debug, Clone, Default)]
pub struct LeagueService {
    matches: Option<Vec<Match>>,
}

impl LeagueService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored match list wholesale.
    pub fn set_matches(&mut self, matches: Vec<Match>) {
        debug!(count = matches.len(), "match list replaced");
        self.matches = Some(matches);
    }

    /// The list last passed to `set_matches`, `None` if nothing was set yet.
    pub fn matches(&self) -> Option<&[Match]> {
        self.matches.as_deref()
    }

    pub fn leaderboard(&self) -> Result<Vec<TeamStanding>, LeagueError> {
        let matches = self.matches.as_deref().ok_or(LeagueError::MatchesNotSet)?;
        let rows = ranking::leaderboard(matches);
        debug!(matches = matches.len(), teams = rows.len(), "leaderboard computed");
        Ok(rows)
    }
}

/// Failures of the ranking engine itself; I/O boundaries use `anyhow`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeagueError {
    /// The leaderboard was requested before any match list was stored.
    #[error("match list not set")]
    MatchesNotSet,
}

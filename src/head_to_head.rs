use std::collections::HashMap;

use crate::fixture::Match;
use crate::standings::POINTS_WIN;

/// Played matches involving both `team_a` and `team_b`, in either arrangement.
pub fn head_to_head_matches<'a>(
    matches: &'a [Match],
    team_a: &'a str,
    team_b: &'a str,
) -> impl Iterator<Item = &'a Match> + 'a {
    matches
        .iter()
        .filter(move |m| m.match_played && m.involves(team_a) && m.involves(team_b))
}

/// Head-to-head points of `team_b` minus those of `team_a`.
///
/// Only decided matches count: the winner takes three points, draws give
/// nothing to either side. Positive means `team_b` ranks above `team_a`,
/// zero leaves the pair unresolved.
pub fn head_to_head_points(matches: &[Match], team_a: &str, team_b: &str) -> i128 {
    let mut tally: HashMap<&str, u64> = HashMap::new();

    for m in head_to_head_matches(matches, team_a, team_b) {
        let Some(winner) = m.winner() else {
            continue;
        };
        let loser = if winner == m.home_team {
            m.away_team.as_str()
        } else {
            m.home_team.as_str()
        };
        *tally.entry(winner).or_insert(0) += u64::from(POINTS_WIN);
        tally.entry(loser).or_insert(0);
    }

    let a_points = tally.get(team_a).copied().unwrap_or(0);
    let b_points = tally.get(team_b).copied().unwrap_or(0);
    i128::from(b_points) - i128::from(a_points)
}

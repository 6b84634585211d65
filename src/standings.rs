use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fixture::Match;

pub const POINTS_WIN: u32 = 3;
pub const POINTS_DRAW: u32 = 1;
pub const POINTS_LOSS: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_name: String,
    pub matches_played: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub points: u64,
}

impl TeamStanding {
    pub fn new(team_name: &str) -> Self {
        Self {
            team_name: team_name.to_string(),
            matches_played: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i128 {
        i128::from(self.goals_for) - i128::from(self.goals_against)
    }

    /// Totals are `u64` so any list of `u32` scores sums without overflow.
    fn record(&mut self, scored: u32, conceded: u32) {
        self.matches_played = self.matches_played.saturating_add(1);
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        self.points += u64::from(match_points(scored, conceded));
    }
}

/// Points earned from a single played match, independent of home/away.
pub fn match_points(scored: u32, conceded: u32) -> u32 {
    if scored > conceded {
        POINTS_WIN
    } else if scored == conceded {
        POINTS_DRAW
    } else {
        POINTS_LOSS
    }
}

/// Fold a match list into one standing per distinct team name.
///
/// Every team seen as home or away gets an entry, including teams whose only
/// fixtures are unplayed. Output is in order of first appearance.
pub fn aggregate_standings(matches: &[Match]) -> Vec<TeamStanding> {
    let mut table = StandingsTable::default();

    for m in matches {
        table.entry(&m.home_team);
        table.entry(&m.away_team);
        if !m.match_played {
            continue;
        }
        table
            .entry(&m.home_team)
            .record(m.home_team_score, m.away_team_score);
        table
            .entry(&m.away_team)
            .record(m.away_team_score, m.home_team_score);
    }

    table.rows
}

#[derive(Debug, Default)]
struct StandingsTable {
    index: HashMap<String, usize>,
    rows: Vec<TeamStanding>,
}

impl StandingsTable {
    fn entry(&mut self, team: &str) -> &mut TeamStanding {
        let idx = match self.index.get(team) {
            Some(idx) => *idx,
            None => {
                let idx = self.rows.len();
                self.rows.push(TeamStanding::new(team));
                self.index.insert(team.to_string(), idx);
                idx
            }
        };
        &mut self.rows[idx]
    }
}

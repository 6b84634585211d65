use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fixture between two named teams.
///
/// Field names follow the camelCase shape served by the match API, so a
/// `Vec<Match>` can be read straight from `getAllMatches` or a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Kickoff as epoch milliseconds. Informational only.
    #[serde(default)]
    pub match_date: i64,
    #[serde(default)]
    pub stadium: String,
    pub home_team: String,
    pub away_team: String,
    pub match_played: bool,
    pub home_team_score: u32,
    pub away_team_score: u32,
}

impl Match {
    pub fn played(
        home_team: &str,
        away_team: &str,
        home_team_score: u32,
        away_team_score: u32,
    ) -> Self {
        Self {
            match_date: 0,
            stadium: String::new(),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            match_played: true,
            home_team_score,
            away_team_score,
        }
    }

    pub fn scheduled(home_team: &str, away_team: &str) -> Self {
        Self {
            match_played: false,
            ..Self::played(home_team, away_team, 0, 0)
        }
    }

    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.match_date)
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// Name of the strictly higher scorer, `None` on a draw.
    pub fn winner(&self) -> Option<&str> {
        if self.home_team_score > self.away_team_score {
            Some(&self.home_team)
        } else if self.away_team_score > self.home_team_score {
            Some(&self.away_team)
        } else {
            None
        }
    }
}

use chrono::{Duration as ChronoDuration, NaiveDate};
use rand::Rng;

use crate::fixture::Match;

pub const DEMO_TEAMS: &[&str] = &[
    "Brazil",
    "Serbia",
    "Switzerland",
    "Cameroon",
    "Argentina",
    "Poland",
    "Mexico",
    "Saudi Arabia",
    "France",
    "Australia",
    "Denmark",
    "Tunisia",
    "Spain",
    "Germany",
    "Japan",
    "Costa Rica",
];

const DEMO_STADIUMS: &[&str] = &["Maracanã", "Lusail", "Al Bayt", "Education City"];
const MAX_GOALS: u32 = 4;

/// Single round-robin schedule over `teams`, one fixture per unordered pair.
///
/// Each fixture is played with probability `played_ratio`; unplayed ones carry
/// a 0-0 score. Kickoffs are one day apart starting from the opening date.
pub fn generate_round_robin(teams: &[&str], played_ratio: f64, rng: &mut impl Rng) -> Vec<Match> {
    let played_ratio = if played_ratio.is_finite() {
        played_ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let opening = NaiveDate::from_ymd_opt(2022, 11, 20)
        .and_then(|d| d.and_hms_opt(16, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default();
    let day_ms = ChronoDuration::days(1).num_milliseconds();

    let mut matches = Vec::new();
    for (i, home) in teams.iter().enumerate() {
        for away in &teams[i + 1..] {
            let idx = matches.len();
            let mut m = Match::scheduled(home, away);
            m.match_date = opening + day_ms * idx as i64;
            m.stadium = DEMO_STADIUMS[idx % DEMO_STADIUMS.len()].to_string();
            if rng.gen_bool(played_ratio) {
                m.match_played = true;
                m.home_team_score = rng.gen_range(0..=MAX_GOALS);
                m.away_team_score = rng.gen_range(0..=MAX_GOALS);
            }
            matches.push(m);
        }
    }
    matches
}

/// Team names for a demo league of `count` teams, padded with numbered names
/// once the built-in list runs out.
pub fn demo_team_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|idx| {
            DEMO_TEAMS
                .get(idx)
                .map(|name| (*name).to_string())
                .unwrap_or_else(|| format!("Team {}", idx + 1))
        })
        .collect()
}

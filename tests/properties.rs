use std::collections::HashSet;

use proptest::prelude::*;

use league_board::head_to_head::head_to_head_points;
use league_board::standings::aggregate_standings;
use league_board::{LeagueService, Match, ranking};

const NAMES: &[&str] = &["Brazil", "Serbia", "Switzerland", "Cameroon", "Ghana", "Korea Republic"];

fn match_strategy() -> impl Strategy<Value = Match> {
    (0..NAMES.len(), 1..NAMES.len(), 0u32..6, 0u32..6, any::<bool>()).prop_map(
        |(home, offset, home_score, away_score, played)| {
            let away = (home + offset) % NAMES.len();
            let mut m = Match::played(NAMES[home], NAMES[away], home_score, away_score);
            m.match_played = played;
            m
        },
    )
}

fn league_strategy() -> impl Strategy<Value = Vec<Match>> {
    prop::collection::vec(match_strategy(), 0..24)
}

proptest! {
    #[test]
    fn every_team_appears_exactly_once(matches in league_strategy()) {
        let rows = ranking::leaderboard(&matches);
        let expected: HashSet<&str> = matches
            .iter()
            .flat_map(|m| [m.home_team.as_str(), m.away_team.as_str()])
            .collect();
        let seen: HashSet<&str> = rows.iter().map(|r| r.team_name.as_str()).collect();
        prop_assert_eq!(rows.len(), expected.len());
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn goals_are_conserved(matches in league_strategy()) {
        let rows = aggregate_standings(&matches);
        let total_for: u64 = rows.iter().map(|r| r.goals_for).sum();
        let total_against: u64 = rows.iter().map(|r| r.goals_against).sum();
        let total_scored: u64 = matches
            .iter()
            .filter(|m| m.match_played)
            .map(|m| u64::from(m.home_team_score) + u64::from(m.away_team_score))
            .sum();
        prop_assert_eq!(total_for, total_against);
        prop_assert_eq!(total_for, total_scored);
    }

    #[test]
    fn unplayed_matches_change_nothing(
        matches in league_strategy(),
        extra in match_strategy(),
    ) {
        let mut extra = extra;
        extra.match_played = false;
        let mut with_extra = matches.clone();
        with_extra.push(extra.clone());

        let base = aggregate_standings(&matches);
        let extended = aggregate_standings(&with_extra);
        for row in &extended {
            match base.iter().find(|b| b.team_name == row.team_name) {
                Some(before) => prop_assert_eq!(before, row),
                None => {
                    prop_assert!(row.team_name == extra.home_team || row.team_name == extra.away_team);
                    prop_assert_eq!(row.matches_played, 0);
                    prop_assert_eq!(row.points, 0);
                    prop_assert_eq!(row.goals_for, 0);
                    prop_assert_eq!(row.goals_against, 0);
                }
            }
        }
    }

    #[test]
    fn points_law_ignores_home_and_away(home_score in 0u32..8, away_score in 0u32..8) {
        let forward = aggregate_standings(&[Match::played("Brazil", "Serbia", home_score, away_score)]);
        let mirrored = aggregate_standings(&[Match::played("Serbia", "Brazil", away_score, home_score)]);
        let points_of = |rows: &[league_board::TeamStanding], name: &str| {
            rows.iter().find(|r| r.team_name == name).map(|r| r.points)
        };
        let expected = if home_score > away_score {
            (3, 0)
        } else if home_score < away_score {
            (0, 3)
        } else {
            (1, 1)
        };
        prop_assert_eq!(points_of(&forward, "Brazil"), Some(expected.0));
        prop_assert_eq!(points_of(&forward, "Serbia"), Some(expected.1));
        prop_assert_eq!(points_of(&mirrored, "Brazil"), Some(expected.0));
        prop_assert_eq!(points_of(&mirrored, "Serbia"), Some(expected.1));
    }

    #[test]
    fn head_to_head_is_antisymmetric(matches in league_strategy(), a in 0..NAMES.len(), b in 0..NAMES.len()) {
        prop_assert_eq!(
            head_to_head_points(&matches, NAMES[a], NAMES[b]),
            -head_to_head_points(&matches, NAMES[b], NAMES[a])
        );
    }

    #[test]
    fn repeated_calls_are_deterministic(matches in league_strategy()) {
        let mut service = LeagueService::new();
        service.set_matches(matches);
        let first = service.leaderboard().expect("matches were set");
        let second = service.leaderboard().expect("matches were set");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn points_never_increase_down_the_table(matches in league_strategy()) {
        let rows = ranking::leaderboard(&matches);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].points >= pair[1].points);
        }
    }
}

#[test]
fn head_to_head_ignores_draws_and_unplayed() {
    let mut unplayed = Match::played("Brazil", "Serbia", 0, 5);
    unplayed.match_played = false;
    let matches = vec![
        Match::played("Brazil", "Serbia", 1, 1),
        unplayed,
        Match::played("Serbia", "Cameroon", 0, 3),
    ];
    assert_eq!(head_to_head_points(&matches, "Brazil", "Serbia"), 0);
    assert_eq!(head_to_head_points(&matches, "Serbia", "Cameroon"), 3);
    assert_eq!(head_to_head_points(&matches, "Cameroon", "Serbia"), -3);
}

#[test]
fn head_to_head_counts_every_decided_meeting() {
    let matches = vec![
        Match::played("Brazil", "Serbia", 2, 0),
        Match::played("Serbia", "Brazil", 1, 0),
        Match::played("Serbia", "Brazil", 0, 3),
    ];
    assert_eq!(head_to_head_points(&matches, "Serbia", "Brazil"), 3);
}

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions, Strength};
use tracing::warn;

use crate::fixture::Match;
use crate::head_to_head::head_to_head_points;
use crate::standings::{TeamStanding, aggregate_standings};

/// Criteria of the ranking chain, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TieBreak {
    Points,
    HeadToHead,
    GoalDifference,
    GoalsFor,
    Name,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TieBreak::Points => "points",
            TieBreak::HeadToHead => "head-to-head",
            TieBreak::GoalDifference => "goal difference",
            TieBreak::GoalsFor => "goals scored",
            TieBreak::Name => "name",
        };
        f.write_str(label)
    }
}

/// Aggregate and rank in one step.
pub fn leaderboard(matches: &[Match]) -> Vec<TeamStanding> {
    rank_standings(matches, aggregate_standings(matches))
}

/// Sort standings with the tie-break chain.
///
/// `sort_by` is stable, so when head-to-head results form a cycle the outcome
/// depends on the incoming order. `aggregate_standings` yields first-appearance
/// order, which keeps repeated calls on the same match list identical.
pub fn rank_standings(matches: &[Match], mut standings: Vec<TeamStanding>) -> Vec<TeamStanding> {
    standings.sort_by(|a, b| compare_standings(matches, a, b));
    standings
}

pub fn compare_standings(matches: &[Match], a: &TeamStanding, b: &TeamStanding) -> Ordering {
    decide(matches, a, b).0
}

/// Ordering of `a` relative to `b` and the criterion that settled it.
///
/// `Less` means `a` ranks above `b`. Head-to-head is pairwise, so the chain is
/// not guaranteed transitive across three or more teams level on points.
pub fn decide(matches: &[Match], a: &TeamStanding, b: &TeamStanding) -> (Ordering, TieBreak) {
    let by_points = b.points.cmp(&a.points);
    if by_points != Ordering::Equal {
        return (by_points, TieBreak::Points);
    }

    let by_head_to_head = head_to_head_points(matches, &a.team_name, &b.team_name).cmp(&0);
    if by_head_to_head != Ordering::Equal {
        return (by_head_to_head, TieBreak::HeadToHead);
    }

    let by_goal_difference = b.goal_difference().cmp(&a.goal_difference());
    if by_goal_difference != Ordering::Equal {
        return (by_goal_difference, TieBreak::GoalDifference);
    }

    let by_goals_for = b.goals_for.cmp(&a.goals_for);
    if by_goals_for != Ordering::Equal {
        return (by_goals_for, TieBreak::GoalsFor);
    }

    (collate_team_names(&a.team_name, &b.team_name), TieBreak::Name)
}

thread_local! {
    static NAME_COLLATOR: Option<Collator> = build_name_collator();
}

fn build_name_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!(error = %err, "name collator unavailable, using code point order");
            None
        }
    }
}

/// Root-locale Unicode collation at tertiary strength, so accents and case
/// order the way `localeCompare` does. Code-point order settles exact ties.
pub fn collate_team_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| collator.as_ref().map(|c| c.compare(a, b)))
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.cmp(b))
}

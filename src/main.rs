use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use league_board::config::{self, ApiConfig};
use league_board::{LeagueService, TeamStanding, demo_feed, match_fetch, ranking};

const DEMO_PLAYED_RATIO: f64 = 0.85;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_logging()?;

    let mut service = LeagueService::new();
    if let Some(path) = parse_matches_path_arg() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed reading {}", path.display()))?;
        let matches = match_fetch::parse_matches_json(&raw)
            .with_context(|| format!("failed parsing {}", path.display()))?;
        info!(path = %path.display(), count = matches.len(), "loaded matches from file");
        service.set_matches(matches);
    } else if has_flag("--demo") {
        let names = demo_feed::demo_team_names(config::demo_team_count());
        let refs = names.iter().map(String::as_str).collect::<Vec<_>>();
        let mut rng = rand::thread_rng();
        service.set_matches(demo_feed::generate_round_robin(&refs, DEMO_PLAYED_RATIO, &mut rng));
    } else {
        let cfg = ApiConfig::from_env();
        info!(base_url = %cfg.base_url, "fetching matches");
        match_fetch::refresh_matches(&mut service, &cfg)?;
    }

    let rows = service.leaderboard()?;
    if has_flag("--json") {
        let json = serde_json::to_string_pretty(&rows).context("serialize leaderboard")?;
        println!("{json}");
    } else {
        print_table(&service, &rows);
    }
    Ok(())
}

fn init_logging() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;
    Ok(())
}

fn print_table(service: &LeagueService, rows: &[TeamStanding]) {
    let matches = service.matches().unwrap_or_default();
    println!(
        "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>4} {:>4}  decided by",
        "#", "Team", "P", "GF", "GA", "GD", "Pts"
    );
    for (idx, row) in rows.iter().enumerate() {
        let decided_by = rows
            .get(idx + 1)
            .map(|next| ranking::decide(matches, row, next).1.to_string())
            .unwrap_or_default();
        println!(
            "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>+4} {:>4}  {}",
            idx + 1,
            row.team_name,
            row.matches_played,
            row.goals_for,
            row.goals_against,
            row.goal_difference(),
            row.points,
            decided_by
        );
    }
}

fn has_flag(flag: &str) -> bool {
    std::env::args().skip(1).any(|arg| arg == flag)
}

fn parse_matches_path_arg() -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--matches=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--matches" {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(PathBuf::from(next));
            }
        }
    }
    None
}

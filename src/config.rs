use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DEMO_TEAMS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Always ends with `/`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = opt_env("LEAGUE_API_URL")
            .map(|raw| normalize_base_url(&raw))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout = Duration::from_secs(
            env::var("LEAGUE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|val| val.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS)
                .clamp(1, 120),
        );
        Self { base_url, timeout }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

pub fn demo_team_count() -> usize {
    env::var("LEAGUE_DEMO_TEAMS")
        .ok()
        .and_then(|val| val.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_DEMO_TEAMS)
        .clamp(2, 32)
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|val| {
        if val.trim().is_empty() {
            None
        } else {
            Some(val)
        }
    })
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        assert_eq!(normalize_base_url("http://api.local:8080"), "http://api.local:8080/");
        assert_eq!(normalize_base_url(" http://api.local/ "), "http://api.local/");
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let cfg = ApiConfig::default();
        assert_eq!(
            cfg.endpoint("/api/v1/getAllMatches"),
            "http://localhost:3001/api/v1/getAllMatches"
        );
        assert_eq!(
            cfg.endpoint("api/v1/getAccessToken"),
            "http://localhost:3001/api/v1/getAccessToken"
        );
    }
}

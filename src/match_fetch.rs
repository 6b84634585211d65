use anyhow::{Context, Result, anyhow};
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::fixture::Match;
use crate::http_client::http_client;
use crate::league::LeagueService;

const ACCESS_TOKEN_PATH: &str = "api/v1/getAccessToken";
const ALL_MATCHES_PATH: &str = "api/v1/getAllMatches";

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
}

/// Fetch the full match list and hand it to `service`.
///
/// The stored list is only replaced once both requests succeed; on any error
/// the service keeps whatever it held before.
pub fn refresh_matches(service: &mut LeagueService, config: &ApiConfig) -> Result<usize> {
    match fetch_matches(config) {
        Ok(matches) => {
            let count = matches.len();
            service.set_matches(matches);
            info!(count, "match list refreshed");
            Ok(count)
        }
        Err(err) => {
            warn!(error = %err, "match fetch failed, keeping previous match list");
            Err(err)
        }
    }
}

pub fn fetch_matches(config: &ApiConfig) -> Result<Vec<Match>> {
    let client = http_client(config)?;
    let token = fetch_access_token(client, config)?;
    let url = config.endpoint(ALL_MATCHES_PATH);
    let body = send_for_body(client.get(&url).bearer_auth(&token)).context("matches request failed")?;
    parse_matches_json(&body)
}

pub fn fetch_access_token(client: &Client, config: &ApiConfig) -> Result<String> {
    let url = config.endpoint(ACCESS_TOKEN_PATH);
    let body = send_for_body(client.get(&url)).context("access token request failed")?;
    parse_access_token_json(&body)
}

pub fn parse_access_token_json(raw: &str) -> Result<String> {
    let parsed: AccessTokenResponse =
        serde_json::from_str(raw.trim()).context("invalid access token json")?;
    parsed
        .access_token
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| anyhow!("access token missing from response"))
}

/// Accepts `{ "matches": [...] }`, a bare array, or an empty/`null` body.
///
/// An object without a `matches` key is an error, so an API error payload
/// never stands in for an empty league.
pub fn parse_matches_json(raw: &str) -> Result<Vec<Match>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let root: Value = serde_json::from_str(trimmed).context("invalid matches json")?;
    let list = match root {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut obj) => match obj.remove("matches") {
            Some(Value::Null) => return Ok(Vec::new()),
            Some(list) => list,
            None => return Err(anyhow!("matches missing from response")),
        },
        other => return Err(anyhow!("unexpected matches payload: {other}")),
    };
    serde_json::from_value(list).context("invalid match record")
}

fn send_for_body(req: RequestBuilder) -> Result<String> {
    let resp = req.send().context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow!("http {}: {}", status, body));
    }
    Ok(body)
}

//! HTTP client for the relay's lookup endpoints.
//!
//! Thin wrapper over reqwest. Responses carry a `data` array; an empty array
//! means the subject was not found, which renders as a plain line rather
//! than an error.

use relaywatch_app::SendOutcome;
use serde_json::Value;
use thiserror::Error;

/// Lookup request errors.
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP request or body decoding failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

const TOP_GAMES_SHOWN: usize = 12;

/// Client for the request/response lookup surface.
pub struct LookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    /// Create a client rooted at `http://{addr}`.
    pub fn new(addr: &str) -> Self {
        Self { http: reqwest::Client::new(), base_url: format!("http://{addr}") }
    }

    async fn get(&self, path: &str) -> Result<Value, LookupError> {
        Ok(self.http.get(format!("{}{path}", self.base_url)).send().await?.json().await?)
    }

    /// Fetch a user profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or body decoding fails.
    pub async fn user(&self, login: &str) -> Result<Vec<String>, LookupError> {
        let body = self.get(&format!("/user/{login}")).await?;
        let Some(user) = body["data"].get(0) else {
            return Ok(vec!["User not found".to_owned()]);
        };
        Ok(vec![
            format!("Display name: {}", text(user, "display_name", "N/A")),
            format!("User ID:      {}", text(user, "id", "N/A")),
            format!("Account type: {}", text(user, "broadcaster_type", "Regular User")),
            format!("Total views:  {}", count(user, "view_count")),
            format!("Created:      {}", text(user, "created_at", "Unknown")),
            format!("Description:  {}", text(user, "description", "No description")),
        ])
    }

    /// Fetch live-stream status. Empty `data` means the stream is offline.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or body decoding fails.
    pub async fn stream(&self, login: &str) -> Result<Vec<String>, LookupError> {
        let body = self.get(&format!("/stream/{login}")).await?;
        let Some(stream) = body["data"].get(0) else {
            return Ok(vec!["Offline".to_owned(), "Stream is currently offline".to_owned()]);
        };
        Ok(vec![
            "Live".to_owned(),
            format!("Title:    {}", text(stream, "title", "No title")),
            format!("Game:     {}", text(stream, "game_name", "No category")),
            format!("Viewers:  {}", count(stream, "viewer_count")),
            format!("Language: {}", text(stream, "language", "N/A")),
            format!("Started:  {}", text(stream, "started_at", "Unknown")),
            format!("Mature:   {}", if stream["is_mature"].as_bool().unwrap_or(false) { "Yes" } else { "No" }),
        ])
    }

    /// Fetch the top-games listing, ranked.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or body decoding fails.
    pub async fn top_games(&self) -> Result<Vec<String>, LookupError> {
        let body = self.get("/games/top").await?;
        let games = body["data"].as_array().map(Vec::as_slice).unwrap_or_default();
        if games.is_empty() {
            return Ok(vec!["No games data available".to_owned()]);
        }
        Ok(games
            .iter()
            .take(TOP_GAMES_SHOWN)
            .enumerate()
            .map(|(i, game)| format!("{:2}. {}", i + 1, text(game, "name", "?")))
            .collect())
    }

    /// Post an outbound chat message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or body decoding fails.
    pub async fn post_chat(
        &self,
        channel: &str,
        message: &str,
    ) -> Result<SendOutcome, LookupError> {
        let body: Value = self
            .http
            .post(format!("{}/irc/send", self.base_url))
            .json(&serde_json::json!({ "channel": channel, "message": message }))
            .send()
            .await?
            .json()
            .await?;
        Ok(SendOutcome {
            success: body["success"].as_bool().unwrap_or(false),
            message: body["message"].as_str().map(str::to_owned),
        })
    }
}

fn text<'a>(value: &'a Value, key: &str, fallback: &'a str) -> &'a str {
    match value[key].as_str() {
        Some(s) if !s.is_empty() => s,
        _ => fallback,
    }
}

fn count(value: &Value, key: &str) -> u64 {
    value[key].as_u64().unwrap_or(0)
}

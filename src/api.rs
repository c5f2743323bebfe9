//! OpenWeatherMap-style current weather client
//!
//! One GET per call; the intent action triggers a task spawn and the task
//! posts the result action back through the channel (see `effect.rs`).
//! No retry, no timeout, no caching.

use thiserror::Error;
use tracing::debug;

use crate::state::WeatherPayload;

/// Default provider host
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";

/// Region qualifier appended to every city query
const REGION_SUFFIX: &str = "au";

/// Fetch failure surfaced to the UI.
///
/// Transport covers connection, protocol and body decode failures;
/// Status carries the provider's non-success answer. No finer
/// classification.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("weather request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("weather provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

// The request URL carries the api key, so strip it before the error
// can reach the log or the screen
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.without_url())
    }
}

/// Client for the current-weather endpoint
#[derive(Clone, Debug)]
pub struct WeatherApi {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherApi {
    /// Create a client against the default provider host
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a specific host (tests point this at a
    /// mock server)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Request URL for a city lookup.
    ///
    /// The city is URL-encoded; the fixed region qualifier rides along
    /// unencoded, so the query reads `q=<city>,au`.
    pub fn request_url(&self, city: &str) -> String {
        format!(
            "{}/data/2.5/weather?appid={}&q={},{}",
            self.base_url,
            self.api_key,
            urlencoding::encode(city),
            REGION_SUFFIX
        )
    }

    /// Fetch current conditions for `<city>,au`.
    ///
    /// The payload is returned as the raw top-level JSON object; callers
    /// merge it into the state slot unchanged.
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherPayload, FetchError> {
        // The URL embeds the key, so log the city only
        debug!(%city, "requesting current weather");

        let response = self.http.get(self.request_url(city)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let payload = response.json::<WeatherPayload>().await?;
        Ok(payload)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut: String = body.chars().take(MAX).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_carries_region_suffix() {
        let api = WeatherApi::new("test-key");
        let url = api.request_url("Melbourne");

        assert_eq!(
            url,
            "http://api.openweathermap.org/data/2.5/weather?appid=test-key&q=Melbourne,au"
        );
    }

    #[test]
    fn test_request_url_encodes_city() {
        let api = WeatherApi::new("test-key");
        let url = api.request_url("Byron Bay");

        assert!(url.contains("q=Byron%20Bay,au"));
    }

    #[test]
    fn test_base_url_override() {
        let api = WeatherApi::with_base_url("test-key", "http://127.0.0.1:9000");
        let url = api.request_url("Perth");

        assert!(url.starts_with("http://127.0.0.1:9000/data/2.5/weather?"));
    }

    #[test]
    fn test_truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);

        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }
}

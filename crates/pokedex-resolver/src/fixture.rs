//! In-memory source for tests and local development.
//!
//! A [`FixtureSource`] maps absolute URLs to canned responses and records
//! every URL it is asked for, in order, so tests can assert exactly which
//! requests a resolution issued.
//!
//! # Example
//!
//! ```ignore
//! let source = FixtureSource::new()
//!     .with_json("https://pokeapi.co/api/v2/pokemon/ditto", ditto_json)
//!     .with_status("https://pokeapi.co/api/v2/pokemon-species/132/", 500);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::error::FetchError;
use crate::source::FetchResponse;

/// Body returned for URLs with no registered response.
const NOT_FOUND_BODY: &str = "Not Found";

#[derive(Debug, Clone)]
enum Canned {
    Reply(FetchResponse),
    Unreachable,
}

#[derive(Debug, Clone)]
struct Entry {
    canned: Canned,
    delay: Option<Duration>,
}

/// Source that answers from a URL → response map.
///
/// Unregistered URLs answer `404 Not Found`, matching the live service.
#[derive(Debug, Default)]
pub struct FixtureSource {
    entries: HashMap<String, Entry>,
    requests: Mutex<Vec<String>>,
}

impl FixtureSource {
    /// Create an empty fixture source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `200` and the given JSON body.
    #[must_use]
    pub fn with_json(self, url: impl Into<String>, body: &serde_json::Value) -> Self {
        self.with_response(url, 200, body.to_string())
    }

    /// Answer `url` with an arbitrary status and body.
    #[must_use]
    pub fn with_response(mut self, url: impl Into<String>, status: u16, body: String) -> Self {
        self.entries.insert(
            url.into(),
            Entry {
                canned: Canned::Reply(FetchResponse { status, body }),
                delay: None,
            },
        );
        self
    }

    /// Answer `url` with a bare status and an empty body.
    #[must_use]
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.with_response(url, status, String::new())
    }

    /// Fail every request to `url` with a transport error.
    #[must_use]
    pub fn with_unreachable(mut self, url: impl Into<String>) -> Self {
        self.entries.insert(
            url.into(),
            Entry {
                canned: Canned::Unreachable,
                delay: None,
            },
        );
        self
    }

    /// Hold the response for `url` back by `delay`.
    ///
    /// A URL that is not registered yet is registered as `404 Not Found`,
    /// so the delay always applies.
    #[must_use]
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.entries
            .entry(url.to_owned())
            .or_insert_with(|| Entry {
                canned: Canned::Reply(not_found()),
                delay: None,
            })
            .delay = Some(delay);
        self
    }

    /// Every URL requested so far, in request order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }

    pub(crate) async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        self.requests.lock().await.push(url.to_owned());

        let Some(entry) = self.entries.get(url) else {
            return Ok(not_found());
        };

        if let Some(delay) = entry.delay {
            tokio::time::sleep(delay).await;
        }

        match &entry.canned {
            Canned::Reply(response) => Ok(response.clone()),
            Canned::Unreachable => Err(FetchError::Unreachable(url.to_owned())),
        }
    }
}

fn not_found() -> FetchResponse {
    FetchResponse {
        status: 404,
        body: NOT_FOUND_BODY.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_url_is_not_found() {
        let source = FixtureSource::new();
        let response = source.get("https://example.test/missing").await;
        assert!(matches!(response, Ok(ref r) if r.status == 404));
        assert_eq!(source.requests().await, vec!["https://example.test/missing"]);
    }

    #[tokio::test]
    async fn registered_json_is_returned() {
        let source =
            FixtureSource::new().with_json("https://example.test/a", &serde_json::json!({"x": 1}));
        let response = source.get("https://example.test/a").await;
        assert!(matches!(response, Ok(ref r) if r.is_success()));
        let value = response.map(|r| r.json::<serde_json::Value>());
        assert!(matches!(value, Ok(Ok(ref v)) if v["x"] == 1));
    }

    #[tokio::test]
    async fn unreachable_url_fails() {
        let source = FixtureSource::new().with_unreachable("https://example.test/down");
        let response = source.get("https://example.test/down").await;
        assert!(matches!(response, Err(FetchError::Unreachable(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_response_waits() {
        let source = FixtureSource::new()
            .with_status("https://example.test/slow", 204)
            .with_delay("https://example.test/slow", Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        let response = source.get("https://example.test/slow").await;
        assert!(matches!(response, Ok(ref r) if r.status == 204));
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn delay_on_unregistered_url_still_waits() {
        let source = FixtureSource::new()
            .with_delay("https://example.test/typo", Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        let response = source.get("https://example.test/typo").await;
        assert!(matches!(response, Ok(ref r) if r.status == 404));
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}

//! Data source abstraction for `PokeAPI` requests.
//!
//! Uses enum dispatch instead of trait objects because async methods are
//! not dyn-compatible. [`HttpSource`] talks to the live service over
//! `reqwest`; [`FixtureSource`] answers from memory.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{BuildError, FetchError};
use crate::fixture::FixtureSource;

/// Status line and body of one GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl FetchResponse {
    /// Whether the status is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Where lookups are sent.
pub enum DexSource {
    /// The live `PokeAPI` service.
    Live(HttpSource),
    /// Canned responses held in memory.
    Fixture(FixtureSource),
}

impl DexSource {
    /// Issue a GET request for `url`.
    ///
    /// A non-success status is not an error at this level; callers decide
    /// what a 404 means for their step.
    pub async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        match self {
            Self::Live(source) => source.get(url).await,
            Self::Fixture(source) => source.get(url).await,
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Live(_) => "live",
            Self::Fixture(_) => "fixture",
        }
    }
}

impl From<HttpSource> for DexSource {
    fn from(source: HttpSource) -> Self {
        Self::Live(source)
    }
}

impl From<FixtureSource> for DexSource {
    fn from(source: FixtureSource) -> Self {
        Self::Fixture(source)
    }
}

/// HTTP client settings for [`HttpSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("pokedex-lineage/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: None,
        }
    }
}

/// Source backed by a shared `reqwest` client.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Build a client from the given settings.
    pub fn new(config: &SourceConfig) -> Result<Self, BuildError> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(url, e))?;

        debug!(url, status, bytes = body.len(), "response received");
        Ok(FetchResponse { status, body })
    }
}

/// Separate timeouts from other transport failures.
fn classify(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_owned(),
        }
    } else {
        FetchError::Transport(error)
    }
}

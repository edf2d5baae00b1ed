//! Analytics API access
//!
//! Fetches the download trend report with HTTP basic auth. The credentials
//! live in the environment; without them there is nothing to fetch.

pub mod trend;

use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

pub use trend::TrendReport;

const USER_ENV: &str = "WOOPRA_USER";
const PASSWORD_ENV: &str = "WOOPRA_PASSWORD";

/// Basic auth credentials for the analytics API
#[derive(Clone)]
pub struct AnalyticsCredentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for AnalyticsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsCredentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AnalyticsCredentials {
    /// Read `WOOPRA_USER` and `WOOPRA_PASSWORD` from the environment
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build credentials from any key lookup
    ///
    /// Returns `None` when the user is not set. A missing password is
    /// treated as empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let user = lookup(USER_ENV)?;
        Some(Self {
            user,
            password: lookup(PASSWORD_ENV).unwrap_or_default(),
        })
    }
}

/// Source of trend reports
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    async fn fetch_trend(&self) -> anyhow::Result<TrendReport>;
}

/// HTTP client for the analytics trend endpoint
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    http: reqwest::Client,
    url: String,
    credentials: AnalyticsCredentials,
}

impl AnalyticsClient {
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        credentials: AnalyticsCredentials,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build analytics HTTP client")?;

        Ok(Self {
            http,
            url: url.into(),
            credentials,
        })
    }
}

#[async_trait]
impl AnalyticsSource for AnalyticsClient {
    async fn fetch_trend(&self) -> anyhow::Result<TrendReport> {
        log::debug!("Fetching trend report from {}", self.url);

        let report = self
            .http
            .get(&self.url)
            .basic_auth(&self.credentials.user, Some(&self.credentials.password))
            .send()
            .await
            .context("Trend report request failed")?
            .error_for_status()
            .context("Trend report request was rejected")?
            .json::<TrendReport>()
            .await
            .context("Failed to decode trend report")?;

        Ok(report)
    }
}

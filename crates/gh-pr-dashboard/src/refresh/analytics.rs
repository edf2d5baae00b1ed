//! Download stats refresher

use crate::analytics::{AnalyticsClient, AnalyticsCredentials, AnalyticsSource};
use crate::domain_models::PlatformStats;
use crate::scheduler::Refresher;
use crate::state::DashboardState;
use async_trait::async_trait;
use gh_pr_config::AppConfig;

pub struct AnalyticsRefresher {
    config: AppConfig,
    state: DashboardState,
}

impl AnalyticsRefresher {
    pub fn new(config: AppConfig, state: DashboardState) -> Self {
        Self { config, state }
    }

    /// Refresh with the given credentials; `None` skips the run
    async fn run(&self, credentials: Option<AnalyticsCredentials>) -> anyhow::Result<()> {
        let Some(credentials) = credentials else {
            log::debug!("Analytics credentials not set, skipping");
            return Ok(());
        };

        log::info!("refreshing analytics");
        let client = AnalyticsClient::new(
            self.config.analytics_url.clone(),
            self.config.analytics_timeout(),
            credentials,
        )?;
        self.refresh_with(&client).await
    }

    /// Fetch a trend report from `source` and replace the stats
    ///
    /// On any error the previous stats stay in place.
    pub async fn refresh_with(&self, source: &dyn AnalyticsSource) -> anyhow::Result<()> {
        let report = source.fetch_trend().await?;
        let stats = PlatformStats::try_from(&report)?;

        log::debug!("Download stats: {:?}", stats.as_array());
        self.state.replace_stats(stats);
        Ok(())
    }
}

#[async_trait]
impl Refresher for AnalyticsRefresher {
    fn name(&self) -> &'static str {
        "analytics"
    }

    async fn refresh(&self) -> anyhow::Result<()> {
        self.run(AnalyticsCredentials::from_env()).await
    }
}

//! Fixed-interval background refresh loops
//!
//! Each refresher runs in its own tokio task: refresh, log and swallow any
//! error, sleep, repeat. A slow refresh only delays its own next run. The
//! loops never talk to each other; their results meet in `DashboardState`.

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// One unit of periodic work
#[async_trait]
pub trait Refresher: Send + Sync + 'static {
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Run a single refresh
    async fn refresh(&self) -> anyhow::Result<()>;
}

/// Spawn a task that runs `refresher` now and then every `period`
///
/// Errors are logged and retried on the next tick, without backoff.
/// The returned handle is only needed to abort the loop; dropping it
/// leaves the loop running for the lifetime of the runtime.
pub fn spawn_periodic<R: Refresher>(refresher: R, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        log::info!(
            "Starting {} refresh loop (every {:?})",
            refresher.name(),
            period
        );

        loop {
            let started = Instant::now();
            match refresher.refresh().await {
                Ok(()) => log::debug!(
                    "{} refresh finished in {:?}",
                    refresher.name(),
                    started.elapsed()
                ),
                Err(e) => log::error!("{} refresh failed: {:#}", refresher.name(), e),
            }

            tokio::time::sleep(period).await;
        }
    })
}

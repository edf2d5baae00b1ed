mod analytics;
mod domain_models;
mod logger;
mod refresh;
mod render;
mod scheduler;
mod server;
mod state;

use gh_pr_config::AppConfig;
use refresh::{AnalyticsRefresher, PullRequestRefresher};
use state::DashboardState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the logger so RUST_LOG and the analytics credentials
    // can come from it
    let dotenv = dotenvy::dotenv();

    logger::init();
    log::info!("Starting gh-pr-dashboard");

    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Failed to load .env: {}", e),
    }

    let config = AppConfig::load();
    log::info!(
        "Watching organization {} (pull requests every {:?}, analytics every {:?})",
        config.organization,
        config.pr_refresh_interval(),
        config.analytics_refresh_interval()
    );

    let state = DashboardState::new();

    scheduler::spawn_periodic(
        PullRequestRefresher::new(config.clone(), state.clone()),
        config.pr_refresh_interval(),
    );
    scheduler::spawn_periodic(
        AnalyticsRefresher::new(config.clone(), state.clone()),
        config.analytics_refresh_interval(),
    );

    server::serve(&config.listen_addr, state).await?;

    log::info!("Exiting gh-pr-dashboard");
    Ok(())
}

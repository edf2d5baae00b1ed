//! Refreshers feeding the dashboard state
//!
//! - `PullRequestRefresher`: open pull requests and their CI status
//! - `AnalyticsRefresher`: download stats per platform

pub mod analytics;
pub mod pull_requests;

pub use analytics::AnalyticsRefresher;
pub use pull_requests::PullRequestRefresher;

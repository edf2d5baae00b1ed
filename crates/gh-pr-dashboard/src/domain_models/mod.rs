//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from the API DTOs.

pub mod platform_stats;
pub mod pull_request;
pub mod status_counts;

pub use platform_stats::PlatformStats;
pub use pull_request::DashboardPullRequest;
pub use status_counts::StatusCounts;

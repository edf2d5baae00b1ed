//! GitHub API client for polling an organization's pull requests
//!
//! This crate provides a trait-based GitHub API client. Consumers program
//! against `GitHubClient`; `OctocrabClient` is the implementation that
//! talks to the real API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - list_org_repositories()                       │
//! │  - fetch_pull_requests()                         │
//! │  - fetch_commit_statuses()                       │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!               ┌─────────────────┐
//!               │ OctocrabClient  │
//!               │ (direct API)    │
//!               └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::from_token("token")?;
//! for repo in client.list_org_repositories("code-ready").await? {
//!     let prs = client.fetch_pull_requests("code-ready", &repo.name).await?;
//!     println!("{}: {} open PRs", repo.name, prs.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod types;

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use types::{CheckState, CommitStatus, PullRequest, Repository};

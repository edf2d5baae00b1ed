//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy. The dashboard refreshers only ever talk
//! to this trait, so tests can substitute an in-memory implementation.

use crate::types::{CommitStatus, PullRequest, Repository};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the read-only subset of the GitHub API needed to poll an
/// organization's open pull requests and their CI status.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, Repository};
///
/// async fn list(client: &dyn GitHubClient) -> anyhow::Result<Vec<Repository>> {
///     client.list_org_repositories("code-ready").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// List the public repositories of an organization
    ///
    /// # Arguments
    ///
    /// * `org` - Organization login
    ///
    /// # Returns
    ///
    /// Every public repository of the organization, across all pages.
    async fn list_org_repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>>;

    /// Fetch open pull requests for a repository
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    ///
    /// A list of open pull requests, or an error if the API call fails.
    async fn fetch_pull_requests(&self, owner: &str, repo: &str)
        -> anyhow::Result<Vec<PullRequest>>;

    /// Fetch the commit statuses reported for a ref
    ///
    /// The statuses are returned in the order the API delivers them.
    /// GitHub documents that order as reverse chronological, and callers
    /// rely on it when they keep the first status seen per context.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `commit_sha` - The commit SHA to get statuses for
    async fn fetch_commit_statuses(
        &self,
        owner: &str,
        repo: &str,
        commit_sha: &str,
    ) -> anyhow::Result<Vec<CommitStatus>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckState;

    struct StaticClient;

    #[async_trait]
    impl GitHubClient for StaticClient {
        async fn list_org_repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>> {
            Ok(vec![Repository {
                name: "crc".to_string(),
                full_name: format!("{}/crc", org),
                html_url: format!("https://github.com/{}/crc", org),
            }])
        }

        async fn fetch_pull_requests(
            &self,
            _owner: &str,
            _repo: &str,
        ) -> anyhow::Result<Vec<PullRequest>> {
            Ok(Vec::new())
        }

        async fn fetch_commit_statuses(
            &self,
            _owner: &str,
            _repo: &str,
            _commit_sha: &str,
        ) -> anyhow::Result<Vec<CommitStatus>> {
            Ok(vec![CommitStatus::new("ci", CheckState::Success)])
        }
    }

    #[tokio::test]
    async fn test_trait_object_usable() {
        let client: Box<dyn GitHubClient> = Box::new(StaticClient);

        let repos = client.list_org_repositories("code-ready").await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].full_name, "code-ready/crc");

        let statuses = client
            .fetch_commit_statuses("code-ready", "crc", "abc123")
            .await
            .unwrap();
        assert_eq!(statuses[0].state, CheckState::Success);
    }
}

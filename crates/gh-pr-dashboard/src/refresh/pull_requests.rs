//! Pull request refresher
//!
//! Walks every public repository of the organization, classifies the CI
//! status of each open pull request and stores the result per repository.

use crate::domain_models::{DashboardPullRequest, StatusCounts};
use crate::scheduler::Refresher;
use crate::state::DashboardState;
use anyhow::Context;
use async_trait::async_trait;
use gh_client::{GitHubClient, OctocrabClient};
use gh_pr_config::{AppConfig, Credentials};

pub struct PullRequestRefresher {
    config: AppConfig,
    state: DashboardState,
}

impl PullRequestRefresher {
    pub fn new(config: AppConfig, state: DashboardState) -> Self {
        Self { config, state }
    }

    /// Refresh every repository using `client`
    ///
    /// The first failing API call aborts the run. Repositories finished
    /// before the failure keep their new lists, the rest keep their old ones.
    /// The state lock is only taken to store a finished repository.
    pub async fn refresh_with(&self, client: &dyn GitHubClient) -> anyhow::Result<()> {
        let org = self.config.organization.as_str();
        let repositories = client
            .list_org_repositories(org)
            .await
            .with_context(|| format!("Failed to list repositories of {}", org))?;

        for repository in repositories {
            log::info!("refreshing {}", repository.name);

            let pull_requests = client
                .fetch_pull_requests(org, &repository.name)
                .await
                .with_context(|| {
                    format!("Failed to list pull requests of {}", repository.full_name)
                })?;

            let mut entries = Vec::with_capacity(pull_requests.len());
            for pull_request in pull_requests {
                let statuses = client
                    .fetch_commit_statuses(org, &pull_request.repository, &pull_request.head_sha)
                    .await
                    .with_context(|| {
                        format!(
                            "Failed to list statuses of {}#{}",
                            repository.full_name, pull_request.number
                        )
                    })?;

                let status = StatusCounts::classify(&statuses, &self.config.ignored_contexts);
                entries.push(DashboardPullRequest::new(pull_request, status));
            }

            log::debug!("{}: {} open pull requests", repository.name, entries.len());
            self.state.replace_repository(repository.name, entries);
        }

        Ok(())
    }
}

#[async_trait]
impl Refresher for PullRequestRefresher {
    fn name(&self) -> &'static str {
        "pull request"
    }

    async fn refresh(&self) -> anyhow::Result<()> {
        let path = self.config.credentials_path()?;
        let credentials = Credentials::load(&path)?;
        let client = OctocrabClient::from_token(credentials.oauth_token)?;
        self.refresh_with(&client).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::pull_request;
    use gh_client::{CheckState, CommitStatus, PullRequest, Repository};
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory GitHub with an optional repository whose PR listing fails
    #[derive(Default)]
    struct FakeGitHub {
        repositories: Vec<String>,
        pull_requests: HashMap<String, Vec<PullRequest>>,
        statuses: HashMap<String, Vec<CommitStatus>>,
        failing_repository: Option<String>,
    }

    #[async_trait]
    impl GitHubClient for FakeGitHub {
        async fn list_org_repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>> {
            Ok(self
                .repositories
                .iter()
                .map(|name| Repository {
                    name: name.clone(),
                    full_name: format!("{}/{}", org, name),
                    html_url: String::new(),
                })
                .collect())
        }

        async fn fetch_pull_requests(
            &self,
            _owner: &str,
            repo: &str,
        ) -> anyhow::Result<Vec<PullRequest>> {
            if self.failing_repository.as_deref() == Some(repo) {
                anyhow::bail!("502 Bad Gateway");
            }
            Ok(self.pull_requests.get(repo).cloned().unwrap_or_default())
        }

        async fn fetch_commit_statuses(
            &self,
            _owner: &str,
            _repo: &str,
            commit_sha: &str,
        ) -> anyhow::Result<Vec<CommitStatus>> {
            Ok(self.statuses.get(commit_sha).cloned().unwrap_or_default())
        }
    }

    fn refresher(state: &DashboardState) -> PullRequestRefresher {
        PullRequestRefresher::new(AppConfig::default(), state.clone())
    }

    fn numbers(state: &DashboardState, repo: &str) -> Option<Vec<u64>> {
        state
            .repository(repo)
            .map(|prs| prs.iter().map(|pr| pr.pull_request.number).collect())
    }

    #[tokio::test]
    async fn test_refresh_classifies_statuses() {
        let mut github = FakeGitHub {
            repositories: vec!["crc".to_string()],
            ..Default::default()
        };
        github
            .pull_requests
            .insert("crc".to_string(), vec![pull_request("crc", 42, 100)]);
        github.statuses.insert(
            "sha-42".to_string(),
            vec![
                CommitStatus::new("a", CheckState::Failure),
                CommitStatus::new("b", CheckState::Pending),
                CommitStatus::new("a", CheckState::Success),
                CommitStatus::new("centos-x", CheckState::Failure),
            ],
        );

        let state = DashboardState::new();
        refresher(&state).refresh_with(&github).await.unwrap();

        let prs = state.repository("crc").unwrap();
        assert_eq!(prs.len(), 1);
        assert_eq!(
            prs[0].status,
            StatusCounts {
                pending: 1,
                failures: 1,
                total: 2
            }
        );
    }

    #[tokio::test]
    async fn test_failed_repository_aborts_tick_and_keeps_earlier_updates() {
        let state = DashboardState::new();
        for repo in ["a", "b", "c"] {
            state.replace_repository(
                repo,
                vec![DashboardPullRequest::new(
                    pull_request(repo, 1, 10),
                    StatusCounts::default(),
                )],
            );
        }

        let mut github = FakeGitHub {
            repositories: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            failing_repository: Some("c".to_string()),
            ..Default::default()
        };
        github
            .pull_requests
            .insert("a".to_string(), vec![pull_request("a", 2, 20)]);
        github
            .pull_requests
            .insert("b".to_string(), vec![pull_request("b", 3, 30)]);

        let err = refresher(&state).refresh_with(&github).await.unwrap_err();
        assert!(format!("{:#}", err).contains("502 Bad Gateway"));

        assert_eq!(numbers(&state, "a"), Some(vec![2]));
        assert_eq!(numbers(&state, "b"), Some(vec![3]));
        assert_eq!(numbers(&state, "c"), Some(vec![1]));
    }

    #[tokio::test]
    async fn test_repository_without_pull_requests_is_emptied() {
        let state = DashboardState::new();
        state.replace_repository(
            "crc",
            vec![DashboardPullRequest::new(
                pull_request("crc", 1, 10),
                StatusCounts::default(),
            )],
        );

        let github = FakeGitHub {
            repositories: vec!["crc".to_string()],
            ..Default::default()
        };
        refresher(&state).refresh_with(&github).await.unwrap();

        assert_eq!(numbers(&state, "crc"), Some(vec![]));
    }

    #[tokio::test]
    async fn test_vanished_repository_is_not_pruned() {
        let state = DashboardState::new();
        state.replace_repository(
            "archived",
            vec![DashboardPullRequest::new(
                pull_request("archived", 5, 10),
                StatusCounts::default(),
            )],
        );

        let github = FakeGitHub {
            repositories: vec!["crc".to_string()],
            ..Default::default()
        };
        refresher(&state).refresh_with(&github).await.unwrap();

        assert_eq!(numbers(&state, "archived"), Some(vec![5]));
        assert_eq!(numbers(&state, "crc"), Some(vec![]));
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_the_tick() {
        let config = AppConfig {
            credentials_path: Some(PathBuf::from("/nonexistent/gh-pr-dashboard/hub")),
            ..AppConfig::default()
        };
        let state = DashboardState::new();
        let refresher = PullRequestRefresher::new(config, state.clone());

        assert!(refresher.refresh().await.is_err());
        assert_eq!(state.snapshot().repository_count, 0);
    }
}

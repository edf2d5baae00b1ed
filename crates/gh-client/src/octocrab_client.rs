//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! This client makes real API calls without any caching.

use crate::client::GitHubClient;
use crate::types::{CheckState, CommitStatus, PullRequest, Repository};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// Page size used for every list request
const PER_PAGE: u8 = 100;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client for github.com authenticated with a personal access token
    pub fn from_token(token: impl Into<String>) -> anyhow::Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token.into())
            .build()
            .context("Failed to build Octocrab client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

/// Wire shape of one entry of `GET /repos/{owner}/{repo}/commits/{ref}/statuses`
#[derive(Debug, Deserialize)]
struct RawCommitStatus {
    context: Option<String>,
    state: String,
    description: Option<String>,
    target_url: Option<String>,
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn list_org_repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>> {
        debug!("Listing public repositories of {}", org);

        let first_page = self
            .octocrab
            .orgs(org)
            .list_repos()
            .repo_type(octocrab::params::repos::Type::Public)
            .per_page(PER_PAGE)
            .send()
            .await?;

        let repos: Vec<Repository> = self
            .octocrab
            .all_pages(first_page)
            .await?
            .into_iter()
            .map(|repo| convert_repository(org, repo))
            .collect();

        debug!("Found {} public repositories in {}", repos.len(), org);
        Ok(repos)
    }

    async fn fetch_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequest>> {
        debug!("Fetching PRs for {}/{}", owner, repo);

        let first_page = self
            .octocrab
            .pulls(owner, repo)
            .list()
            .state(octocrab::params::State::Open)
            .per_page(PER_PAGE)
            .send()
            .await?;

        let prs: Vec<PullRequest> = self
            .octocrab
            .all_pages(first_page)
            .await?
            .iter()
            .map(|pr| convert_pull_request(repo, pr))
            .collect();

        debug!("Fetched {} PRs for {}/{}", prs.len(), owner, repo);
        Ok(prs)
    }

    async fn fetch_commit_statuses(
        &self,
        owner: &str,
        repo: &str,
        commit_sha: &str,
    ) -> anyhow::Result<Vec<CommitStatus>> {
        debug!(
            "Fetching commit statuses for {}/{} @ {}",
            owner, repo, commit_sha
        );

        // Only the first page: statuses arrive newest first and the dashboard
        // keeps the first status per context anyway.
        let route = format!("/repos/{}/{}/commits/{}/statuses", owner, repo, commit_sha);
        let per_page = PER_PAGE.to_string();
        let raw: Vec<RawCommitStatus> = self
            .octocrab
            .get(route, Some(&[("per_page", per_page.as_str())]))
            .await?;

        Ok(raw.into_iter().map(convert_commit_status).collect())
    }
}

/// Convert an octocrab Repository to our Repository type
fn convert_repository(org: &str, repo: octocrab::models::Repository) -> Repository {
    Repository {
        full_name: repo
            .full_name
            .unwrap_or_else(|| format!("{}/{}", org, repo.name)),
        html_url: repo
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
        name: repo.name,
    }
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(repo: &str, pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        repository: pr
            .base
            .repo
            .as_ref()
            .map(|r| r.name.clone())
            .unwrap_or_else(|| repo.to_string()),
        head_sha: pr.head.sha.clone(),
        draft: pr.draft.unwrap_or(false),
        created_at: pr.created_at.unwrap_or_else(chrono::Utc::now),
        updated_at: pr.updated_at.unwrap_or_else(chrono::Utc::now),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}

fn convert_commit_status(raw: RawCommitStatus) -> CommitStatus {
    CommitStatus {
        context: raw.context.unwrap_or_else(|| "unknown".to_string()),
        state: convert_status_state(&raw.state),
        description: raw.description,
        target_url: raw.target_url,
    }
}

/// Convert a status state string from the GitHub API to our enum
///
/// Matching is exact. Anything else becomes `Unknown`, which counts
/// neither as pending nor as failed.
fn convert_status_state(state: &str) -> CheckState {
    match state {
        "success" => CheckState::Success,
        "pending" => CheckState::Pending,
        "failure" => CheckState::Failure,
        "error" => CheckState::Error,
        _ => CheckState::Unknown,
    }
}

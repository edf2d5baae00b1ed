//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from application domain models
//! to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository belonging to an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name (e.g., "crc")
    pub name: String,

    /// Full name including the owner (e.g., "code-ready/crc")
    pub full_name: String,

    /// Repository URL for opening in browser
    pub html_url: String,
}

/// A pull request from the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// Author's GitHub username
    pub author: String,

    /// Name of the repository the PR targets
    pub repository: String,

    /// HEAD commit SHA
    pub head_sha: String,

    /// Whether the PR is still a draft
    pub draft: bool,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// When the PR was last updated
    pub updated_at: DateTime<Utc>,

    /// PR URL for opening in browser
    pub html_url: String,
}

/// State of a single commit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    /// The check passed
    Success,
    /// The check has not reported a result yet
    Pending,
    /// The check failed
    Failure,
    /// The check could not run
    Error,
    /// A state string GitHub does not document
    #[serde(other)]
    Unknown,
}

/// Individual commit status (from the Status API, not Checks API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    /// Status context (e.g., "ci/circleci")
    pub context: String,

    /// Reported state
    pub state: CheckState,

    /// Description of the status
    pub description: Option<String>,

    /// URL for more details
    pub target_url: Option<String>,
}

impl CommitStatus {
    /// Create a status with just a context and a state
    pub fn new(context: impl Into<String>, state: CheckState) -> Self {
        Self {
            context: context.into(),
            state,
            description: None,
            target_url: None,
        }
    }
}

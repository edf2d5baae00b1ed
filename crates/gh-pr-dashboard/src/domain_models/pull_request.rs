//! Pull Request model
//!
//! Domain model for a pull request as shown on the dashboard.

use super::StatusCounts;
use gh_client::PullRequest;

/// A GitHub pull request together with its classified CI status
///
/// Identified by repository and number. Built fresh on every refresh.
#[derive(Debug, Clone)]
pub struct DashboardPullRequest {
    /// Pull request as returned by the API
    pub pull_request: PullRequest,
    /// Status counts of the head commit
    pub status: StatusCounts,
}

impl DashboardPullRequest {
    pub fn new(pull_request: PullRequest, status: StatusCounts) -> Self {
        Self {
            pull_request,
            status,
        }
    }

    /// (repository, number) identity of the pull request
    pub fn key(&self) -> (&str, u64) {
        (&self.pull_request.repository, self.pull_request.number)
    }
}

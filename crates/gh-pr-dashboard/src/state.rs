//! Shared dashboard state
//!
//! One container owns everything the refreshers produce. Both refresh loops
//! and the HTTP handler get a clone of the same `DashboardState` handle; the
//! mutex behind it is private, so every access is a short in-memory
//! assignment or copy and no caller can hold it across an `.await`.

use crate::domain_models::{DashboardPullRequest, PlatformStats};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    /// Open pull requests per repository name. Repositories that disappear
    /// upstream keep their last entry.
    pull_requests_by_repo: HashMap<String, Vec<DashboardPullRequest>>,
    /// Latest download stats, `None` until the first successful refresh
    stats: Option<PlatformStats>,
}

/// Cloneable handle to the process-wide dashboard state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    inner: Arc<Mutex<Inner>>,
}

/// Consistent copy of the state taken under the lock
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// Pull requests of all repositories, newest first
    pub pull_requests: Vec<DashboardPullRequest>,
    /// Latest download stats, if any
    pub stats: Option<PlatformStats>,
    /// Number of repositories with an entry
    pub repository_count: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Writers only assign whole values, so a poisoned lock still holds
        // consistent data.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the pull request list of one repository
    pub fn replace_repository(
        &self,
        repository: impl Into<String>,
        pull_requests: Vec<DashboardPullRequest>,
    ) {
        let repository = repository.into();
        self.lock()
            .pull_requests_by_repo
            .insert(repository, pull_requests);
    }

    /// Replace the download stats
    pub fn replace_stats(&self, stats: PlatformStats) {
        self.lock().stats = Some(stats);
    }

    /// Current pull request list of one repository
    #[cfg(test)]
    pub fn repository(&self, repository: &str) -> Option<Vec<DashboardPullRequest>> {
        self.lock().pull_requests_by_repo.get(repository).cloned()
    }

    /// Current download stats
    #[cfg(test)]
    pub fn stats(&self) -> Option<PlatformStats> {
        self.lock().stats
    }

    /// Copy the state and flatten it for rendering
    ///
    /// The copy is taken under the lock; flattening and sorting happen
    /// after it is released.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let (by_repo, stats) = {
            let inner = self.lock();
            (inner.pull_requests_by_repo.clone(), inner.stats)
        };

        let repository_count = by_repo.len();
        let mut pull_requests: Vec<DashboardPullRequest> =
            by_repo.into_values().flatten().collect();

        pull_requests.sort_by(|a, b| {
            b.pull_request
                .created_at
                .cmp(&a.pull_request.created_at)
                .then_with(|| a.key().cmp(&b.key()))
        });

        DashboardSnapshot {
            pull_requests,
            stats,
            repository_count,
        }
    }
}

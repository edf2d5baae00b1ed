//! CI status counts
//!
//! Condenses the commit statuses of a pull request's head commit into the
//! three numbers the dashboard shows.

use gh_client::{CheckState, CommitStatus};
use std::collections::HashSet;

/// Pending, failing and total distinct checks of one commit
///
/// `pending + failures <= total` always holds: every counted check adds
/// one to `total` and at most one to either of the other two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub failures: usize,
    pub total: usize,
}

impl StatusCounts {
    /// Classify commit statuses in the order the API delivered them
    ///
    /// A status is skipped when its context contains any of the `ignored`
    /// substrings, or when a status with the same context was already seen.
    /// The first status per context decides, so this relies on the API
    /// listing the most recent status first.
    pub fn classify<S: AsRef<str>>(statuses: &[CommitStatus], ignored: &[S]) -> Self {
        let mut counts = Self::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for status in statuses {
            let context = status.context.as_str();
            if ignored.iter().any(|needle| context.contains(needle.as_ref())) {
                continue;
            }
            if !seen.insert(context) {
                continue;
            }

            match status.state {
                CheckState::Failure => counts.failures += 1,
                CheckState::Pending => counts.pending += 1,
                CheckState::Success | CheckState::Error | CheckState::Unknown => {}
            }
            counts.total += 1;
        }

        counts
    }

    /// Number of counted checks that neither failed nor are pending
    pub fn settled(&self) -> usize {
        self.total
            .saturating_sub(self.pending)
            .saturating_sub(self.failures)
    }
}

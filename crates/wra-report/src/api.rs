// api.rs — The GitHub operations the reporter depends on.

use serde::{Deserialize, Serialize};
use wra_catalog::RawArtifact;

use crate::error::TransportError;

/// Body of a commit status write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    pub state: String,
    pub target_url: String,
    pub description: String,
    pub context: String,
}

/// A pull request associated with a workflow run.
///
/// Only the number is used; the rest of the event payload entry is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub number: u64,
}

/// GitHub REST operations consumed by the reporter.
///
/// Implementations own authentication, timeouts and any retry policy;
/// callers treat every error as final.
pub trait GitHubApi {
    /// All artifacts of a workflow run, in API order.
    fn list_artifacts(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Vec<RawArtifact>, TransportError>;

    /// Create a status on a commit.
    fn create_commit_status(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        status: &CommitStatus,
    ) -> Result<(), TransportError>;

    /// Post a comment on an issue or pull request.
    fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<(), TransportError>;
}

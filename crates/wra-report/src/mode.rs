// mode.rs — The closed set of report destinations.

use crate::error::ReportError;

/// Where a run's rendered report goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    CommitStatus,
    PullRequest,
    None,
}

impl std::str::FromStr for ReportMode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit_status" => Ok(ReportMode::CommitStatus),
            "pull_request" => Ok(ReportMode::PullRequest),
            "none" => Ok(ReportMode::None),
            other => Err(ReportError::InvalidOption(other.to_string())),
        }
    }
}

impl std::fmt::Display for ReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportMode::CommitStatus => write!(f, "commit_status"),
            ReportMode::PullRequest => write!(f, "pull_request"),
            ReportMode::None => write!(f, "none"),
        }
    }
}

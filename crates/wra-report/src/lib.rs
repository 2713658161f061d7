//! # wra-report
//!
//! Report sinks for workflow-run artifact results.
//!
//! A run reports to exactly one sink, chosen by [`ReportMode`]:
//!
//! - [`CommitStatusSink`] — sets one commit status on the run's head sha
//! - [`PullRequestSink`] — posts one comment on the run's first pull request
//! - [`NoneSink`] — performs no write
//!
//! Sinks talk to GitHub only through the [`GitHubApi`] trait, so transport,
//! authentication and retries stay outside this crate.

pub mod api;
pub mod commit_status;
pub mod error;
pub mod mode;
pub mod none;
pub mod pull_request;
pub mod sink;

pub use api::{CommitStatus, GitHubApi, PullRequestRef};
pub use commit_status::CommitStatusSink;
pub use error::{ReportError, Result, TransportError};
pub use mode::ReportMode;
pub use none::NoneSink;
pub use pull_request::PullRequestSink;
pub use sink::{dispatch, sink_for, ReportOutcome, ReportSink, ReportTarget, ReportTemplates};

#[cfg(test)]
pub(crate) mod test_support;

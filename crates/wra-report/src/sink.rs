//! Core ReportSink trait and dispatch.

use wra_template::Renderer;

use crate::api::{GitHubApi, PullRequestRef};
use crate::commit_status::CommitStatusSink;
use crate::error::Result;
use crate::mode::ReportMode;
use crate::none::NoneSink;
use crate::pull_request::PullRequestSink;

/// The four user-supplied report templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTemplates {
    /// Commit status context label.
    pub context: String,
    /// Commit status description, or the pull-request comment body.
    pub message: String,
    /// Commit status state (`error`, `failure`, `pending`, `success`).
    pub state: String,
    /// Commit status target URL.
    pub target_url: String,
}

/// Where a report is written: the run's repository, head commit and pull requests.
#[derive(Debug, Clone, Copy)]
pub struct ReportTarget<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub sha: &'a str,
    pub pull_requests: &'a [PullRequestRef],
}

/// The write a sink performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    CommitStatus {
        sha: String,
        state: String,
        context: String,
    },
    PullRequestComment {
        issue_number: u64,
    },
    Skipped,
}

impl std::fmt::Display for ReportOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportOutcome::CommitStatus {
                sha,
                state,
                context,
            } => write!(f, "commit status '{}' = {} on {}", context, state, sha),
            ReportOutcome::PullRequestComment { issue_number } => {
                write!(f, "comment on pull request #{}", issue_number)
            }
            ReportOutcome::Skipped => write!(f, "no report"),
        }
    }
}

/// A destination for a run's rendered report.
///
/// Every implementation performs at most one outbound write per call and
/// renders only the template fields it sends.
pub trait ReportSink {
    /// Render this sink's fields and write them.
    fn report(&self, renderer: &Renderer, target: &ReportTarget<'_>) -> Result<ReportOutcome>;

    /// Sink display name (for logging).
    fn name(&self) -> &str;
}

/// Get the sink for a report mode.
pub fn sink_for<'a>(
    mode: ReportMode,
    api: &'a dyn GitHubApi,
    templates: &'a ReportTemplates,
) -> Box<dyn ReportSink + 'a> {
    match mode {
        ReportMode::CommitStatus => Box::new(CommitStatusSink::new(api, templates)),
        ReportMode::PullRequest => Box::new(PullRequestSink::new(api, templates)),
        ReportMode::None => Box::new(NoneSink::new()),
    }
}

/// Report through the sink selected by `mode`.
pub fn dispatch(
    mode: ReportMode,
    api: &dyn GitHubApi,
    templates: &ReportTemplates,
    renderer: &Renderer,
    target: &ReportTarget<'_>,
) -> Result<ReportOutcome> {
    let sink = sink_for(mode, api, templates);
    tracing::debug!(sink = sink.name(), "dispatching report");
    let outcome = sink.report(renderer, target)?;
    tracing::info!("reported {}", outcome);
    Ok(outcome)
}

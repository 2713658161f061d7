//! Pull-request comment sink

use wra_template::Renderer;

use crate::api::GitHubApi;
use crate::error::{ReportError, Result};
use crate::sink::{ReportOutcome, ReportSink, ReportTarget, ReportTemplates};

/// Posts the rendered `message` as a comment on the run's first pull request.
pub struct PullRequestSink<'a> {
    api: &'a dyn GitHubApi,
    templates: &'a ReportTemplates,
}

impl<'a> PullRequestSink<'a> {
    pub fn new(api: &'a dyn GitHubApi, templates: &'a ReportTemplates) -> Self {
        Self { api, templates }
    }
}

impl ReportSink for PullRequestSink<'_> {
    fn report(&self, renderer: &Renderer, target: &ReportTarget<'_>) -> Result<ReportOutcome> {
        let pull_request = target
            .pull_requests
            .first()
            .ok_or(ReportError::NoPullRequest)?;

        let body = renderer.render(&self.templates.message)?;

        tracing::info!(
            "PullRequestSink: commenting on #{} ({} associated)",
            pull_request.number,
            target.pull_requests.len()
        );
        self.api
            .create_issue_comment(target.owner, target.repo, pull_request.number, &body)?;

        Ok(ReportOutcome::PullRequestComment {
            issue_number: pull_request.number,
        })
    }

    fn name(&self) -> &str {
        "pull_request"
    }
}

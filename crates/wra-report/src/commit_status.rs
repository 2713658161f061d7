//! Commit status sink

use wra_template::Renderer;

use crate::api::{CommitStatus, GitHubApi};
use crate::error::Result;
use crate::sink::{ReportOutcome, ReportSink, ReportTarget, ReportTemplates};

/// Sets one status on the run's head commit.
///
/// All four templates are rendered: `state`, `target_url`, `message` (as the
/// status description) and `context`.
pub struct CommitStatusSink<'a> {
    api: &'a dyn GitHubApi,
    templates: &'a ReportTemplates,
}

impl<'a> CommitStatusSink<'a> {
    pub fn new(api: &'a dyn GitHubApi, templates: &'a ReportTemplates) -> Self {
        Self { api, templates }
    }
}

impl ReportSink for CommitStatusSink<'_> {
    fn report(&self, renderer: &Renderer, target: &ReportTarget<'_>) -> Result<ReportOutcome> {
        let status = CommitStatus {
            state: renderer.render(&self.templates.state)?,
            target_url: renderer.render(&self.templates.target_url)?,
            description: renderer.render(&self.templates.message)?,
            context: renderer.render(&self.templates.context)?,
        };

        tracing::info!(
            "CommitStatusSink: setting '{}' = {} on {}",
            status.context,
            status.state,
            target.sha
        );
        self.api
            .create_commit_status(target.owner, target.repo, target.sha, &status)?;

        Ok(ReportOutcome::CommitStatus {
            sha: target.sha.to_string(),
            state: status.state,
            context: status.context,
        })
    }

    fn name(&self) -> &str {
        "commit_status"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::test_support::{renderer, templates, RecordingApi};

    fn target() -> ReportTarget<'static> {
        ReportTarget {
            owner: "acme",
            repo: "widgets",
            sha: "abc123",
            pull_requests: &[],
        }
    }

    #[test]
    fn writes_rendered_fields_to_head_commit() {
        let api = RecordingApi::default();
        let templates = templates();
        let sink = CommitStatusSink::new(&api, &templates);

        let outcome = sink.report(&renderer(), &target()).unwrap();

        let statuses = api.statuses.borrow();
        assert_eq!(statuses.len(), 1);
        let (owner, repo, sha, status) = &statuses[0];
        assert_eq!((owner.as_str(), repo.as_str(), sha.as_str()), ("acme", "widgets", "abc123"));
        assert_eq!(status.state, "success");
        assert_eq!(
            status.target_url,
            "https://github.com/acme/widgets/suites/42/artifacts/1"
        );
        assert_eq!(status.description, "Download build");
        assert_eq!(status.context, "artifacts/build");
        assert_eq!(
            outcome,
            ReportOutcome::CommitStatus {
                sha: "abc123".into(),
                state: "success".into(),
                context: "artifacts/build".into(),
            }
        );
    }

    #[test]
    fn render_failure_prevents_the_write() {
        let api = RecordingApi::default();
        let mut templates = templates();
        templates.context = "{{artifact.missing}}".into();
        let sink = CommitStatusSink::new(&api, &templates);

        let result = sink.report(&renderer(), &target());
        assert!(matches!(result, Err(ReportError::Template(_))));
        assert_eq!(api.write_count(), 0);
    }

    #[test]
    fn transport_failure_propagates() {
        let api = RecordingApi::failing();
        let templates = templates();
        let sink = CommitStatusSink::new(&api, &templates);

        let result = sink.report(&renderer(), &target());
        assert!(matches!(result, Err(ReportError::Transport(_))));
    }
}

// test_support.rs — In-memory GitHubApi and fixtures for sink tests.

use std::cell::RefCell;

use wra_catalog::{Catalog, RawArtifact, RunContext};
use wra_template::Renderer;

use crate::api::{CommitStatus, GitHubApi, PullRequestRef};
use crate::error::TransportError;
use crate::sink::ReportTemplates;

pub const TARGET_PRS: &[PullRequestRef] = &[PullRequestRef { number: 5 }];

type StatusCall = (String, String, String, CommitStatus);
type CommentCall = (String, String, u64, String);

/// Records every write; optionally fails them all.
#[derive(Default)]
pub struct RecordingApi {
    pub statuses: RefCell<Vec<StatusCall>>,
    pub comments: RefCell<Vec<CommentCall>>,
    fail: bool,
}

impl RecordingApi {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.statuses.borrow().len() + self.comments.borrow().len()
    }

    fn check(&self, operation: &str) -> Result<(), TransportError> {
        if self.fail {
            return Err(TransportError::Status {
                operation: operation.to_string(),
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        Ok(())
    }
}

impl GitHubApi for RecordingApi {
    fn list_artifacts(
        &self,
        _owner: &str,
        _repo: &str,
        _run_id: u64,
    ) -> Result<Vec<RawArtifact>, TransportError> {
        self.check("list artifacts")?;
        Ok(Vec::new())
    }

    fn create_commit_status(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        status: &CommitStatus,
    ) -> Result<(), TransportError> {
        self.check("create commit status")?;
        self.statuses.borrow_mut().push((
            owner.to_string(),
            repo.to_string(),
            sha.to_string(),
            status.clone(),
        ));
        Ok(())
    }

    fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<(), TransportError> {
        self.check("create issue comment")?;
        self.comments.borrow_mut().push((
            owner.to_string(),
            repo.to_string(),
            issue_number,
            body.to_string(),
        ));
        Ok(())
    }
}

pub fn templates() -> ReportTemplates {
    ReportTemplates {
        context: "artifacts/{{artifact.name}}".into(),
        message: "Download {{artifact.name}}".into(),
        state: "success".into(),
        target_url: "{{artifact.url}}".into(),
    }
}

/// Renderer over a two-artifact catalog with "build" selected.
pub fn renderer() -> Renderer {
    let catalog = Catalog::build(
        &[RawArtifact::new(1, "build"), RawArtifact::new(2, "docs")],
        RunContext::new("acme", "widgets", 42, "abc123"),
        Some("build"),
    )
    .unwrap();
    Renderer::new(&catalog.render_context()).unwrap()
}

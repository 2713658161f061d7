// event.rs — The triggering event payload.

use std::path::Path;

use serde::Deserialize;
use wra_report::PullRequestRef;

use crate::error::{ActionError, Result};

/// The event that started the pass, as written to `GITHUB_EVENT_PATH`.
///
/// Only the `workflow_run` section is read; any other event leaves it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TriggerEvent {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub workflow_run: Option<WorkflowRun>,
}

/// The completed run whose artifacts are reported.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub check_suite_id: u64,
    pub head_sha: String,
    #[serde(default)]
    pub pull_requests: Vec<PullRequestRef>,
}

impl TriggerEvent {
    /// Load the event payload. A missing path or unreadable payload is a
    /// precondition failure, like a payload without `workflow_run`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.ok_or_else(|| {
            ActionError::Precondition(
                "no event payload: GITHUB_EVENT_PATH is not set".to_string(),
            )
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            ActionError::Precondition(format!(
                "cannot read event payload {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            ActionError::Precondition(format!("event payload is not a valid event: {}", e))
        })
    }

    /// The triggering run, or a precondition error when the event is not a
    /// `workflow_run` event.
    pub fn require_workflow_run(&self) -> Result<&WorkflowRun> {
        self.workflow_run.as_ref().ok_or_else(|| {
            ActionError::Precondition(
                "This action must run on a workflow triggered by `workflow_run`, \
                 so it can get the artifact list properly"
                    .to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PAYLOAD: &str = r#"{
        "action": "completed",
        "workflow_run": {
            "id": 987,
            "check_suite_id": 42,
            "head_sha": "abc123",
            "status": "completed",
            "conclusion": "success",
            "pull_requests": [
                { "id": 1, "number": 12, "url": "https://api.github.com/repos/acme/widgets/pulls/12" },
                { "id": 2, "number": 8 }
            ]
        },
        "repository": { "full_name": "acme/widgets" }
    }"#;

    #[test]
    fn parses_workflow_run_fields() {
        let event = TriggerEvent::from_json(PAYLOAD).unwrap();
        assert_eq!(event.action.as_deref(), Some("completed"));

        let run = event.require_workflow_run().unwrap();
        assert_eq!(run.id, 987);
        assert_eq!(run.check_suite_id, 42);
        assert_eq!(run.head_sha, "abc123");
        assert_eq!(
            run.pull_requests,
            vec![PullRequestRef { number: 12 }, PullRequestRef { number: 8 }]
        );
    }

    #[test]
    fn other_events_fail_the_precondition() {
        let event = TriggerEvent::from_json(r#"{"ref": "refs/heads/main", "after": "abc"}"#)
            .unwrap();
        assert!(matches!(
            event.require_workflow_run(),
            Err(ActionError::Precondition(_))
        ));
    }

    #[test]
    fn missing_pull_requests_defaults_to_empty() {
        let event = TriggerEvent::from_json(
            r#"{"workflow_run": {"id": 1, "check_suite_id": 2, "head_sha": "s"}}"#,
        )
        .unwrap();
        assert!(event.require_workflow_run().unwrap().pull_requests.is_empty());
    }

    #[test]
    fn load_reads_payload_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PAYLOAD.as_bytes()).unwrap();

        let event = TriggerEvent::load(Some(file.path())).unwrap();
        assert_eq!(event.require_workflow_run().unwrap().id, 987);
    }

    #[test]
    fn load_without_path_or_file_is_precondition() {
        assert!(matches!(
            TriggerEvent::load(None),
            Err(ActionError::Precondition(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("event.json");
        assert!(matches!(
            TriggerEvent::load(Some(&missing)),
            Err(ActionError::Precondition(_))
        ));
    }

    #[test]
    fn garbage_payload_is_precondition() {
        assert!(matches!(
            TriggerEvent::from_json("not json"),
            Err(ActionError::Precondition(_))
        ));
    }
}

// artifact.rs — Artifact records and the run they belong to.

use serde::{Deserialize, Serialize};

/// An artifact as listed by the workflow-run artifacts endpoint.
///
/// Only `id` and `name` are kept; every other field of the upstream
/// payload (size, expiry, archive URL, ...) is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArtifact {
    pub id: u64,
    pub name: String,
}

impl RawArtifact {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Identifies the run whose artifacts are being catalogued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    pub owner: String,
    pub repo: String,
    pub check_suite_id: u64,
    pub sha: String,
}

impl RunContext {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        check_suite_id: u64,
        sha: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            check_suite_id,
            sha: sha.into(),
        }
    }

    /// Browser download URL of an artifact attached to this run's check suite.
    pub fn artifact_url(&self, artifact_id: u64) -> String {
        format!(
            "https://github.com/{}/{}/suites/{}/artifacts/{}",
            self.owner, self.repo, self.check_suite_id, artifact_id
        )
    }
}

/// A catalogued artifact: the raw record plus its URL and head commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub commit: String,
}

impl Artifact {
    pub fn from_raw(raw: &RawArtifact, run: &RunContext) -> Self {
        Self {
            id: raw.id,
            name: raw.name.clone(),
            url: run.artifact_url(raw.id),
            commit: run.sha.clone(),
        }
    }
}

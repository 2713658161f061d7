// github.rs — Blocking GitHub REST client.
//
// Implements the three operations the reporter needs. Every non-2xx answer
// becomes a TransportError carrying the status and body; nothing is retried.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use wra_catalog::RawArtifact;
use wra_report::{CommitStatus, GitHubApi, TransportError};

/// Default REST endpoint when `GITHUB_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Page size for artifact listing (the API maximum).
const PER_PAGE: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One page of `GET /repos/{owner}/{repo}/actions/runs/{run_id}/artifacts`.
#[derive(Debug, Deserialize)]
struct ArtifactPage {
    total_count: u64,
    artifacts: Vec<RawArtifact>,
}

/// GitHub REST API client.
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    /// Build a client for `api_url`. An empty token sends unauthenticated requests.
    pub fn new(token: &str, api_url: &str) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("wra/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static("2022-11-28"));
        let token = token.trim();
        if !token.is_empty() {
            let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| TransportError::InvalidHeader("authorization".to_string()))?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Http {
                operation: "client setup".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response, TransportError> {
        let response = request.send().map_err(|e| TransportError::Http {
            operation: operation.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TransportError::Status {
                operation: operation.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn artifact_page(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        page: u32,
    ) -> Result<ArtifactPage, TransportError> {
        const OPERATION: &str = "list workflow run artifacts";
        let url = self.url(&format!(
            "/repos/{}/{}/actions/runs/{}/artifacts",
            owner, repo, run_id
        ));
        tracing::debug!(run_id, page, "fetching artifact page");
        let response = self.send(
            OPERATION,
            self.http
                .get(url)
                .query(&[("per_page", PER_PAGE), ("page", page)]),
        )?;
        response.json().map_err(|e| TransportError::Decode {
            operation: OPERATION.to_string(),
            message: e.to_string(),
        })
    }
}

/// Concatenate pages until `total_count` artifacts are collected or a page
/// comes back empty. Order is preserved across pages.
fn collect_pages<F>(mut fetch: F) -> Result<Vec<RawArtifact>, TransportError>
where
    F: FnMut(u32) -> Result<ArtifactPage, TransportError>,
{
    let mut artifacts = Vec::new();
    let mut page = 1;
    loop {
        let batch = fetch(page)?;
        let received = batch.artifacts.len();
        artifacts.extend(batch.artifacts);
        if received == 0 || artifacts.len() as u64 >= batch.total_count {
            return Ok(artifacts);
        }
        page += 1;
    }
}

impl GitHubApi for GitHubClient {
    fn list_artifacts(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Vec<RawArtifact>, TransportError> {
        collect_pages(|page| self.artifact_page(owner, repo, run_id, page))
    }

    fn create_commit_status(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        status: &CommitStatus,
    ) -> Result<(), TransportError> {
        let url = self.url(&format!("/repos/{}/{}/statuses/{}", owner, repo, sha));
        self.send("create commit status", self.http.post(url).json(status))?;
        Ok(())
    }

    fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<(), TransportError> {
        let url = self.url(&format!(
            "/repos/{}/{}/issues/{}/comments",
            owner, repo, issue_number
        ));
        self.send(
            "create issue comment",
            self.http
                .post(url)
                .json(&serde_json::json!({ "body": body })),
        )?;
        Ok(())
    }
}

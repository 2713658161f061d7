// orchestrator.rs — One reporting pass.
//
// Strictly sequential:
//
//   1. require a workflow_run trigger        (no network before this)
//   2. list the run's artifacts              (one or more GETs)
//   3. build the catalog
//   4. ignore-empty short-circuit            (no write, no outputs)
//   5. parse report-on, render, dispatch     (at most one write)
//   6. publish artifact_id / artifact_url / artifact_list
//
// The first error ends the pass; nothing is retried.

use wra_catalog::{Catalog, RunContext};
use wra_report::{dispatch, GitHubApi, ReportError, ReportMode, ReportOutcome, ReportTarget};
use wra_template::Renderer;

use crate::config::{ActionConfig, Repository};
use crate::error::Result;
use crate::event::TriggerEvent;
use crate::outputs::StepOutputs;

/// How a pass ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// `ignore-empty` was set and the run had no artifacts.
    Skipped,
    /// The report was dispatched and the outputs published.
    Reported {
        artifacts: usize,
        outcome: ReportOutcome,
    },
}

/// Run one pass for the workflow run in `event`.
pub fn run_pass(
    config: &ActionConfig,
    repository: &Repository,
    event: &TriggerEvent,
    api: &dyn GitHubApi,
    outputs: &mut dyn StepOutputs,
) -> Result<PassOutcome> {
    let run = event.require_workflow_run()?;
    tracing::info!(
        "Processing workflow run {} of {} (check suite {}, head {})",
        run.id,
        repository,
        run.check_suite_id,
        run.head_sha
    );
    tracing::debug!(?config, action = ?event.action, "pass configuration");

    let raw = api.list_artifacts(&repository.owner, &repository.repo, run.id)?;

    let context = RunContext::new(
        repository.owner.as_str(),
        repository.repo.as_str(),
        run.check_suite_id,
        run.head_sha.as_str(),
    );
    let catalog = Catalog::build(&raw, context, config.artifact_name.as_deref())?;
    tracing::info!(
        "Found {} artifact(s){}",
        catalog.len(),
        catalog
            .selected()
            .map(|a| format!(", selected '{}' (id {})", a.name, a.id))
            .unwrap_or_default()
    );

    if config.ignore_empty && catalog.is_empty() {
        tracing::info!(
            "Ignoring run because list of artifacts is empty and ignore-empty is 'true'"
        );
        return Ok(PassOutcome::Skipped);
    }

    let mode: ReportMode = config.report_on.parse()?;
    let renderer = Renderer::new(&catalog.render_context()).map_err(ReportError::from)?;
    let target = ReportTarget {
        owner: &catalog.context().owner,
        repo: &catalog.context().repo,
        sha: &catalog.context().sha,
        pull_requests: &run.pull_requests,
    };
    let outcome = dispatch(mode, api, &config.templates, &renderer, &target)?;

    emit_outputs(&catalog, outputs)?;

    Ok(PassOutcome::Reported {
        artifacts: catalog.len(),
        outcome,
    })
}

/// Publish `artifact_id`, `artifact_url` and `artifact_list` for `catalog`.
///
/// Without a selection the id and url are empty strings. The list is the
/// compact JSON array of all artifacts in upstream order.
pub fn emit_outputs(catalog: &Catalog, outputs: &mut dyn StepOutputs) -> Result<()> {
    let selected = catalog.selected();
    let artifact_id = selected.map(|a| a.id.to_string()).unwrap_or_default();
    let artifact_url = selected.map(|a| a.url.as_str()).unwrap_or("");
    let artifact_list = serde_json::to_string(catalog.list())?;

    outputs.set_output("artifact_id", &artifact_id)?;
    outputs.set_output("artifact_url", artifact_url)?;
    outputs.set_output("artifact_list", &artifact_list)?;
    Ok(())
}

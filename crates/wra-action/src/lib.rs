//! # wra-action
//!
//! One reporting pass over a completed workflow run.
//!
//! The pass reads the `workflow_run` trigger event, lists the run's
//! artifacts, builds a [`wra_catalog::Catalog`], reports through the
//! configured [`wra_report::ReportSink`] and publishes the step outputs
//! `artifact_id`, `artifact_url` and `artifact_list`.
//!
//! ## Key components
//!
//! - [`ActionConfig`] — the immutable per-pass inputs
//! - [`TriggerEvent`] / [`WorkflowRun`] — the triggering event payload
//! - [`GitHubClient`] — blocking REST implementation of [`wra_report::GitHubApi`]
//! - [`StepOutputs`] — where step outputs are published
//! - [`run_pass`] — the orchestrator
//! - [`annotations`] — workflow commands for the failure boundary

pub mod annotations;
pub mod config;
pub mod error;
pub mod event;
pub mod github;
pub mod orchestrator;
pub mod outputs;

pub use config::{ActionConfig, Repository};
pub use error::{ActionError, Result};
pub use event::{TriggerEvent, WorkflowRun};
pub use github::GitHubClient;
pub use orchestrator::{emit_outputs, run_pass, PassOutcome};
pub use outputs::{GithubOutputFile, LoggedOutputs, StepOutputs};

// inputs.rs — Action inputs and the single pass they drive.
//
// Every input is a flag with a fallback to the variable the Actions runner
// sets for it (`INPUT_<NAME>`, upper-cased with dashes kept).

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wra_action::github::DEFAULT_API_URL;
use wra_action::{
    run_pass, ActionConfig, GitHubClient, GithubOutputFile, LoggedOutputs, PassOutcome,
    Repository, StepOutputs, TriggerEvent,
};
use wra_report::ReportTemplates;

/// Report the artifacts of a completed workflow run.
#[derive(Parser, Debug)]
#[command(name = "wra", version, about)]
pub struct Cli {
    /// Token used for GitHub API calls.
    #[arg(long, env = "INPUT_GITHUB-TOKEN", default_value = "", hide_env_values = true)]
    pub github_token: String,

    /// Select the first artifact with exactly this name (empty: no selection).
    #[arg(long, env = "INPUT_ARTIFACT-NAME", default_value = "")]
    pub artifact_name: String,

    /// Where to report: commit_status, pull_request or none.
    #[arg(long, env = "INPUT_REPORT-ON", default_value = "none")]
    pub report_on: String,

    /// Template for the commit status context label.
    #[arg(long, env = "INPUT_CONTEXT", default_value = "artifacts")]
    pub context: String,

    /// Template for the status description or pull-request comment body.
    #[arg(long, env = "INPUT_MESSAGE", default_value = "")]
    pub message: String,

    /// Template for the commit status state.
    #[arg(long, env = "INPUT_STATE", default_value = "success")]
    pub state: String,

    /// Template for the commit status target URL.
    #[arg(long, env = "INPUT_TARGET-URL", default_value = "")]
    pub target_url: String,

    /// Skip reporting when the run has no artifacts (only "true" enables it).
    #[arg(long, env = "INPUT_IGNORE-EMPTY", default_value = "false")]
    pub ignore_empty: String,

    /// Repository as owner/repo.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Path to the triggering event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// File that step outputs are appended to (logged only when unset).
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,
}

impl Cli {
    pub fn action_config(&self) -> ActionConfig {
        ActionConfig {
            token: self.github_token.clone(),
            artifact_name: ActionConfig::optional(&self.artifact_name),
            report_on: self.report_on.clone(),
            templates: ReportTemplates {
                context: self.context.clone(),
                message: self.message.clone(),
                state: self.state.clone(),
                target_url: self.target_url.clone(),
            },
            ignore_empty: ActionConfig::flag(&self.ignore_empty),
        }
    }
}

/// Parse the command line and `INPUT_*` variables.
///
/// Help and version requests are printed here and come back as `Ok(None)`.
/// Any other parse failure is an error, so it reaches the same failure
/// boundary as a failed pass.
pub fn parse_args<I, T>(args: I) -> anyhow::Result<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) if !err.use_stderr() => {
            err.print()?;
            Ok(None)
        }
        Err(err) => {
            let rendered = err.to_string();
            let summary = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            Err(anyhow::Error::new(err).context(format!("invalid action inputs: {}", summary)))
        }
    }
}

/// Run one pass with the runner-provided environment.
pub fn execute(cli: &Cli) -> anyhow::Result<PassOutcome> {
    let config = cli.action_config();
    let repository: Repository = cli.repository.as_deref().unwrap_or_default().parse()?;
    let event = TriggerEvent::load(cli.event_path.as_deref())?;
    event.require_workflow_run()?;

    let client = GitHubClient::new(&config.token, &cli.api_url)
        .context("failed to set up the GitHub API client")?;

    let mut outputs: Box<dyn StepOutputs> = match &cli.output_file {
        Some(path) => Box::new(GithubOutputFile::new(path)),
        None => Box::new(LoggedOutputs),
    };

    Ok(run_pass(
        &config,
        &repository,
        &event,
        &client,
        outputs.as_mut(),
    )?)
}

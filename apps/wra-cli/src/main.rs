//! # wra
//!
//! Reports the artifacts of a completed GitHub Actions workflow run.
//!
//! Runs as a step of a workflow triggered by `workflow_run`. Inputs come from
//! flags or from the runner's `INPUT_*` variables. One pass:
//!
//! - lists the triggering run's artifacts
//! - optionally selects one by exact name (`artifact-name`)
//! - reports via a commit status, a pull-request comment, or not at all (`report-on`)
//! - publishes `artifact_id`, `artifact_url` and `artifact_list` step outputs
//!
//! Any failure is written as an `::error::` workflow command and exits 1.

mod inputs;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wra_action::{annotations, PassOutcome};

const LOG_TARGETS: [&str; 5] = ["wra", "wra_action", "wra_catalog", "wra_report", "wra_template"];

fn main() -> ExitCode {
    init_tracing();

    let cli = match inputs::parse_args(std::env::args_os()) {
        Ok(Some(cli)) => cli,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => return fail(&err),
    };

    match inputs::execute(&cli) {
        Ok(PassOutcome::Skipped) => {
            tracing::info!("Nothing reported");
            ExitCode::SUCCESS
        }
        Ok(PassOutcome::Reported { artifacts, outcome }) => {
            tracing::info!("Done: {} artifact(s), {}", artifacts, outcome);
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

fn fail(err: &anyhow::Error) -> ExitCode {
    annotations::set_failed(&err.to_string());
    tracing::error!("{:?}", err);
    ExitCode::FAILURE
}

/// Logs go to stderr so they don't interleave with workflow commands on stdout.
fn init_tracing() {
    let rust_log = std::env::var("RUST_LOG").ok();
    let runner_debug = std::env::var("RUNNER_DEBUG").as_deref() == Ok("1");

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), runner_debug))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// `RUST_LOG` wins when set; otherwise every `wra*` target logs at `info`,
/// or `debug` when the runner has debug logging on.
fn log_filter(rust_log: Option<&str>, runner_debug: bool) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|value| !value.trim().is_empty()) {
        return EnvFilter::new(directives);
    }

    let level = if runner_debug { "debug" } else { "info" };
    let mut filter = EnvFilter::new("warn");
    for target in LOG_TARGETS {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_directives_are_kept() {
        let filter = log_filter(Some("wra_action=trace"), false).to_string();
        assert!(filter.contains("wra_action=trace"));
        assert!(!filter.contains("wra_action=info"));
        assert!(!filter.contains("wra_report"));
    }

    #[test]
    fn defaults_apply_without_rust_log() {
        let filter = log_filter(None, false).to_string();
        for target in LOG_TARGETS {
            assert!(filter.contains(&format!("{}=info", target)), "{}", filter);
        }
    }

    #[test]
    fn runner_debug_raises_defaults() {
        let filter = log_filter(Some("  "), true).to_string();
        assert!(filter.contains("wra_template=debug"), "{}", filter);
    }
}

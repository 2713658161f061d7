//! "None" sink - reports nowhere

use wra_template::Renderer;

use crate::error::Result;
use crate::sink::{ReportOutcome, ReportSink, ReportTarget};

/// Sink that performs no write and renders nothing.
///
/// Selected by `report-on: none`, for workflows that only consume the step
/// outputs.
pub struct NoneSink;

impl NoneSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoneSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for NoneSink {
    fn report(&self, _renderer: &Renderer, target: &ReportTarget<'_>) -> Result<ReportOutcome> {
        tracing::debug!("NoneSink: report() for {} - no-op", target.sha);
        Ok(ReportOutcome::Skipped)
    }

    fn name(&self) -> &str {
        "none"
    }
}

//! Prometheus wiring for pipeline stage metrics.

use std::sync::Arc;
use std::time::Duration;

use lexreport::{PipelineError, PipelineMetrics, Stage};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::error::{ServerError, ServerResult};

/// Forwards stage outcomes to the `metrics` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusPipelineMetrics;

impl PipelineMetrics for PrometheusPipelineMetrics {
    fn record_stage(&self, stage: Stage, latency: Duration, result: Result<(), PipelineError>) {
        let outcome = match &result {
            Ok(()) => "ok",
            Err(PipelineError::Validation(_)) => "invalid",
            Err(PipelineError::EmptyCorpus) => "empty",
            Err(PipelineError::Fetch(_)) => "fetch_error",
            Err(PipelineError::Render(_)) => "render_error",
        };
        metrics::counter!(
            "lexreport_stage_total",
            "stage" => stage.as_str(),
            "outcome" => outcome
        )
        .increment(1);
        metrics::histogram!("lexreport_stage_duration_seconds", "stage" => stage.as_str())
            .record(latency.as_secs_f64());
    }
}

/// Installs the global Prometheus recorder and routes pipeline stage
/// metrics into it. Can only succeed once per process.
pub fn install() -> ServerResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Config(format!("prometheus recorder: {e}")))?;
    lexreport::set_pipeline_metrics(Some(Arc::new(PrometheusPipelineMetrics)));
    Ok(handle)
}

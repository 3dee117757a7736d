use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use lexreport::{
    seed_defaults, BaconIpsumSource, CorpusSource, LexreportConfig, MetricStore,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// Holds only long-lived handles; every request builds its own corpus and
/// artifacts.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Pipeline configuration used for every request
    pub pipeline: Arc<LexreportConfig>,

    /// Word metrics, seeded at startup
    pub store: Arc<dyn MetricStore>,

    /// Where paragraphs come from
    pub source: Arc<dyn CorpusSource>,

    /// Prometheus renderer, when a recorder was installed
    pub prometheus: Option<PrometheusHandle>,

    pub started_at: Instant,
}

impl ServerState {
    /// Create state from configuration: load the pipeline file, open and
    /// seed the metric store, and point the corpus at Bacon Ipsum.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let pipeline = match &config.pipeline_config {
            Some(path) => LexreportConfig::from_file(path)
                .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?,
            None => LexreportConfig::default(),
        };

        let store: Arc<dyn MetricStore> = Arc::from(pipeline.store.build()?);
        let inserted = seed_defaults(store.as_ref())?;
        tracing::info!(inserted, backend = ?pipeline.store, "metric store ready");

        let source = BaconIpsumSource::new(&pipeline.corpus)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self::with_parts(config, pipeline, store, Arc::new(source)))
    }

    /// Assemble state from already-built parts. Nothing is seeded.
    pub fn with_parts(
        config: ServerConfig,
        pipeline: LexreportConfig,
        store: Arc<dyn MetricStore>,
        source: Arc<dyn CorpusSource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            store,
            source,
            prometheus: None,
            started_at: Instant::now(),
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Server metadata for the info endpoint
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub name: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub endpoints: Vec<&'static str>,
}

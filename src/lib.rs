//! Workspace umbrella crate for lexreport.
//!
//! This crate stitches the tokenizer, frequency analysis, chart rendering and
//! report assembly into one pipeline so callers can go from a paragraph count
//! to PDF bytes with a single call.
//!
//! A request moves through [`Stage`]s strictly in order: the corpus is
//! fetched, tokenized and analyzed, the chart and tables are rendered, and the
//! document is assembled. Every artifact is an in-memory buffer owned by the
//! request, so concurrent requests share nothing but the corpus source.

pub mod config;

pub use chart::{render_chart, render_chart_svg, ChartArtifact, ChartConfig, ChartError};
pub use corpus::{
    BaconIpsumSource, Corpus, CorpusConfig, CorpusSource, FetchError, ParagraphCount,
    StaticSource, ValidationError,
};
pub use frequency::{analyze, Distributions, FreqDist, KeyLabel, Ranked};
pub use report::{
    assemble, ReportConfig, ReportDocument, ReportError, TableConfig, TableGrid,
};
pub use store::{
    seed_defaults, InMemoryMetricStore, MetricRecord, MetricStore, RedbMetricStore, StoreConfig,
    StoreError, DEFAULT_METRICS, TOP_METRICS,
};
pub use tokenize::{tokenize, tokenize_paragraphs, TokenizeConfig};

pub use crate::config::{ConfigLoadError, LexreportConfig};

use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Chart or document assembly failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Why a report could not be produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),
    #[error("corpus fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("no data: the corpus is empty")]
    EmptyCorpus,
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}

impl From<ChartError> for PipelineError {
    fn from(value: ChartError) -> Self {
        PipelineError::Render(RenderError::Chart(value))
    }
}

impl From<ReportError> for PipelineError {
    fn from(value: ReportError) -> Self {
        PipelineError::Render(RenderError::Report(value))
    }
}

/// Request-level progress through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Idle,
    Fetching,
    Tokenizing,
    Analyzing,
    Rendering,
    Assembling,
    Done,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Fetching => "fetching",
            Stage::Tokenizing => "tokenizing",
            Stage::Analyzing => "analyzing",
            Stage::Rendering => "rendering",
            Stage::Assembling => "assembling",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics observer for pipeline stages.
pub trait PipelineMetrics: Send + Sync {
    fn record_stage(&self, stage: Stage, latency: Duration, result: Result<(), PipelineError>);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Times one stage, logs the transition and reports the outcome.
struct StageSpan {
    stage: Stage,
    recorder: Option<Arc<dyn PipelineMetrics>>,
    start: Instant,
}

impl StageSpan {
    fn enter(stage: Stage) -> Self {
        debug!(stage = %stage, "entering stage");
        Self {
            stage,
            recorder: metrics_recorder(),
            start: Instant::now(),
        }
    }

    fn finish<T>(self, result: Result<T, PipelineError>) -> Result<T, PipelineError> {
        let latency = self.start.elapsed();
        if let Err(err) = &result {
            warn!(stage = %self.stage, error = %err, "stage failed");
        }
        if let Some(recorder) = self.recorder {
            let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
            recorder.record_stage(self.stage, latency, outcome);
        }
        result
    }
}

/// Validates a `paragraphsQty` value against the configured maximum.
pub fn validate_count(
    value: Option<&Value>,
    cfg: &LexreportConfig,
) -> Result<ParagraphCount, PipelineError> {
    Ok(ParagraphCount::from_json(value, cfg.corpus.max_paragraphs)?)
}

/// Fetches the corpus for `count`.
///
/// A count of zero is an empty corpus and never reaches the source; so is a
/// source that answers with no paragraphs.
pub async fn fetch_corpus(
    source: &dyn CorpusSource,
    count: ParagraphCount,
) -> Result<Corpus, PipelineError> {
    if count.is_zero() {
        return Err(PipelineError::EmptyCorpus);
    }
    let span = StageSpan::enter(Stage::Fetching);
    let result = match source.fetch(count).await {
        Ok(paragraphs) => Corpus::new(paragraphs).ok_or(PipelineError::EmptyCorpus),
        Err(err) => Err(PipelineError::Fetch(err)),
    };
    span.finish(result)
}

/// Tokenizes and counts `paragraphs`. Zero tokens is an empty corpus.
pub fn analyze_paragraphs<S: AsRef<str>>(
    paragraphs: &[S],
    cfg: &LexreportConfig,
) -> Result<Distributions, PipelineError> {
    let span = StageSpan::enter(Stage::Tokenizing);
    let tokens = tokenize_paragraphs(paragraphs, &cfg.tokenize);
    let tokens = span.finish(if tokens.is_empty() {
        Err(PipelineError::EmptyCorpus)
    } else {
        Ok(tokens)
    })?;

    let span = StageSpan::enter(Stage::Analyzing);
    let dists = analyze(&tokens);
    debug!(
        tokens = dists.token_count(),
        distinct_words = dists.words.len(),
        "corpus analyzed"
    );
    span.finish(Ok(dists))
}

/// Runs tokenizing through assembling over paragraphs already in hand.
pub fn build_report<S: AsRef<str>>(
    paragraphs: &[S],
    cfg: &LexreportConfig,
) -> Result<ReportDocument, PipelineError> {
    let dists = analyze_paragraphs(paragraphs, cfg)?;

    let span = StageSpan::enter(Stage::Rendering);
    let rendered = render_chart(&dists, &cfg.chart)
        .map(|chart| (chart, TableGrid::build(&dists, &cfg.tables)))
        .map_err(PipelineError::from);
    let (chart, tables) = span.finish(rendered)?;

    let span = StageSpan::enter(Stage::Assembling);
    let document = span.finish(
        assemble(paragraphs, &tables, &chart, &cfg.report).map_err(PipelineError::from),
    )?;

    info!(
        stage = %Stage::Done,
        paragraphs = paragraphs.len(),
        pages = document.page_count(),
        bytes = document.len(),
        "report generated"
    );
    Ok(document)
}

/// Fetches `count` paragraphs from `source` and builds the report.
pub async fn generate_report(
    source: &dyn CorpusSource,
    count: ParagraphCount,
    cfg: &LexreportConfig,
) -> Result<ReportDocument, PipelineError> {
    debug!(stage = %Stage::Idle, paragraphs = count.get(), "report requested");
    let corpus = fetch_corpus(source, count).await?;
    build_report(corpus.paragraphs(), cfg)
}

/// Renders only the chart, as SVG, for paragraphs already in hand.
pub fn build_chart_svg<S: AsRef<str>>(
    paragraphs: &[S],
    cfg: &LexreportConfig,
) -> Result<String, PipelineError> {
    let dists = analyze_paragraphs(paragraphs, cfg)?;
    let span = StageSpan::enter(Stage::Rendering);
    span.finish(render_chart_svg(&dists, &cfg.chart).map_err(PipelineError::from))
}
